//! FreeRDP client detection
//!
//! Runs the client once with `--version` and checks that it reports a
//! supported major version. This happens before anything else at startup.

use std::io::Read;
use std::process::{Command, Stdio};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use regex::Regex;

use crate::error::{DetectionError, DetectionResult};
use crate::tracing::span_names;

/// Argument that makes the client print its version and exit
pub const VERSION_QUERY_ARG: &str = "--version";

/// Major version the argument syntax is written for
pub const REQUIRED_MAJOR_VERSION: u32 = 2;

/// Version query timeout
///
/// A client that hangs (for example waiting on a display) is killed after
/// this long and whatever it printed so far is parsed.
const VERSION_CHECK_TIMEOUT: Duration = Duration::from_secs(6);

/// Matches `FreeRDP version 2.3.0` anywhere in a line
static VERSION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"FreeRDP version ([0-9.]*)").expect("VERSION_REGEX is a valid regex pattern")
});

/// A client that passed the version check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedClient {
    /// Binary name or path that was invoked
    pub binary: String,
    /// Reported version, e.g. `2.3.0`
    pub version: String,
}

/// Extracts the version from the first line mentioning `FreeRDP version`.
///
/// Returns `None` if no line matches or the matching line carries no digits.
#[must_use]
pub fn parse_freerdp_version(output: &str) -> Option<String> {
    output
        .lines()
        .find_map(|line| VERSION_REGEX.captures(line))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .filter(|version| !version.is_empty())
}

/// Validates `--version` output from `binary`.
///
/// # Errors
///
/// - [`DetectionError::ExternalClientVersionUnparseable`] if no version line is found
/// - [`DetectionError::ExternalClientVersionUnsupported`] if the major version is not 2
pub fn check_version_output(binary: &str, output: &str) -> DetectionResult<DetectedClient> {
    let version = parse_freerdp_version(output).ok_or_else(|| {
        DetectionError::ExternalClientVersionUnparseable {
            binary: binary.to_string(),
        }
    })?;

    let major = version.split('.').next().and_then(|s| s.parse::<u32>().ok());
    if major != Some(REQUIRED_MAJOR_VERSION) {
        return Err(DetectionError::ExternalClientVersionUnsupported {
            binary: binary.to_string(),
            version,
            required: REQUIRED_MAJOR_VERSION,
        });
    }

    Ok(DetectedClient {
        binary: binary.to_string(),
        version,
    })
}

/// Runs `binary --version` and validates what it prints on stdout.
///
/// # Errors
///
/// Returns [`DetectionError::ExternalClientNotFound`] if the binary cannot be
/// started, otherwise the errors of [`check_version_output`].
pub fn detect_freerdp(binary: &str) -> DetectionResult<DetectedClient> {
    let _span = tracing::debug_span!(span_names::CLIENT_DETECT, binary = %binary).entered();

    let output = query_stdout(binary, &[VERSION_QUERY_ARG]).map_err(|e| {
        DetectionError::ExternalClientNotFound {
            binary: binary.to_string(),
            reason: e.to_string(),
        }
    })?;

    let result = check_version_output(binary, &output);
    match &result {
        Ok(client) => tracing::info!(version = %client.version, "Detected FreeRDP client"),
        Err(e) => tracing::warn!(error = %e, "FreeRDP version check failed"),
    }
    result
}

/// Runs a binary with a timeout and returns its stdout
fn query_stdout(binary: &str, args: &[&str]) -> std::io::Result<String> {
    let mut child = Command::new(binary)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let start = Instant::now();
    loop {
        match child.try_wait() {
            Ok(Some(_status)) => break,
            Ok(None) => {
                if start.elapsed() >= VERSION_CHECK_TIMEOUT {
                    tracing::warn!(binary = %binary, "Version query timed out");
                    let _ = child.kill();
                    let _ = child.wait();
                    break;
                }
                std::thread::sleep(Duration::from_millis(50));
            }
            Err(e) => return Err(e),
        }
    }

    let mut raw = Vec::new();
    if let Some(mut stdout) = child.stdout.take() {
        stdout.read_to_end(&mut raw)?;
    }
    Ok(String::from_utf8_lossy(&raw).into_owned())
}
