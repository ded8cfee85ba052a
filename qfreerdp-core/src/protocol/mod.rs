//! FreeRDP client integration
//!
//! Compiling preferences into client arguments, checking the installed
//! client's version, and starting it detached.

mod detection;
pub mod freerdp;
mod launcher;

pub use detection::{
    DetectedClient, REQUIRED_MAJOR_VERSION, VERSION_QUERY_ARG, check_version_output,
    detect_freerdp, parse_freerdp_version,
};
pub use freerdp::{
    DEFAULT_CLIENT_BINARY, TOGGLE_FLAG_NAMES, ToggleFlags, build_freerdp_args,
    format_command_for_log, mask_args, parse_toggle_flags,
};
pub use launcher::{
    DetachedLauncher, LaunchedSession, ProcessLauncher, launch_session,
};
