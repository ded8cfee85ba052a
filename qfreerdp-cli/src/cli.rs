//! CLI argument parsing types using `clap`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use qfreerdp_core::models::{
    AudioMode, ColorDepth, CompressionMode, PerformancePreset, Resolution, ResolutionMode,
};
use qfreerdp_core::protocol::DEFAULT_CLIENT_BINARY;

use crate::util::parse_color_depth;

/// Launcher for FreeRDP 2.x remote desktop sessions
#[derive(Parser)]
#[command(name = "qfreerdp")]
#[command(author, version, about = "Launch FreeRDP remote desktop sessions with saved preferences")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the configuration directory
    #[arg(short, long, global = true, env = "QFREERDP_CONFIG_DIR")]
    pub config: Option<PathBuf>,

    /// FreeRDP client binary to run
    #[arg(long, global = true, env = "QFREERDP_CLIENT", default_value = DEFAULT_CLIENT_BINARY)]
    pub client: String,

    /// Size of an attached display; repeat for several (overrides detection)
    #[arg(long = "display", value_name = "WxH", global = true)]
    pub displays: Vec<Resolution>,

    /// Increase output verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH", global = true, env = "QFREERDP_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Start a session with the saved preferences and any overrides
    #[command(about = "Start a remote desktop session")]
    Connect {
        #[command(flatten)]
        options: PreferenceArgs,

        /// Print the client command line (password masked) instead of
        /// starting it
        #[arg(long)]
        dry_run: bool,

        /// Do not save the preferences after a successful start
        #[arg(long)]
        no_save: bool,
    },

    /// Show the saved preferences and the arguments they compile to
    #[command(about = "Show the effective preferences")]
    Show {
        #[command(flatten)]
        options: PreferenceArgs,

        /// Output format
        #[arg(short, long, default_value = "text", value_enum)]
        format: ShowFormat,
    },

    /// List the standard sizes that fit the attached displays
    #[command(about = "List the offered standard resolutions")]
    Resolutions,

    /// Check the installed FreeRDP client
    #[command(about = "Check the FreeRDP client version")]
    Check,

    /// Generate shell completions
    #[command(about = "Generate shell completion scripts")]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate man page
    #[command(about = "Generate man page to stdout")]
    Manpage,
}

/// Overrides applied on top of the saved preferences
#[derive(Args, Debug, Default)]
pub struct PreferenceArgs {
    /// Server host name, optionally with :port
    #[arg(short, long, help_heading = "Login")]
    pub server: Option<String>,

    /// Username, optionally DOMAIN\user or user@DOMAIN
    #[arg(short, long, help_heading = "Login")]
    pub username: Option<String>,

    /// Password (prompted for when empty and running in a terminal)
    #[arg(long, env = "QFREERDP_PASSWORD", hide_env_values = true, help_heading = "Login")]
    pub password: Option<String>,

    /// How the desktop size is chosen
    #[arg(long, value_enum, help_heading = "Display")]
    pub resolution_mode: Option<ResolutionModeArg>,

    /// Standard size from the catalogue
    #[arg(long, value_name = "WxH", help_heading = "Display")]
    pub size: Option<Resolution>,

    /// Custom width in pixels (100-65535)
    #[arg(long, value_name = "PIXELS", help_heading = "Display")]
    pub custom_width: Option<String>,

    /// Custom height in pixels (100-65535)
    #[arg(long, value_name = "PIXELS", help_heading = "Display")]
    pub custom_height: Option<String>,

    /// Color depth in bits per pixel (15, 16, 24 or 32)
    #[arg(long, value_name = "BITS", value_parser = parse_color_depth, help_heading = "Display")]
    pub bpp: Option<ColorDepth>,

    /// Network compression
    #[arg(long, value_enum, help_heading = "Compression")]
    pub compression: Option<CompressionArg>,

    /// Compression level, implies --compression level
    #[arg(long, value_name = "LEVEL", value_parser = clap::value_parser!(u8).range(0..=2), help_heading = "Compression")]
    pub compression_level: Option<u8>,

    /// Enable the JPEG codec
    #[arg(long, value_name = "BOOL", help_heading = "Compression")]
    pub jpeg: Option<bool>,

    /// JPEG quality (10-100)
    #[arg(long, value_name = "QUALITY", value_parser = clap::value_parser!(u8).range(10..=100), help_heading = "Compression")]
    pub jpeg_quality: Option<u8>,

    /// Audio playback
    #[arg(long, value_enum, help_heading = "Devices")]
    pub audio: Option<AudioArg>,

    /// Share the clipboard
    #[arg(long, value_name = "BOOL", help_heading = "Devices")]
    pub clipboard: Option<bool>,

    /// Redirect all local drives
    #[arg(long, value_name = "BOOL", help_heading = "Devices")]
    pub redirect_drives: Option<bool>,

    /// Redirect the home directory
    #[arg(long, value_name = "BOOL", help_heading = "Devices")]
    pub redirect_home: Option<bool>,

    /// Performance preset; individual toggles below are applied after it
    #[arg(long, value_enum, help_heading = "Experience")]
    pub preset: Option<PresetArg>,

    /// Desktop wallpaper
    #[arg(long, value_name = "BOOL", help_heading = "Experience")]
    pub wallpaper: Option<bool>,

    /// Font smoothing
    #[arg(long, value_name = "BOOL", help_heading = "Experience")]
    pub font_smoothing: Option<bool>,

    /// Desktop composition
    #[arg(long, value_name = "BOOL", help_heading = "Experience")]
    pub aero: Option<bool>,

    /// Show window contents while dragging
    #[arg(long, value_name = "BOOL", help_heading = "Experience")]
    pub window_drag: Option<bool>,

    /// Menu animations
    #[arg(long, value_name = "BOOL", help_heading = "Experience")]
    pub menu_animations: Option<bool>,

    /// Windows themes
    #[arg(long, value_name = "BOOL", help_heading = "Experience")]
    pub themes: Option<bool>,

    /// Bitmap caching
    #[arg(long, value_name = "BOOL", help_heading = "Caching")]
    pub bitmap_cache: Option<bool>,

    /// Offscreen bitmap caching
    #[arg(long, value_name = "BOOL", help_heading = "Caching")]
    pub offscreen_cache: Option<bool>,

    /// Glyph caching
    #[arg(long, value_name = "BOOL", help_heading = "Caching")]
    pub glyph_cache: Option<bool>,

    /// RD Gateway host; an empty value disables the gateway
    #[arg(long, value_name = "HOST", help_heading = "Gateway")]
    pub gateway: Option<String>,

    /// RD Gateway username
    #[arg(long, help_heading = "Gateway")]
    pub gateway_username: Option<String>,

    /// RD Gateway password
    #[arg(long, env = "QFREERDP_GATEWAY_PASSWORD", hide_env_values = true, help_heading = "Gateway")]
    pub gateway_password: Option<String>,
}

/// Resolution mode argument
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ResolutionModeArg {
    /// A standard catalogue size
    Standard,
    /// --custom-width x --custom-height
    Custom,
    /// Full screen
    Fullscreen,
}

impl From<ResolutionModeArg> for ResolutionMode {
    fn from(arg: ResolutionModeArg) -> Self {
        match arg {
            ResolutionModeArg::Standard => Self::Standard,
            ResolutionModeArg::Custom => Self::Custom,
            ResolutionModeArg::Fullscreen => Self::Fullscreen,
        }
    }
}

/// Compression argument
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompressionArg {
    /// Compression off
    Disabled,
    /// Client default
    Default,
    /// Explicit level from --compression-level
    Level,
}

impl From<CompressionArg> for CompressionMode {
    fn from(arg: CompressionArg) -> Self {
        match arg {
            CompressionArg::Disabled => Self::Disabled,
            CompressionArg::Default => Self::Default,
            CompressionArg::Level => Self::Level,
        }
    }
}

/// Audio argument
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum AudioArg {
    /// Play on this machine
    Local,
    /// Leave audio on the remote machine
    Remote,
    /// No audio
    Off,
}

impl From<AudioArg> for AudioMode {
    fn from(arg: AudioArg) -> Self {
        match arg {
            AudioArg::Local => Self::RedirectLocal,
            AudioArg::Remote => Self::PlayRemote,
            AudioArg::Off => Self::Disabled,
        }
    }
}

/// Performance preset argument
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum PresetArg {
    /// Everything off
    Minimum,
    /// Themes only
    Low,
    /// Desktop composition and themes
    Mid,
    /// Everything on
    High,
}

impl From<PresetArg> for PerformancePreset {
    fn from(arg: PresetArg) -> Self {
        match arg {
            PresetArg::Minimum => Self::Minimum,
            PresetArg::Low => Self::Low,
            PresetArg::Mid => Self::Mid,
            PresetArg::High => Self::High,
        }
    }
}

/// Output format for `show`
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ShowFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// JSON document
    Json,
    /// TOML document
    Toml,
}
