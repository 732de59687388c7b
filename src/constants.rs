//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Default avatar base URL for new friends
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Default value shown in the balance form amount fields
pub const DEFAULT_AMOUNT: &str = "0";

/// Directory under the home directory holding the config file
pub const CONFIG_DIR_NAME: &str = ".split-tui";

/// Config file name
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default log file name
pub const DEFAULT_LOG_FILE: &str = "split-tui.log";

/// Default terminal event poll interval
pub const DEFAULT_TICK_RATE_MS: u64 = 50;

/// Application name
pub const APP_NAME: &str = "Split TUI";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
