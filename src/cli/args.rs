//! CLI argument definitions using Clap

use clap::{Parser, Subcommand};

/// Valid config keys for get/set
pub const VALID_CONFIG_KEYS: [&str; 5] =
    ["app_name", "icon", "backend", "retries", "retry_interval"];

/// Check whether a key is a known config key
pub fn is_valid_config_key(key: &str) -> bool {
    VALID_CONFIG_KEYS.contains(&key)
}

/// deskpop - best-effort desktop notifications
#[derive(Parser, Debug)]
#[command(name = "deskpop")]
#[command(version)]
#[command(about = "Show a desktop notification, retrying while the notification service starts up")]
#[command(long_about = None)]
pub struct Cli {
    /// Notification summary (the headline)
    #[arg(value_name = "SUMMARY")]
    pub summary: Option<String>,

    /// Notification body text
    #[arg(value_name = "BODY")]
    pub body: Option<String>,

    /// Icon name or path
    #[arg(short, long, value_name = "ICON")]
    pub icon: Option<String>,

    /// Application name reported to the notification service
    #[arg(short, long, value_name = "NAME")]
    pub app_name: Option<String>,

    /// Notification backend (notify-rust, notify-send)
    #[arg(short, long, value_name = "BACKEND")]
    pub backend: Option<String>,

    /// Retry attempts while the notification service is unavailable
    #[arg(short, long, value_name = "COUNT")]
    pub retries: Option<u32>,

    /// Seconds between retry attempts
    #[arg(long, value_name = "SECS")]
    pub retry_interval: Option<u64>,

    /// Exit immediately instead of waiting for scheduled retries
    #[arg(long)]
    pub no_wait: bool,

    /// Config subcommand
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Config action subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Create a config file with default values
    Init,
    /// Set a config value
    Set {
        /// Config key (app_name, icon, retries, retry_interval)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a config value
    Get {
        /// Config key
        key: String,
    },
    /// List all config values
    List,
    /// Print the config file path
    Path,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn known_keys_are_valid() {
        assert!(is_valid_config_key("app_name"));
        assert!(is_valid_config_key("icon"));
        assert!(is_valid_config_key("backend"));
        assert!(is_valid_config_key("retries"));
        assert!(is_valid_config_key("retry_interval"));
    }

    #[test]
    fn unknown_key_is_invalid() {
        assert!(!is_valid_config_key("use_popup"));
    }

    #[test]
    fn summary_and_body_positionals() {
        let cli = Cli::parse_from(["deskpop", "Hello", "world"]);
        assert_eq!(cli.summary.as_deref(), Some("Hello"));
        assert_eq!(cli.body.as_deref(), Some("world"));
    }

    #[test]
    fn retry_flags_parse() {
        let cli = Cli::parse_from(["deskpop", "-r", "2", "--retry-interval", "10", "Hi"]);
        assert_eq!(cli.retries, Some(2));
        assert_eq!(cli.retry_interval, Some(10));
    }

    #[test]
    fn backend_flag_parses() {
        let cli = Cli::parse_from(["deskpop", "--backend", "notify-send", "Hi"]);
        assert_eq!(cli.backend.as_deref(), Some("notify-send"));
    }
}
