//! CLI configuration via environment variables
//!
//! Every setting has a matching command-line flag; a flag that is present
//! wins over the environment.

use crate::testing::runner::DEFAULT_PYTHON;
use std::env;

/// CLI configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Interpreter to run doctests with (DOCTESTS_PYTHON, defaults to python3)
    pub python: String,
    /// Verbose doctest output (DOCTESTS_VERBOSE=1)
    pub verbose: bool,
    /// JSON report instead of the running commentary (DOCTESTS_JSON=1)
    pub json: bool,
    /// Disable colored output (DOCTESTS_NO_COLOR=1 or NO_COLOR=1)
    pub no_color: bool,
}

/// Interpret a boolean environment variable; set and not `0`/`false`/`off` means on
fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| {
            let lower = v.trim().to_lowercase();
            !(lower == "0" || lower == "false" || lower == "off")
        })
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            python: env::var("DOCTESTS_PYTHON")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PYTHON.to_string()),
            verbose: env_flag("DOCTESTS_VERBOSE"),
            json: env_flag("DOCTESTS_JSON"),
            no_color: env::var("DOCTESTS_NO_COLOR").is_ok() || env::var("NO_COLOR").is_ok(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for name in [
            "DOCTESTS_PYTHON",
            "DOCTESTS_VERBOSE",
            "DOCTESTS_JSON",
            "DOCTESTS_NO_COLOR",
            "NO_COLOR",
        ] {
            env::remove_var(name);
        }
    }

    #[test]
    #[serial]
    fn test_config_defaults() {
        clear_env();

        let config = Config::from_env();
        assert_eq!(config.python, "python3");
        assert!(!config.verbose);
        assert!(!config.json);
        assert!(!config.no_color);
    }

    #[test]
    #[serial]
    fn test_config_python() {
        clear_env();
        env::set_var("DOCTESTS_PYTHON", "/opt/py/bin/python3.11");
        assert_eq!(Config::from_env().python, "/opt/py/bin/python3.11");

        env::set_var("DOCTESTS_PYTHON", "  ");
        assert_eq!(Config::from_env().python, "python3");
        env::remove_var("DOCTESTS_PYTHON");
    }

    #[test]
    #[serial]
    fn test_config_flags() {
        clear_env();
        env::set_var("DOCTESTS_VERBOSE", "1");
        env::set_var("DOCTESTS_JSON", "off");
        let config = Config::from_env();
        assert!(config.verbose);
        assert!(!config.json);
        clear_env();
    }

    #[test]
    #[serial]
    fn test_config_no_color() {
        clear_env();
        env::set_var("NO_COLOR", "1");
        assert!(Config::from_env().no_color);
        env::remove_var("NO_COLOR");

        env::set_var("DOCTESTS_NO_COLOR", "1");
        assert!(Config::from_env().no_color);
        env::remove_var("DOCTESTS_NO_COLOR");
    }
}
