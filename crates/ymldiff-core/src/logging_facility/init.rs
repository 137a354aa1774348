//! Logging initialization

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Warnings only, human-readable
    Quiet,
    /// Human-readable output with debug level
    Development,
    /// JSON structured output with info level
    Production,
    /// No output; tests install their own capture layer
    Test,
}

impl Profile {
    /// Default filter directive when `RUST_LOG` is unset
    pub fn default_directive(&self) -> &'static str {
        match self {
            Profile::Quiet => "ymldiff=warn",
            Profile::Development => "ymldiff=debug",
            Profile::Production => "ymldiff=info",
            Profile::Test => "off",
        }
    }

    fn filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(self.default_directive()))
    }
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Only the first call installs a subscriber. `RUST_LOG` overrides the
/// profile's default level.
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Quiet | Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.filter())
                .finish()
                .try_init()
                .ok();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(profile.filter())
                .finish()
                .try_init()
                .ok();
        }
        Profile::Test => {
            tracing_subscriber::registry().try_init().ok();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_idempotent() {
        init(Profile::Test);
        init(Profile::Test);
        init(Profile::Quiet);
    }

    #[test]
    fn test_default_directives() {
        assert_eq!(Profile::Quiet.default_directive(), "ymldiff=warn");
        assert_eq!(Profile::Development.default_directive(), "ymldiff=debug");
        assert_eq!(Profile::Production.default_directive(), "ymldiff=info");
    }
}
