//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive, e.g. `ccux=debug`.
pub const LOG_ENV: &str = "CCUX_LOG";

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}

/// Install the stderr subscriber. `CCUX_LOG` wins over `--verbose`.
pub fn init(verbose: bool) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_level(false), "warn");
        assert_eq!(default_level(true), "debug");
    }
}
