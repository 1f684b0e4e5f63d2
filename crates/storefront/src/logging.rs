//! Tracing subscriber setup for the binary.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Level for a `-v` count: 0=warn, 1=info, 2=debug, 3+=trace.
#[must_use]
pub const fn level_for(verbosity: u8) -> Level {
    match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr `fmt` subscriber. `RUST_LOG` wins over `verbosity`.
///
/// Calling this twice is harmless; the second call keeps the first
/// subscriber.
pub fn init(verbosity: u8) {
    let fallback = level_for(verbosity).as_str().to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_levels() {
        assert_eq!(level_for(0), Level::WARN);
        assert_eq!(level_for(1), Level::INFO);
        assert_eq!(level_for(2), Level::DEBUG);
        assert_eq!(level_for(3), Level::TRACE);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn init_twice_is_harmless() {
        init(0);
        init(2);
    }
}
