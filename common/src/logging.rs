use log::LevelFilter;

/// Initialises the global logger, writing to stderr.
///
/// Unknown level names fall back to `warn`. Calling this twice is harmless.
pub fn init(level: &str) -> LevelFilter {
    let filter = parse_level(level);
    let _ = env_logger::Builder::new()
        .filter_level(filter)
        .format_timestamp(None)
        .try_init();
    filter
}

fn parse_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or(LevelFilter::Warn)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_levels() {
        assert_eq!(LevelFilter::Debug, parse_level("debug"));
        assert_eq!(LevelFilter::Trace, parse_level("TRACE"));
        assert_eq!(LevelFilter::Off, parse_level("off"));
    }

    #[test]
    fn unknown_level_falls_back_to_warn() {
        assert_eq!(LevelFilter::Warn, parse_level("loud"));
        assert_eq!(LevelFilter::Warn, parse_level(""));
    }

    #[test]
    fn init_twice_does_not_panic() {
        init("info");
        init("debug");
    }
}
