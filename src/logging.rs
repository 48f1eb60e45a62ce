//! Logger setup.

use std::str::FromStr;

/// Parses a level name such as `"debug"`, falling back to `Info`.
pub fn parse_level(name: &str) -> log::LevelFilter {
    log::LevelFilter::from_str(name.trim()).unwrap_or(log::LevelFilter::Info)
}

/// Installs a stdout logger. `RUST_LOG`, when set to a level name, takes
/// precedence over `level`.
pub fn init(level: &str) {
    let level = match std::env::var("RUST_LOG") {
        Ok(env_level) if log::LevelFilter::from_str(env_level.trim()).is_ok() => {
            parse_level(&env_level)
        }
        _ => parse_level(level),
    };

    let result = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply();

    if let Err(e) = result {
        log::debug!("Logger already initialized: {e}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), log::LevelFilter::Debug);
        assert_eq!(parse_level(" WARN "), log::LevelFilter::Warn);
        assert_eq!(parse_level("off"), log::LevelFilter::Off);
        assert_eq!(parse_level("loud"), log::LevelFilter::Info);
    }

    #[test]
    fn test_init_twice() {
        init("info");
        init("debug");
    }
}
