use clap::{Arg, ArgAction, Command, builder::ValueParser};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const ARG_LOG_JSON: &str = "log-json";

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts `NAMBA_LOG_LEVEL` either as a level name or as the number of `-v`
/// flags it stands for.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> std::result::Result<u8, String> {
        let level = level.trim().to_lowercase();
        if let Some(index) = LEVELS.iter().position(|name| *name == level) {
            return u8::try_from(index).map_err(|err| err.to_string());
        }
        match level.parse::<u8>() {
            Ok(count) if usize::from(count) < LEVELS.len() => Ok(count),
            _ => Err(format!("invalid log level, expected one of {}", LEVELS.join(", "))),
        }
    })
}

/// Tracing level for a verbosity count; anything past the table is `TRACE`.
#[must_use]
pub const fn level_for(verbosity: u8) -> tracing::Level {
    match verbosity {
        0 => tracing::Level::ERROR,
        1 => tracing::Level::WARN,
        2 => tracing::Level::INFO,
        3 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    }
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_VERBOSITY)
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("NAMBA_LOG_LEVEL")
                .global(true)
                .action(ArgAction::Count)
                .value_parser(validator_log_level()),
        )
        .arg(
            Arg::new(ARG_LOG_JSON)
                .long("log-json")
                .help("Emit logs on stderr as JSON lines")
                .env("NAMBA_LOG_JSON")
                .global(true)
                .action(ArgAction::SetTrue),
        )
}

#[cfg(test)]
mod tests {
    use super::{level_for, validator_log_level};
    use clap::{Arg, Command};

    fn parse(level: &str) -> Result<u8, clap::Error> {
        Command::new("test")
            .arg(Arg::new("level").long("level").value_parser(validator_log_level()))
            .try_get_matches_from(["test", "--level", level])
            .map(|matches| matches.get_one::<u8>("level").copied().unwrap_or_default())
    }

    #[test]
    fn level_names_and_counts_are_accepted() {
        assert_eq!(parse("error").ok(), Some(0));
        assert_eq!(parse(" Debug ").ok(), Some(3));
        assert_eq!(parse("2").ok(), Some(2));
    }

    #[test]
    fn unknown_levels_are_rejected() {
        assert!(parse("verbose").is_err());
        assert!(parse("9").is_err());
    }

    #[test]
    fn counts_map_to_levels() {
        assert_eq!(level_for(0), tracing::Level::ERROR);
        assert_eq!(level_for(2), tracing::Level::INFO);
        assert_eq!(level_for(9), tracing::Level::TRACE);
    }
}
