//! Command-line configuration.

use clap::Parser;

/// Start-up options for the board window.
#[derive(Debug, Clone, PartialEq, Parser)]
#[command(name = "hexboard", version, about = "Hexagonal board game")]
pub struct AppConfig {
    /// Cells from the centre to each edge of the board, centre included.
    #[arg(long, default_value_t = 6, value_parser = clap::value_parser!(u16).range(2..=16))]
    pub side_len: u16,

    /// Initial window width in points.
    #[arg(long, default_value_t = 800.0)]
    pub width: f32,

    /// Initial window height in points.
    #[arg(long, default_value_t = 800.0)]
    pub height: f32,

    /// Start with hints shown.
    #[arg(long)]
    pub hints: bool,

    /// Start from an empty board instead of the opening position.
    #[arg(long)]
    pub empty: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            side_len: 6,
            width: 800.0,
            height: 800.0,
            hints: false,
            empty: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::AppConfig;

    #[test]
    fn defaults_match_parsed_defaults() {
        let parsed = AppConfig::try_parse_from(["hexboard"]).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn parses_flags() {
        let parsed =
            AppConfig::try_parse_from(["hexboard", "--side-len", "4", "--hints", "--empty"])
                .unwrap();
        assert_eq!(parsed.side_len, 4);
        assert!(parsed.hints);
        assert!(parsed.empty);
    }

    #[test]
    fn rejects_out_of_range_side_len() {
        assert!(AppConfig::try_parse_from(["hexboard", "--side-len", "1"]).is_err());
        assert!(AppConfig::try_parse_from(["hexboard", "--side-len", "17"]).is_err());
    }
}
