//! CLI argument parsing

use clap::{Parser, ValueEnum};

use crate::table::{ContingencyTable, ParseTableError};

/// Output format for analysis results
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
}

fn parse_table(s: &str) -> Result<ContingencyTable, ParseTableError> {
    s.parse()
}

#[derive(Parser, Debug)]
#[command(name = "fragility")]
#[command(version)]
#[command(
    about = "Significance and fragility-index analysis for 2x2 contingency tables",
    long_about = None
)]
pub struct Cli {
    /// Contingency table as a,b,c,d: Group 1 events, Group 1 non-events,
    /// Group 2 events, Group 2 non-events (e.g. 10,90,20,80)
    #[arg(value_name = "TABLE", value_parser = parse_table)]
    pub table: ContingencyTable,

    /// Output format (text or json)
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Include the per-flip search trajectory in the output
    #[arg(long = "steps")]
    pub steps: bool,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_table() {
        let cli = Cli::parse_from(["fragility", "10,90,20,80"]);
        assert_eq!(cli.table, ContingencyTable::new(10, 90, 20, 80));
    }

    #[test]
    fn test_cli_rejects_malformed_table() {
        assert!(Cli::try_parse_from(["fragility", "10,90,20"]).is_err());
        assert!(Cli::try_parse_from(["fragility", "10,90,20,x"]).is_err());
        assert!(Cli::try_parse_from(["fragility"]).is_err());
    }

    #[test]
    fn test_cli_format_defaults_to_text() {
        let cli = Cli::parse_from(["fragility", "1,2,3,4"]);
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn test_cli_json_format() {
        let cli = Cli::parse_from(["fragility", "1,2,3,4", "--format", "json"]);
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn test_cli_steps_flag() {
        let cli = Cli::parse_from(["fragility", "1,2,3,4", "--steps"]);
        assert!(cli.steps);

        let cli = Cli::parse_from(["fragility", "1,2,3,4"]);
        assert!(!cli.steps);
    }

    #[test]
    fn test_cli_debug_default_false() {
        let cli = Cli::parse_from(["fragility", "1,2,3,4"]);
        assert!(!cli.debug);
    }
}
