use anyhow::Result;
use clap::Parser;
use fragility::cli::{Cli, OutputFormat};
use fragility::json_output::JsonAnalysis;
use fragility::search;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    let assessment = search::assess_fragility(cli.table);

    match cli.format {
        OutputFormat::Text => {
            print!("{}", assessment.to_report_string(cli.steps));
        }
        OutputFormat::Json => {
            let record = JsonAnalysis::from_assessment(&assessment, cli.steps);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }

    Ok(())
}
