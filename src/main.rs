use carpool_planner::utils::{logger, validation::Validate};
use carpool_planner::{CarpoolEngine, CarpoolError, CliConfig};
use clap::Parser;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger();

    tracing::info!("Starting carpool-planner");
    tracing::debug!("CLI config: {:?}", config);

    let source = match config.validate().and_then(|_| config.source()) {
        Ok(source) => source,
        Err(e) => fail(e),
    };

    let engine = CarpoolEngine::new(source);
    match engine.run() {
        Ok(reports) => {
            for report in &reports {
                println!("{}", report);
            }
            tracing::info!("Solved {} case(s)", reports.len());
        }
        Err(e) => fail(e),
    }
}

fn fail(e: CarpoolError) -> ! {
    tracing::debug!("Run failed: {} (Category: {:?})", e, e.category());
    eprintln!("Error: {}", e.user_friendly_message());
    eprintln!("Suggestion: {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
