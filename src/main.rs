use anyhow::Context;
use clap::Parser;
use reference_package::utils::logger;
use reference_package::CliConfig;

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger();
    tracing::debug!("CLI config: {:?}", config);

    let request = match config.to_request() {
        Ok(request) => request,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    tracing::info!("Waiting {} seconds", request.seconds);
    request.run().context("failed to run wait_a_second")?;
    tracing::debug!("Finished");

    Ok(())
}
