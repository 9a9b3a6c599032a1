use clap::Parser;
use orgsearch::utils::logger;
use orgsearch::{CliConfig, MenuLoop, StdConsole};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting orgsearch");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let company = orgsearch::sample::sample_company();
    tracing::debug!(
        "Loaded demo dataset: {} departments",
        company.departments.len()
    );

    let mut menu = MenuLoop::new(&company, StdConsole::new());
    if let Err(e) = menu.run() {
        tracing::error!("Menu loop failed: {e}");
        return Err(e.into());
    }

    Ok(())
}
