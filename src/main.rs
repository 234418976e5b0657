use clap::Parser;
use standings_view::utils::sink::{StdoutSink, TracingSink};
use standings_view::utils::{logger, validation::Validate};
use standings_view::{sample_standings, CliConfig, StandingsPipeline, StandingsRenderer};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting standings-view");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        let message = e.user_friendly_message();
        return Err(anyhow::Error::new(e).context(message));
    }

    let data = match sample_standings() {
        Ok(data) => data,
        Err(e) => {
            // Logged and swallowed like any other render failure.
            tracing::error!("Standings render failed: {}", e);
            return Ok(());
        }
    };

    if config.stdout {
        StandingsRenderer::new(StandingsPipeline::new(config, StdoutSink)).run(&data);
    } else {
        StandingsRenderer::new(StandingsPipeline::new(config, TracingSink)).run(&data);
    }

    Ok(())
}
