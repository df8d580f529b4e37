use chromecast_cli::app;
use chromecast_cli::utils::logger;
use chromecast_cli::{CliConfig, RustCastConnector};
use clap::Parser;

#[tokio::main]
async fn main() {
    let config = match CliConfig::try_parse() {
        Ok(config) => config,
        Err(e) => {
            let _ = e.print();
            std::process::exit(app::parse_error_exit_code(&e));
        }
    };

    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::debug!("CLI config: {:?}", config);

    let mut stdout = std::io::stdout();
    let code = app::run(config, RustCastConnector, &mut stdout).await;

    // Exit right away: a timed-out session may still hold a blocking thread
    // that the runtime would otherwise wait for.
    std::process::exit(code);
}
