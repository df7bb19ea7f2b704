//! Beacon chain light client binary.

use beacon_node_builder::NodeBuilder;
use beacon_node_core::{
    args::{collect_args, parse_args},
    logging::{LoggerFactory, init_logging},
    usage::print_parse_error,
    version::long_version,
};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    let parsed = collect_args(std::env::args_os().skip(1)).and_then(|args| parse_args(&args));
    let options = match parsed {
        Ok(options) => options,
        Err(err) => {
            print_parse_error(&err);
            std::process::exit(1);
        }
    };

    init_logging(options.log_level)?;
    info!("beacon-lc {}", long_version());

    let loggers = LoggerFactory::new(options.log_level);
    NodeBuilder::new()
        .with_options(options)
        .with_logger_factory(loggers)
        .launch()?
        .wait_for_shutdown()
        .await;

    Ok(())
}
