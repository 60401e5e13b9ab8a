use clap::Parser;
use hello_world::utils::logger;
use hello_world::CliConfig;

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting hello-world test harness");
    tracing::debug!("CLI config: {:?}", config);

    let exit_code = hello_world::run_tests();
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
