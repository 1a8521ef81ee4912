use clap::Parser;
use log::{debug, error, info, trace, warn, Log};

use logsetup::LoggerConfig;

mod cli;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = cli::Args::parse();

    let mut config = LoggerConfig::new(args.log_dir);
    config.configure(&args.level, args.file_sink)?;
    config.install()?;

    trace!("trace lines carry no color");
    debug!("debug lines are cyan");
    info!("info lines are green");
    warn!("warning lines are yellow");
    error!("error lines are red");

    log::logger().flush();

    Ok(())
}
