use anyhow::Result;
use clap::Parser;
use common::config::Config;
use common::logger::init_logger;
use feedback_cli::{Args, execute};

fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::init(&args.env);
    init_logger(&config.log_level, &config.log_file)?;
    log::debug!("{} starting: {:?}", config.project_name, args.command);

    let output = execute(&args.command, config.max_output_len)?;
    println!("{output}");
    Ok(())
}
