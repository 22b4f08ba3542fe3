use anyhow::Result;
use clap::Parser;
use kconfig_bump::utils::logger::{LogLevel, Logger};
use kconfig_bump::{BumpConfig, Bumper};

/// Creates new kernel configs for the next compatibility matrix.
#[derive(Parser)]
#[command(name = "kconfig-bump")]
#[command(about, long_about = None)]
struct Cli {
    /// name of the current version (e.g. v)
    current: String,

    /// name of the next version (e.g. w)
    next: String,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        Logger::new().log_message(LogLevel::Error, &format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = BumpConfig::from_env(cli.current, cli.next)?;
    Bumper::new(config)?.run()?;
    Ok(())
}
