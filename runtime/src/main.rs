use anyhow::Result;
use clap::Parser;
use log::debug;
use qawale::cli::Cli;
use qawale::run_with_monotonic_clock;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    // Program output goes to stdout; diagnostics stay on stderr.
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_with_monotonic_clock(cli.run_config(), &mut out)?;

    Ok(())
}
