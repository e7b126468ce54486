use clap::Parser;

use gotax_cli::cli::{self, Cli};
use gotax_cli::logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_level.as_deref())?;

    let report = cli::run(&cli)?;
    print!("{report}");

    Ok(())
}
