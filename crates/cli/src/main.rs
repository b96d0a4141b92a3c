//! `stockbook` entry point.

use std::io;

use anyhow::Context;
use clap::Parser;

use stockbook_cli::{Cli, Command, Shell, run_once};
use stockbook_infra::InventoryService;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    stockbook_observability::init(cli.log_format);

    let service = InventoryService::new();

    match cli.command {
        None | Some(Command::Shell) => {
            tracing::info!(file = %cli.file.display(), "starting interactive shell");
            let shell = Shell::new(&service, &cli.file);
            let stdin = io::stdin();
            shell
                .run(stdin.lock(), &mut io::stdout(), &mut io::stderr())
                .context("shell I/O failed")?;
        }
        Some(Command::Once(cmd)) => print!("{}", run_once(&service, &cli.file, cmd)?),
    }

    Ok(())
}
