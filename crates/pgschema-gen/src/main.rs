use clap::Parser;

use crate::ui::{Cli, Commands};

mod generator;
mod reserved;
mod ui;
mod utils;

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();

  match cli.command {
    Commands::Generate(command) => {
      let config = ui::commands::GenerateConfig::from_command(command);
      ui::commands::generate_schema(config)?;
    }
  }

  Ok(())
}
