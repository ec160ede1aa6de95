mod commands;
mod config;

use std::process::ExitCode;

use commands::{CommandLine, Commands};
use config::Config;

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    katas_observability::init();

    let cfg = Config::from_env()?;

    match commands.command {
        Commands::List => {
            commands::list();
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show { unit } => {
            commands::show(&unit)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Run { unit, variant, input } => {
            commands::run(&unit, variant, &input, &cfg.with_overrides(&input))?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Compare { unit, input } => {
            let equivalent = commands::compare(&unit, &input, &cfg.with_overrides(&input))?;
            Ok(if equivalent {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}
