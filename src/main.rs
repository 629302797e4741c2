// SPDX-License-Identifier: MPL-2.0
use sprite_cycler::app::{self, config, paths};
use sprite_cycler::cli::{self, Command};
use sprite_cycler::headless::{self, HeadlessRun};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let command = match cli::parse_env() {
        Ok(command) => command,
        Err(err) => {
            eprintln!("error: {err}\n\n{}", cli::HELP);
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Help => {
            print!("{}", cli::HELP);
            ExitCode::SUCCESS
        }
        Command::Gui(flags) => match app::run(flags) {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                log::error!("application error: {err}");
                ExitCode::FAILURE
            }
        },
        Command::Headless { flags, args } => {
            paths::init_cli_override(flags.config_dir);
            let (config, warning) = config::load();
            if let Some(key) = warning {
                log::warn!("{key}");
            }
            let result =
                HeadlessRun::from_config(&config, &args).and_then(|run| headless::run(&run));
            match result {
                Ok(()) => ExitCode::SUCCESS,
                Err(err) => {
                    eprintln!("{err}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
