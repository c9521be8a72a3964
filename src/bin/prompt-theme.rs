//! CLI entry point for prompt-theme.

use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;

use prompt_theme::cli::Args;
use prompt_theme::logging::PromptLogger;
use prompt_theme::prompt::ProcessEnvironment;
use prompt_theme::prompt_from_file;

fn main() -> ExitCode {
    let args = Args::parse();

    let mut logger = PromptLogger::new()
        .level(LevelFilter::from(args.log_level))
        .show_time(args.log_time);
    if args.no_color {
        logger = logger.color(false);
    }
    if let Err(err) = logger.init() {
        eprintln!("warning: logger already installed: {err}");
    }

    match prompt_from_file(&args.theme, &ProcessEnvironment) {
        Ok(prompt) => {
            println!("{prompt}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("failed to render {}: {err}", args.theme.display());
            eprintln!("ERROR: {err}");
            ExitCode::FAILURE
        }
    }
}
