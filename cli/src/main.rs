//! docweave CLI - renders the project report to a styled .docx file

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;

use docweave::types::{script_from_json, Composer, Result};

mod report;

#[derive(Parser)]
#[command(name = "docweave")]
#[command(version)]
#[command(about = "Generate the TimeTravel Agency project report", long_about = None)]
struct Cli {
    /// Output document path
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "TimeTravel_Agency_Rendu.docx"
    )]
    output: PathBuf,

    /// Render a JSON section script instead of the built-in report
    #[arg(long, value_name = "FILE")]
    script: Option<PathBuf>,

    /// Suppress the confirmation message
    #[arg(short, long)]
    quiet: bool,
}

fn run(cli: &Cli) -> Result<()> {
    let sections = match &cli.script {
        Some(path) => {
            log::info!("loading section script from {}", path.display());
            let json = std::fs::read_to_string(path)?;
            script_from_json(&json)?
        }
        None => report::sections(),
    };

    let mut composer = Composer::new();
    composer.set_margins(2.0, 2.0, 2.5, 2.5);
    composer.compose(&sections)?;
    composer.save(&cli.output)
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => {
            if !cli.quiet {
                println!(
                    "{} {}",
                    "Document généré avec succès !".green().bold(),
                    cli.output.display()
                );
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{} {e}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
