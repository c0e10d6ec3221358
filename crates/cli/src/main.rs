mod commands;

use chrono::Local;
use clap::{CommandFactory, Parser};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "report-kit")]
#[command(version, about = "Rebuild a static report site from its page manifest", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Parser)]
enum Command {
    /// Regenerate every listed page, the listing index, and pages.json
    Rebuild {
        /// Site directory containing pages.json
        #[arg(default_value = ".")]
        dir: PathBuf,
    },

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Bare invocation rebuilds the current directory
    let command = cli.command.unwrap_or_else(|| Command::Rebuild {
        dir: PathBuf::from("."),
    });

    match command {
        Command::Rebuild { dir } => commands::rebuild::run(&dir, Local::now().date_naive()),
        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "report-kit", &mut io::stdout());
            Ok(())
        }
    }
}
