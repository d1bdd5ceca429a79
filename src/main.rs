use clap::Parser;

use recordwise::cli::commands::form::{self, FormOptions};
use recordwise::cli::{Args, Command};
use recordwise::completion::print_competencies;
use recordwise::logging;
use recordwise::output::{self, OutputConfig};
use recordwise::ui::Style;

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let defaults = OutputConfig::default();
    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: args.no_color || defaults.no_color,
    });

    if let Err(e) = logging::init(&args.log_level, !output::is_no_color()) {
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exitcode::USAGE);
    }

    let result = match args.command {
        Some(Command::Competencies) => {
            print_competencies();
            Ok(())
        }
        Some(Command::Form) | None => {
            form::run_form(FormOptions {
                env_file: args.env_file,
            })
            .await
        }
    };

    if let Err(e) = result {
        tracing::error!("{e:#}");
        eprintln!("{} {e:#}", Style::error("Error:"));
        std::process::exit(exitcode::SOFTWARE);
    }
}
