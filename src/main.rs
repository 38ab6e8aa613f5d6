use clap::{Parser, Subcommand};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::process::ExitCode;

use toolbox::core::config::{self, ResolvedConfig, ToolboxConfig};
use toolbox::core::services::Services;
use toolbox::core::state::App;
use toolbox::core::todo_store::{self, TodoStore};

#[derive(Parser)]
#[command(name = "toolbox", about = "A terminal toolbox of small single-screen utilities")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Round-trip the todo store through a scratch file and exit
    #[command(alias = "test")]
    Debug,
}

fn init_logging(config: &ResolvedConfig) {
    let Some(path) = &config.log_file else {
        return;
    };
    if let Some(parent) = path.parent() {
        let _ = fs::create_dir_all(parent);
    }
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn run_debug(config: &ResolvedConfig) -> ExitCode {
    let store = TodoStore::new(config.todo_file.clone());
    println!("Todo store: {}", store.path().display());
    match todo_store::self_test(&store) {
        Ok(count) => {
            println!("Round trip OK ({count} todos)");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Round trip failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}. Using defaults.");
        ToolboxConfig::default()
    });
    let resolved = config::resolve(&file_config);

    init_logging(&resolved);
    log::info!(
        "Toolbox starting up (todo file: {}, export dir: {})",
        resolved.todo_file.display(),
        resolved.export_dir.display()
    );

    if let Some(Command::Debug) = args.command {
        return run_debug(&resolved);
    }

    let app = App::new(&resolved);
    match toolbox::tui::run(app, Services::system()).await {
        Ok(()) => {
            log::info!("Toolbox shut down");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Terminal session failed: {}", e);
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_runs_tui() {
        let args = Args::try_parse_from(["toolbox"]).unwrap();
        assert!(args.command.is_none());
    }

    #[test]
    fn test_debug_subcommand_and_alias() {
        for name in ["debug", "test"] {
            let args = Args::try_parse_from(["toolbox", name]).unwrap();
            assert!(matches!(args.command, Some(Command::Debug)), "{name} not accepted");
        }
        assert!(Args::try_parse_from(["toolbox", "--verbose"]).is_err());
    }
}
