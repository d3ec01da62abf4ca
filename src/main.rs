use anyhow::Result;

use matchday::cli::Command;
use matchday::services::watcher::WatchOptions;
use matchday::table::TableParams;
use matchday::{handle_ingest, handle_serve, handle_watch, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(command)
}

fn execute_command(command: Command) -> Result<()> {
    match command {
        Command::Serve { port } => handle_serve(port),
        Command::Ingest { from } => handle_ingest(&from),
        Command::Watch {
            url,
            view,
            filter,
            sort,
            dir,
            per_page,
            page,
            once,
        } => {
            let params = TableParams {
                q: filter,
                sort,
                dir,
                per_page,
                page,
            };
            handle_watch(url, WatchOptions { view, params, once })
        }
    }
}
