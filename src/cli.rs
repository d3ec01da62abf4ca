use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::services::watcher::WatchView;

#[derive(Parser, Debug)]
#[command(author, version, about = "matchday league results server")]
pub struct Cli {
    /// Command
    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
#[clap(rename_all = "lower_case")]
pub enum Command {
    /// Start the results server
    Serve {
        /// Port number (defaults to PORT, then 3000)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Recreate the database schema and load the fixture files into it
    Ingest {
        /// Directory holding mock_teams.json and mock_matches.json
        #[arg(short, long, default_value = "data")]
        from: PathBuf,
    },
    /// Follow the results or standings table in the terminal
    Watch {
        /// Base URL of a running server
        #[arg(short, long)]
        url: Option<String>,
        #[arg(long, value_enum, default_value_t = WatchView::Matches)]
        view: WatchView,
        /// Only show rows containing this text
        #[arg(short, long)]
        filter: Option<String>,
        /// Sort key, e.g. match_date or home_team
        #[arg(short, long)]
        sort: Option<String>,
        /// asc or desc
        #[arg(short, long)]
        dir: Option<String>,
        #[arg(long = "per-page")]
        per_page: Option<usize>,
        #[arg(long)]
        page: Option<usize>,
        /// Print once and exit
        #[arg(long, default_value_t = false)]
        once: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_watch_arguments() {
        let cli = Cli::parse_from([
            "matchday", "watch", "--view", "standings", "--filter", "lyon", "--per-page", "10", "--once",
        ]);

        match cli.command {
            Command::Watch { view, filter, per_page, once, url, .. } => {
                assert_eq!(view, WatchView::Standings);
                assert_eq!(filter.as_deref(), Some("lyon"));
                assert_eq!(per_page, Some(10));
                assert!(once);
                assert_eq!(url, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_watch_help_lists_kebab_case_flags() {
        let mut cli = Cli::command();
        let watch = cli.find_subcommand_mut("watch").unwrap();
        let help = watch.render_long_help().to_string();

        assert!(help.contains("--per-page"));
        assert!(help.contains("--once"));
    }

    #[test]
    fn test_serve_port_is_optional() {
        let cli = Cli::parse_from(["matchday", "serve"]);
        assert_eq!(cli.command, Command::Serve { port: None });

        let cli = Cli::parse_from(["matchday", "serve", "--port", "8080"]);
        assert_eq!(cli.command, Command::Serve { port: Some(8080) });
    }

    #[test]
    fn test_ingest_defaults_to_data_dir() {
        let cli = Cli::parse_from(["matchday", "ingest"]);
        assert_eq!(cli.command, Command::Ingest { from: PathBuf::from("data") });
    }
}
