use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the health-check backend")]
    Serve {
        #[arg(long, help = "Interface to bind (default 127.0.0.1)")]
        host: Option<String>,

        #[arg(long, help = "Port to bind; 0 picks a free port (default $PORT, then 0)")]
        port: Option<u16>,
    },

    #[command(about = "Print the health payload without starting a server")]
    Health,

    #[command(about = "Browse recorded rounds")]
    Rounds {
        #[command(subcommand)]
        command: RoundsCommand,
    },
}

#[derive(Subcommand)]
pub enum RoundsCommand {
    #[command(about = "One line per round, ordered by start time")]
    List {
        #[command(flatten)]
        source: RoundsSourceArgs,
    },

    #[command(about = "Timeline of rounds with their events")]
    Show {
        #[command(flatten)]
        source: RoundsSourceArgs,

        #[arg(long = "open", value_name = "ROUND_ID", help = "Expand a round (repeatable)")]
        open: Vec<String>,

        #[arg(long, help = "Expand every round", conflicts_with = "open")]
        all: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct RoundsSourceArgs {
    #[arg(long, help = "Rounds directory (default $VIBEGIT_ROUNDS_DIR, then ./rounds)")]
    pub dir: Option<PathBuf>,
}
