use std::{net::SocketAddr, path::PathBuf};

use clap::Parser;

#[derive(Parser, Clone)]
#[command(
    display_name = "UTG Leaderboard",
    long_about = "Serves the classic and FFA ranked leaderboards over a JSON API"
)]
pub struct Args {
    /// Directory holding the per-mode leaderboard JSON files. Created if
    /// it does not exist.
    #[arg(short, long, env = "DATA_DIR", default_value = ".", help = "Leaderboard data directory")]
    pub data_dir: PathBuf,

    /// Socket address the API server binds to
    #[arg(short, long, env = "BIND_ADDR", default_value = "127.0.0.1:8080", help = "API bind address")]
    pub bind: SocketAddr,

    /// Log level (trace, debug, info, warn, error)
    #[arg(
        short,
        long,
        env = "RUST_LOG",
        default_value = "info",
        value_parser = ["trace", "debug", "info", "warn", "error"],
        help = "Sets the logging verbosity"
    )]
    pub log_level: String
}
