use std::fs;

use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use utg_leaderboard::{
    api::{self, AppState, ModeState},
    args::Args,
    model::structures::mode::Mode
};

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&args.log_level))
        .init();

    fs::create_dir_all(&args.data_dir).expect("Expected writable data directory");

    let classic =
        ModeState::load(&args.data_dir, Mode::Classic).expect("Expected readable classic leaderboard file");
    let ffa = ModeState::load(&args.data_dir, Mode::Ffa).expect("Expected readable ffa leaderboard file");

    let app = api::router(AppState::new(classic, ffa));

    let listener = TcpListener::bind(args.bind)
        .await
        .expect("Expected to bind API listener");
    info!(addr = %args.bind, "leaderboard API listening");

    axum::serve(listener, app).await.expect("API server exited with an error");
}
