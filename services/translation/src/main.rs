use std::path::PathBuf;

use clap::Parser;
use tracing::info;

use sgtn_translation::config::TranslationConfig;
use sgtn_translation::router::build_router;
use sgtn_translation::state::AppState;

#[derive(Parser)]
#[command(about = "Serve translation bundles over the Singleton v2 REST API")]
struct Args {
    /// TCP port to listen on (overrides `SGTN_PORT`)
    #[arg(long)]
    port: Option<u16>,

    /// Data directory holding `bundles/` and `locale/` (overrides `SGTN_DATA_DIR`)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    sgtn_core::tracing::init_tracing();

    let args = Args::parse();
    let mut config = TranslationConfig::from_env();
    if let Some(port) = args.port {
        config.port = port;
    }
    if let Some(data_dir) = args.data_dir {
        config.data_dir = data_dir;
    }

    let router = build_router(AppState::new(&config.data_dir));
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind");

    info!(data_dir = %config.data_dir.display(), "translation service listening on {addr}");
    axum::serve(listener, router).await.expect("server error");
}
