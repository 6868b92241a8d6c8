use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Arg, Command, value_parser};
use tracing::info;

use amerbrit::{DictionaryStore, Translator};

mod api;

use api::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("amerbrit-web")
        .version("0.1.0")
        .about("HTTP API for the American/British English translator")
        .arg(
            Arg::new("host")
                .long("host")
                .env("HOST")
                .help("Address to bind")
                .default_value("127.0.0.1"),
        )
        .arg(
            Arg::new("port")
                .long("port")
                .env("PORT")
                .help("Port to listen on")
                .value_parser(value_parser!(u16))
                .default_value("3000"),
        )
        .arg(
            Arg::new("public-dir")
                .long("public-dir")
                .env("PUBLIC_DIR")
                .help("Directory served under /public")
                .value_parser(value_parser!(PathBuf))
                .default_value("public"),
        )
        .arg(
            Arg::new("dictionaries")
                .long("dictionaries")
                .env("AMERBRIT_DICTIONARIES")
                .help("Directory of JSON tables overriding the built-in ones")
                .value_parser(value_parser!(PathBuf)),
        )
        .get_matches();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse()?),
        )
        .init();

    let store = match matches.get_one::<PathBuf>("dictionaries") {
        Some(dir) => DictionaryStore::from_dir(dir)?,
        None => DictionaryStore::builtin()?,
    };
    let translator = Translator::with_store(store)
        .map_err(|e| format!("Failed to initialize translator: {}", e))?;
    let state = AppState {
        translator: Arc::new(translator),
    };

    let host = matches
        .get_one::<String>("host")
        .map(String::as_str)
        .unwrap_or("127.0.0.1");
    let port = matches.get_one::<u16>("port").copied().unwrap_or(3000);
    let public_dir = matches
        .get_one::<PathBuf>("public-dir")
        .map(PathBuf::as_path)
        .unwrap_or(Path::new("public"));

    info!("Starting American/British translator web server");

    let app = api::router(state, public_dir);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Server running at http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
