use dioxus_logger::tracing::{self, Level};

use holocron::server::{config::Config, model::app::AppState, startup};

#[tokio::main]
async fn main() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };
    if let Err(e) = dioxus_logger::init(level) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = match startup::connect_to_database(&config).await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Starting server");

    let app = startup::build_app(AppState { db });

    if let Err(e) = startup::serve(&config, app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
