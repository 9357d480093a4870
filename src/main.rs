use actix_cors::Cors;
use actix_web::{web, App, HttpServer, middleware};
use std::io;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tribes_match::config::{LoggingSettings, Settings};
use tribes_match::core::Matcher;
use tribes_match::error::handle_json_payload_error;
use tribes_match::routes::{self, compatibility::AppState};

/// Initialize logging; `RUST_LOG` takes precedence over the configured level
fn init_logging(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load().map_err(|e| {
        eprintln!("Failed to load configuration: {}", e);
        io::Error::new(io::ErrorKind::InvalidInput, e.to_string())
    })?;

    init_logging(&settings.logging);

    info!("Starting Tribes Match compatibility service...");
    info!("Configuration loaded successfully");

    let default_weights = settings.default_weights();
    if (default_weights.sum() - 1.0).abs() > 1e-6 {
        warn!(
            "Configured default weights sum to {:.3}, not 1.0; overall scores will shift accordingly",
            default_weights.sum()
        );
    }

    let matcher = Matcher::new(default_weights);

    info!("Matcher initialized with default weights: {:?}", default_weights);

    // Build application state
    let app_state = AppState {
        matcher,
        matching: settings.matching.clone(),
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
