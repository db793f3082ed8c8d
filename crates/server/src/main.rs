mod api;
mod state;

use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use widgetd_core::Config;
use widgetd_widgets::{generate, ApiDescription, PipelineOptions, WidgetSet};

fn load_config() -> Config {
    widgetd_core::config::load_dotenv();
    Config::from_env()
}

/// Read and parse the interface description. Failure here is fatal — with
/// no usable `paths` there is nothing to generate or serve.
fn load_description(path: &str) -> anyhow::Result<ApiDescription> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading interface description from {}", path))?;
    text.parse::<ApiDescription>()
        .with_context(|| format!("parsing interface description from {}", path))
}

/// Write the widget set as pretty JSON (4-space indent) for inspection.
fn write_widgets_file(path: &str, widgets: &WidgetSet) -> anyhow::Result<()> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    serde::Serialize::serialize(widgets, &mut ser)?;
    std::fs::write(path, buf)?;
    Ok(())
}

/// Probe upward from the requested port until one binds.
fn find_free_port(host: &str, requested: u16) -> u16 {
    let mut port = requested;
    loop {
        if std::net::TcpListener::bind((host, port)).is_ok() {
            return port;
        }
        if port == u16::MAX {
            return requested;
        }
        port += 1;
    }
}

/// Run one generation pass and drop the diagnostic file copy next to the
/// process. The file write is best-effort; the HTTP contract does not
/// depend on it.
fn generate_widgets(config: &Config) -> anyhow::Result<WidgetSet> {
    let description = load_description(&config.api.description_path)?;
    let opts = PipelineOptions::new(config.api.path_prefix.clone());
    let widgets = generate(&description, &opts);

    if let Err(e) = write_widgets_file(&config.api.widgets_path, &widgets) {
        warn!("Could not write {}: {}", config.api.widgets_path, e);
    }

    Ok(widgets)
}

async fn serve(config: &Config) -> anyhow::Result<()> {
    config.log_summary();
    let widgets = generate_widgets(config)?;

    let state = Arc::new(state::AppState { widgets });

    let app = Router::new()
        .route("/", get(api::root))
        .route("/widgets.json", get(api::widgets))
        .route("/health", get(api::health))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port = find_free_port(&config.server.host, config.server.port);
    if port != config.server.port {
        warn!(
            "Port {} is already in use. Using port {}.",
            config.server.port, port
        );
    }

    let addr = format!("{}:{}", config.server.host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Serving widgets on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let mut config = load_config();
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        Some("generate") => {
            if let Some(path) = args.get(2) {
                config.api.description_path = path.clone();
            }
            let widgets = generate_widgets(&config)?;
            info!(
                "Wrote {} widgets to {}",
                widgets.len(),
                config.api.widgets_path
            );
        }
        Some("serve") | None => {
            if let Some(path) = args.get(2) {
                config.api.description_path = path.clone();
            }
            serve(&config).await?;
        }
        Some(other) => {
            println!("widgetd v0.1.0");
            println!("Unknown command: {}", other);
            println!("Usage: widgetd-server <command>");
            println!("  serve [openapi.json]     Generate widgets and start the HTTP server (default)");
            println!("  generate [openapi.json]  Generate widgets.json and exit");
        }
    }

    Ok(())
}
