pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use std::sync::Arc;

use shared::config::{Config, EmailConfig};
use shared::email::{EmailProvider, ResendProvider};

/// Состояние, общее для всех обработчиков
#[derive(Clone)]
pub struct AppState {
    pub email: Arc<EmailConfig>,
    /// `None`, если ключ провайдера не задан
    pub mailer: Option<Arc<dyn EmailProvider>>,
}

impl AppState {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let mailer: Option<Arc<dyn EmailProvider>> = match config.email.api_key() {
            Some(key) => {
                let provider = ResendProvider::new(key, config.email.api_url.clone())
                    .map_err(|e| anyhow::anyhow!("email provider init failed: {e}"))?;
                Some(Arc::new(provider) as Arc<dyn EmailProvider>)
            }
            None => {
                tracing::warn!("RESEND_API_KEY is not set, contact emails will not be delivered");
                None
            }
        };

        if config.email.recipients().is_empty() {
            tracing::warn!("CONTACT_TO is empty, contact emails will not be delivered");
        }

        Ok(Self {
            email: Arc::new(config.email.clone()),
            mailer,
        })
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    let state = AppState::from_config(&config)?;
    let static_dir = shared::config::get_static_dir(&config);
    tracing::info!("Serving static files from {}", static_dir.display());

    // Форма может отправляться с другого origin (резервный API base)
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(state, &static_dir)
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors);

    let port = config.server.port;
    let addr: SocketAddr = ([0, 0, 0, 0], port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
