use crate::api_state::ApiContext;
use crate::create_router;
use crate::jobs::TrainingJobStore;
use app_state::AppSettings;
use color_eyre::Result;
use color_eyre::eyre::eyre;
use http::HeaderValue;
use http::header;
use inspection::ImageAnalyzer;
use replicate::ReplicateClient;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

pub async fn serve(settings: AppSettings) -> Result<()> {
    // --- Server Startup ---
    info!("🚀 Initializing server...");
    let provider = ReplicateClient::with_base_url(&settings.provider.base_url)
        .token(settings.secrets.api_token.clone())
        .username(settings.provider.username.clone())
        .poll_interval(settings.provider.poll_interval)
        .poll_timeout(settings.provider.poll_timeout)
        .build();
    let api_state = ApiContext {
        analyzer: Arc::new(ImageAnalyzer::new(
            provider.clone(),
            settings.provider.analysis_version.clone(),
        )),
        provider,
        jobs: TrainingJobStore::default(),
        settings: settings.clone(),
    };

    // --- CORS Configuration ---
    let allowed_origins: Vec<HeaderValue> = settings
        .api
        .allowed_origins
        .iter()
        .filter_map(|s| match s.parse() {
            Ok(hv) => Some(hv),
            Err(e) => {
                error!("Invalid CORS origin configured: {} - Error: {}", s, e);
                None
            }
        })
        .collect();

    let cors = CorsLayer::new()
        .allow_methods(cors::Any)
        .allow_origin(allowed_origins)
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::ORIGIN,
        ]);

    // --- Create Router ---
    let app = create_router(api_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", settings.api.host, settings.api.port)
        .parse()
        .map_err(|e| eyre!("Invalid address: {}", e))?;

    info!("🐸 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
