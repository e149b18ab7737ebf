use replicate::ReplicateClient;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replicate=debug".into()),
        )
        .init();

    let token = std::env::var("REPLICATE_API_TOKEN")?;
    let version = std::env::var("ANALYSIS_VERSION")?;
    let image_url = std::env::args()
        .nth(1)
        .ok_or("usage: describe_image <image-url>")?;

    let client = ReplicateClient::with_base_url("https://api.replicate.com")
        .token(token)
        .username("example".to_string())
        .poll_interval(Duration::from_secs(1))
        .build();

    let description = client
        .describe_image(
            &version,
            &image_url,
            "Describe the person in this photo, including hair, eyes and accessories.",
        )
        .await?;
    println!("{description}");
    Ok(())
}
