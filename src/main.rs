use movies_api::{serve, Config};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt().init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = serve(config).await {
        tracing::error!("server error: {e}");
        std::process::exit(1);
    }
}
