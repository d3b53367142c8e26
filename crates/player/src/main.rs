//! Fichas Player - composition root binary.

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fichas_player::application::api::Api;
use fichas_player::infrastructure::http_client::ApiAdapter;
use fichas_player::infrastructure::record_store::HttpCharacterStore;
use fichas_player::ports::outbound::{CharacterStorePort, RawApiPort};
use fichas_player::runner::RunnerDeps;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fichas_player=debug,dioxus=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Fichas Player");

    // Platform
    let platform = fichas_player::infrastructure::platform::create_platform();

    // HTTP - the record store and the update API share one REST host
    let base_url = std::env::var("FICHAS_API_URL")
        .unwrap_or_else(|_| "http://localhost:3000/api".to_string());
    let raw_api: Arc<dyn RawApiPort> = Arc::new(ApiAdapter::new(base_url));
    let api = Api::new(raw_api.clone());
    let store: Arc<dyn CharacterStorePort> = Arc::new(HttpCharacterStore::new(raw_api));

    fichas_player::runner::run(RunnerDeps {
        platform,
        api,
        store,
    });
}
