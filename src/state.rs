//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkDecodingService;
use crate::domain::repositories::StoreProbe;

#[derive(Clone)]
pub struct AppState {
    pub decoding_service: Arc<LinkDecodingService>,
    pub store_probe: Arc<dyn StoreProbe>,
}

impl AppState {
    pub fn new(
        decoding_service: Arc<LinkDecodingService>,
        store_probe: Arc<dyn StoreProbe>,
    ) -> Self {
        Self {
            decoding_service,
            store_probe,
        }
    }
}
