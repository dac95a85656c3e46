//! Enregistrement de l'API des presets sur `mvserver::Server`.
//!
//! `mvpresets` étend le serveur sans que `mvserver` connaisse `mvpresets`.

use std::sync::Arc;

use mvserver::Server;
use utoipa::OpenApi;

use crate::PresetStore;
use crate::api::presets_api_router;
use crate::openapi::PresetsApiDoc;

/// Trait d'extension pour ajouter l'API des presets au serveur
pub trait PresetsExt {
    /// Enregistre les routes suivantes, servies depuis `store` :
    ///
    /// - `GET /api/presets`
    /// - `GET /api/preset/{name}`
    /// - `POST /api/preset/{name}`
    /// - `GET /swagger-ui/presets`
    #[allow(async_fn_in_trait)]
    async fn init_presets_api(&mut self, store: PresetStore);
}

impl PresetsExt for Server {
    async fn init_presets_api(&mut self, store: PresetStore) {
        tracing::info!(directory=%store.directory().display(), "Registering presets API");
        let router = presets_api_router(Arc::new(store));
        self.add_openapi(router, PresetsApiDoc::openapi(), "presets").await;
    }
}
