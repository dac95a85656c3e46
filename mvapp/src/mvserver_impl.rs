//! Implémentation du trait WebAppExt pour le serveur mvserver

use crate::WebAppExt;
use mvserver::Server;
use rust_embed::RustEmbed;

impl WebAppExt for Server {
    async fn add_webapp<W>(&mut self, path: &str)
    where
        W: RustEmbed + Clone + Send + Sync + 'static,
    {
        let mount_path = normalize_mount_path(path);
        self.add_spa::<W>(&mount_path).await;
    }
}

/// `"/app/"` et `" app"` deviennent `"/app"`, `""` devient `"/"`.
fn normalize_mount_path(path: &str) -> String {
    let trimmed = path.trim();

    if trimmed.is_empty() || trimmed == "/" {
        "/".to_string()
    } else {
        format!("/{}", trimmed.trim_matches('/'))
    }
}
