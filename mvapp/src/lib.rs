//! # mvapp - Page web MultiView
//!
//! Cette crate embarque la page unique de MultiView (HTML, JavaScript, CSS)
//! via `RustEmbed`, pour qu'elle soit servie par `mvserver` sans fichier
//! externe.
//!
//! ## Vue d'ensemble
//!
//! La page affiche une grille de flux vidéo (2x2, 3x3 ou 4x4) lus par
//! l'élément `<video>` du navigateur, et permet de :
//! - définir le nom et l'URL de chaque case
//! - enregistrer la grille comme preset nommé (`POST /api/preset/{name}`)
//! - charger un preset existant (`GET /api/presets`, `GET /api/preset/{name}`)
//! - exporter/importer la grille au format CSV
//! - afficher le nom d'hôte et les adresses IP du serveur (`GET /api/system_info`)
//!
//! Ouvrir `/{presetName}` charge directement le preset correspondant.
//!
//! ## Structure des fichiers
//!
//! ```text
//! mvapp/
//! ├── Cargo.toml
//! ├── src/
//! │   └── lib.rs          # Ce fichier
//! └── webapp/
//!     ├── index.html
//!     ├── multiview.js
//!     └── multiview.css
//! ```
//!
//! ## Utilisation
//!
//! ```rust,no_run
//! use mvapp::{Webapp, WebAppExt};
//! use mvserver::ServerBuilder;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut server = ServerBuilder::new("MultiView", "localhost", 5030).build();
//!
//!     server.add_webapp::<Webapp>("/").await;
//!
//!     server.start().await?;
//!     server.wait().await;
//!     Ok(())
//! }
//! ```

use rust_embed::RustEmbed;

/// Fichiers de la page, inclus dans le binaire à la compilation.
#[derive(RustEmbed, Clone)]
#[folder = "webapp"]
pub struct Webapp;

/// Trait pour étendre un serveur HTTP avec la page web.
///
/// `mvapp` ajoute cette méthode à `mvserver::Server` sans que `mvserver`
/// dépende de `mvapp`.
pub trait WebAppExt {
    /// Monte la page au chemin `path` (en général `"/"`).
    ///
    /// Les chemins inconnus sous `path` servent `index.html`.
    #[allow(async_fn_in_trait)]
    async fn add_webapp<W>(&mut self, path: &str)
    where
        W: RustEmbed + Clone + Send + Sync + 'static;
}

// Implémentation du trait pour mvserver::Server (feature-gated)
#[cfg(feature = "mvserver")]
mod mvserver_impl;
