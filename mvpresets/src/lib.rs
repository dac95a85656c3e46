//! # mvpresets - Presets de mosaïques vidéo
//!
//! Un preset est une liste nommée et ordonnée de flux (nom affiché + URL),
//! persistée sous la forme d'un fichier CSV par preset :
//!
//! ```text
//! presets/
//! ├── lobby.csv
//! └── control-room.csv
//! ```
//!
//! Chaque fichier commence par l'en-tête `Name,Stream URL`, suivi d'une ligne
//! par flux dans l'ordre d'affichage.
//!
//! # Exemple d'utilisation
//!
//! ```no_run
//! use mvpresets::{PresetStore, StreamEntry};
//!
//! # fn main() -> mvpresets::Result<()> {
//! let store = PresetStore::open("presets")?;
//!
//! store.write("lobby", &[
//!     StreamEntry::new("Entrance", "http://cam1.local/live.m3u8"),
//!     StreamEntry::new("Desk", "http://cam2.local/live.m3u8"),
//! ])?;
//!
//! for entry in store.read("lobby")? {
//!     println!("{} -> {}", entry.name, entry.url);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - `mvconfig` : ouverture du stockage depuis la configuration ([`PresetsConfigExt`])
//! - `mvserver` : API REST et documentation OpenAPI ([`PresetsExt`])

mod entry;
mod error;
pub mod format;
mod name;
mod store;

#[cfg(feature = "mvconfig")]
mod config_ext;

#[cfg(feature = "mvserver")]
pub mod api;
#[cfg(feature = "mvserver")]
pub mod openapi;
#[cfg(feature = "mvserver")]
mod mvserver_impl;

// Réexports publics
pub use entry::StreamEntry;
pub use error::{Error, Result};
pub use name::PresetName;
pub use store::{PRESET_EXTENSION, PresetStore};

#[cfg(feature = "mvconfig")]
pub use config_ext::PresetsConfigExt;

#[cfg(feature = "mvserver")]
pub use mvserver_impl::PresetsExt;
#[cfg(feature = "mvserver")]
pub use openapi::PresetsApiDoc;
