use serde::{Deserialize, Serialize};

/// Un flux vidéo d'une mosaïque : nom affiché et URL.
///
/// Les deux champs peuvent être vides (case inoccupée de la grille).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "mvserver", derive(utoipa::ToSchema))]
pub struct StreamEntry {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl StreamEntry {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
