use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MultiView Presets API",
        version = "0.1.0",
        description = "API REST pour lister, lire et enregistrer les presets de mosaïque"
    ),
    paths(
        crate::api::list_presets,
        crate::api::get_preset,
        crate::api::save_preset,
    ),
    components(
        schemas(
            crate::StreamEntry,
            crate::api::PresetListResponse,
            crate::api::PresetResponse,
            crate::api::SavePresetRequest,
            crate::api::StatusResponse,
            crate::api::ErrorResponse,
        )
    ),
    tags(
        (name = "presets", description = "Gestion des presets de flux")
    )
)]
pub struct PresetsApiDoc;
