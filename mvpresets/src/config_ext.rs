//! Extension de mvconfig pour les presets

use crate::PresetStore;

/// Trait d'extension pour mvconfig::Config
pub trait PresetsConfigExt {
    /// Ouvre le stockage des presets dans le répertoire configuré
    fn presets_store(&self) -> anyhow::Result<PresetStore>;
}

impl PresetsConfigExt for mvconfig::Config {
    fn presets_store(&self) -> anyhow::Result<PresetStore> {
        let directory = self.get_presets_dir()?;
        Ok(PresetStore::open(directory)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StreamEntry;
    use mvconfig::Config;

    #[test]
    fn store_opens_configured_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let config = Config::load_config(&dir.path().to_string_lossy())?;
        let presets_dir = dir.path().join("walls");
        config.set_presets_dir(presets_dir.to_string_lossy().to_string())?;

        let store = config.presets_store()?;
        store.write("lobby", &[StreamEntry::new("Desk", "http://cam")])?;

        assert_eq!(store.directory(), presets_dir.as_path());
        assert!(presets_dir.join("lobby.csv").is_file());
        Ok(())
    }
}
