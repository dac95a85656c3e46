//! Stockage des presets : un fichier CSV par preset dans un répertoire dédié.
//!
//! Le système de fichiers est l'unique source de vérité : pas de cache ni de
//! verrou. Deux écritures concurrentes du même preset se résolvent au niveau
//! du système de fichiers (la dernière gagne).

use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::{Error, PresetName, Result, StreamEntry, format};

/// Extension des fichiers de presets
pub const PRESET_EXTENSION: &str = "csv";

/// Collection de presets adossée à un répertoire
#[derive(Debug, Clone)]
pub struct PresetStore {
    directory: PathBuf,
}

impl PresetStore {
    /// Ouvre le stockage, en créant le répertoire s'il n'existe pas
    pub fn open(directory: impl Into<PathBuf>) -> Result<Self> {
        let directory = directory.into();
        if !directory.is_dir() {
            fs::create_dir_all(&directory)?;
            info!(directory=%directory.display(), "Created presets directory");
        }
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path_for(&self, name: &PresetName) -> PathBuf {
        self.directory.join(format!("{}.{}", name.as_str(), PRESET_EXTENSION))
    }

    /// Liste les noms de presets, triés.
    ///
    /// Les fichiers dont le nom n'est pas un nom de preset valide sont ignorés.
    pub fn list(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();

        for entry in fs::read_dir(&self.directory)? {
            let path = entry?.path();
            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(PRESET_EXTENSION)
            {
                continue;
            }

            match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) if PresetName::is_valid(stem) => names.push(stem.to_string()),
                _ => debug!(file=%path.display(), "Skipping file with invalid preset name"),
            }
        }

        names.sort();
        Ok(names)
    }

    pub fn exists(&self, name: &str) -> bool {
        PresetName::new(name)
            .map(|name| self.path_for(&name).is_file())
            .unwrap_or(false)
    }

    /// Lit les entrées d'un preset
    pub fn read(&self, name: &str) -> Result<Vec<StreamEntry>> {
        let name = PresetName::new(name)?;
        let file = File::open(self.path_for(&name)).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => Error::NotFound(name.to_string()),
            _ => Error::Io(err),
        })?;

        let entries = format::read_entries(BufReader::new(file))?;
        debug!(preset=%name, entries = entries.len(), "Preset read");
        Ok(entries)
    }

    /// Remplace entièrement le contenu d'un preset (création si absent)
    pub fn write(&self, name: &str, entries: &[StreamEntry]) -> Result<()> {
        let name = PresetName::new(name)?;
        let file = File::create(self.path_for(&name))?;

        format::write_entries(file, entries)?;
        debug!(preset=%name, entries = entries.len(), "Preset written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<StreamEntry> {
        vec![
            StreamEntry::new("A", "http://x"),
            StreamEntry::new("B", "http://y"),
        ]
    }

    #[test]
    fn open_creates_directory() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("nested").join("presets");

        let store = PresetStore::open(&target)?;

        assert!(target.is_dir());
        assert_eq!(store.directory(), target.as_path());
        Ok(())
    }

    #[test]
    fn write_then_read_preserves_order() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = PresetStore::open(dir.path())?;

        store.write("lobby", &sample())?;

        assert_eq!(store.read("lobby")?, sample());
        assert!(dir.path().join("lobby.csv").is_file());
        Ok(())
    }

    #[test]
    fn writing_twice_is_idempotent() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = PresetStore::open(dir.path())?;

        store.write("lobby", &sample())?;
        let first = fs::read(dir.path().join("lobby.csv"))?;
        store.write("lobby", &sample())?;
        let second = fs::read(dir.path().join("lobby.csv"))?;

        assert_eq!(first, second);
        assert_eq!(store.read("lobby")?, sample());
        Ok(())
    }

    #[test]
    fn write_replaces_previous_content() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = PresetStore::open(dir.path())?;

        store.write("lobby", &sample())?;
        store.write("lobby", &[StreamEntry::new("C", "http://z")])?;

        assert_eq!(store.read("lobby")?, vec![StreamEntry::new("C", "http://z")]);
        Ok(())
    }

    #[test]
    fn read_missing_is_not_found() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = PresetStore::open(dir.path())?;

        let err = store.read("doesnotexist").unwrap_err();

        assert!(matches!(err, Error::NotFound(ref n) if n == "doesnotexist"));
        assert!(!store.exists("doesnotexist"));
        Ok(())
    }

    #[test]
    fn list_returns_sorted_csv_stems() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = PresetStore::open(dir.path())?;

        store.write("b", &sample())?;
        store.write("a", &[])?;
        fs::write(dir.path().join("notes.txt"), "ignored")?;
        fs::write(dir.path().join("bad name.csv"), "Name,Stream URL\n")?;
        fs::create_dir(dir.path().join("folder.csv"))?;

        assert_eq!(store.list()?, vec!["a", "b"]);
        Ok(())
    }

    #[test]
    fn traversal_names_are_rejected() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = PresetStore::open(dir.path().join("presets"))?;

        let err = store.write("../escape", &sample()).unwrap_err();
        assert!(matches!(err, Error::InvalidName(_)));
        assert!(!dir.path().join("escape.csv").exists());

        assert!(matches!(store.read("../escape"), Err(Error::InvalidName(_))));
        Ok(())
    }

    #[test]
    fn externally_edited_file_is_read() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let store = PresetStore::open(dir.path())?;
        fs::write(
            dir.path().join("manual.csv"),
            "Name,Stream URL\r\n\"Cam, east\",http://east\r\nCam west\r\n",
        )?;

        assert_eq!(
            store.read("manual")?,
            vec![
                StreamEntry::new("Cam, east", "http://east"),
                StreamEntry::new("Cam west", ""),
            ]
        );
        Ok(())
    }
}
