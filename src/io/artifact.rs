/*! Dataset artifact persistence

[ArtifactStore] abstracts how datasets are written and how pre-defined vocabularies are read back,
so that pipelines do not depend on a given encoding. [JsonStore] is the default implementation.
!*/
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use log::{debug, info};
use serde_json::Value;

use crate::dataset::{Dataset, Dictionary};
use crate::error::Error;

pub trait ArtifactStore {
    /// Load the `dict` section of a previously saved dataset.
    fn load_dictionary(&self, path: &Path) -> Result<Dictionary, Error>;

    /// Persist the dataset at `path`.
    fn save(&self, dataset: &Dataset, path: &Path) -> Result<(), Error>;
}

/// JSON (optionally gzipped) artifacts.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStore;

impl JsonStore {
    /// Load a whole dataset.
    pub fn load(&self, path: &Path) -> Result<Dataset, Error> {
        Ok(serde_json::from_reader(super::open(path)?)?)
    }
}

/// `<path>.part`, where the artifact is written before being moved into place.
fn part_path(path: &Path) -> PathBuf {
    let mut part: OsString = path.as_os_str().to_owned();
    part.push(".part");
    PathBuf::from(part)
}

impl ArtifactStore for JsonStore {
    fn load_dictionary(&self, path: &Path) -> Result<Dictionary, Error> {
        let mut artifact: Value = serde_json::from_reader(super::open(path)?)?;
        let dict = artifact
            .get_mut("dict")
            .map(Value::take)
            .ok_or_else(|| Error::MissingDictionary(path.to_path_buf()))?;
        Ok(serde_json::from_value(dict)?)
    }

    fn save(&self, dataset: &Dataset, path: &Path) -> Result<(), Error> {
        let bytes = serde_json::to_vec(dataset)?;
        let part = part_path(path);

        debug!("writing {} bytes to {:?}", bytes.len(), part);
        let written = super::write_bytes(&part, path, &bytes)
            .and_then(|_| std::fs::rename(&part, path).map_err(Error::from));
        if let Err(e) = written {
            // cleanup errors are ignored
            let _ = std::fs::remove_file(&part);
            return Err(e);
        }

        info!("Dumped the processed data to {:?}", path);
        Ok(())
    }
}
