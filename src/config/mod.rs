//! The adapter config persistence contract.
//!
//! [`PeftConfig`] is implemented once here; variants only supply their
//! field schema, their defaults and access to the shared [`BaseConfig`].
//! Every variant therefore saves and loads through identical code:
//!
//! - `to_dict` snapshots the current field values
//! - `save_pretrained` writes `<dir>/adapter_config.json`
//! - `from_pretrained` resolves a directory or remote id and rebuilds the
//!   calling variant type
//! - `from_json_file` parses a document without type reconstruction

mod base;


pub use base::BaseConfig;

use crate::error::{PeftError, Result};
use crate::record::AttributeRecord;
use crate::resolve::{self, ConfigResolver, ResolveOptions};
use crate::schema::{self, FieldSpec};
use crate::types::TaskType;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// File name of the serialized config inside a save directory
pub const CONFIG_NAME: &str = "adapter_config.json";

/// Save/load contract shared by all adapter config variants.
pub trait PeftConfig: Serialize + DeserializeOwned + Default + Clone + Debug {
    /// Declared fields, in serialization order
    const FIELDS: &'static [FieldSpec];

    fn base(&self) -> &BaseConfig;

    fn base_mut(&mut self) -> &mut BaseConfig;

    /// The discriminator as stored, recognised or not
    fn peft_type(&self) -> &str {
        &self.base().peft_type
    }

    /// Override the discriminator with an arbitrary string
    fn with_peft_type(mut self, peft_type: impl Into<String>) -> Self {
        self.base_mut().peft_type = peft_type.into();
        self
    }

    fn with_task_type(mut self, task_type: TaskType) -> Self {
        self.base_mut().set_task_type(task_type);
        self
    }

    fn with_base_model(mut self, name: impl Into<String>) -> Self {
        self.base_mut().base_model_name_or_path = Some(name.into());
        self
    }

    fn with_inference_mode(mut self, inference_mode: bool) -> Self {
        self.base_mut().inference_mode = inference_mode;
        self
    }

    /// Snapshot every declared field and its current value
    fn to_dict(&self) -> Result<AttributeRecord> {
        let value = serde_json::to_value(self)
            .map_err(|e| PeftError::Serialization { message: e.to_string() })?;
        AttributeRecord::from_value(value).map_err(|kind| PeftError::Serialization {
            message: format!("config serialized to {kind}, expected an object"),
        })
    }

    /// Write the config to `<save_directory>/adapter_config.json`.
    ///
    /// The directory is created if missing. An existing file is replaced
    /// atomically; on failure it is left untouched.
    fn save_pretrained(&self, save_directory: impl AsRef<Path>) -> Result<()> {
        let dir = save_directory.as_ref();
        if dir.is_file() {
            return Err(PeftError::NotADirectory { path: dir.to_path_buf() });
        }
        fs::create_dir_all(dir)
            .map_err(|e| PeftError::io(format!("creating {}", dir.display()), e))?;

        // Non-finite floats serialize as null, which would not reload
        let dict = self.to_dict()?;
        schema::check_record(Self::FIELDS, &dict)?;
        let json = dict.to_json_pretty()?;

        let path = dir.join(CONFIG_NAME);
        write_atomic(&path, |file| file.write_all(json.as_bytes()))?;

        tracing::debug!(
            path = %path.display(),
            peft_type = self.peft_type(),
            "saved adapter config"
        );
        Ok(())
    }

    /// Load the calling variant from a local directory or a remote id.
    ///
    /// The document's `peft_type` does not select the type; it is restored
    /// as a plain field.
    fn from_pretrained(identifier: &str) -> Result<Self> {
        let resolver = resolve::default_resolver();
        Self::from_pretrained_with(identifier, &ResolveOptions::default(), resolver.as_ref())
    }

    /// [`from_pretrained`](Self::from_pretrained) with explicit resolution
    /// options and resolver.
    fn from_pretrained_with(
        identifier: &str,
        options: &ResolveOptions,
        resolver: &dyn ConfigResolver,
    ) -> Result<Self> {
        let path = resolve::locate(identifier, options, resolver)?;
        let record = Self::from_json_file(&path)?;
        Self::from_dict(&record)
    }

    /// Parse the JSON document at `path` into a plain record
    fn from_json_file(path: impl AsRef<Path>) -> Result<AttributeRecord> {
        AttributeRecord::read_json_file(path)
    }

    /// Build a config from defaults overlaid with `record`
    fn from_dict(record: &AttributeRecord) -> Result<Self> {
        let mut config = Self::default();
        config.update(record)?;
        Ok(config)
    }

    /// Overwrite each declared field present in `record`.
    ///
    /// Undeclared keys are ignored; declared keys with a value of the wrong
    /// shape fail with [`PeftError::TypeMismatch`] and leave `self` unchanged.
    fn update(&mut self, record: &AttributeRecord) -> Result<()> {
        let report = schema::check_record(Self::FIELDS, record)?;
        for field in &report.unknown {
            tracing::warn!(
                field = %field,
                peft_type = self.peft_type(),
                "ignoring undeclared adapter config field"
            );
        }
        for field in &report.missing {
            tracing::debug!(field = *field, "adapter config field absent, keeping current value");
        }

        let mut merged = self.to_dict()?;
        for (field, value) in report.known.iter() {
            merged.insert(field, value.clone());
        }
        schema::check_record(Self::FIELDS, &merged)?;
        *self = serde_json::from_value(merged.into_value())
            .map_err(|e| PeftError::Serialization { message: e.to_string() })?;
        Ok(())
    }

    /// Declared field names, in serialization order
    fn field_names() -> Vec<&'static str> {
        schema::field_names(Self::FIELDS)
    }
}

/// Write through a uniquely named temp file in the target directory, then
/// rename it over `path` so readers never see a partial document.
///
/// The temp file is removed if `write` or the rename fails.
pub(crate) fn write_atomic<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut fs::File) -> io::Result<()>,
{
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp = NamedTempFile::new_in(dir)
        .map_err(|e| PeftError::io(format!("creating temp file in {}", dir.display()), e))?;
    write(temp.as_file_mut())
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| PeftError::io(format!("writing {}", temp.path().display()), e))?;
    temp.persist(path)
        .map_err(|e| PeftError::io(format!("replacing {}", path.display()), e.error))?;
    Ok(())
}
