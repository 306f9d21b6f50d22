use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use anyhow::bail;
use dioxus::logger::tracing::debug;

use crate::entity::RecordId;

const BASE_CONFIG_FILE: &str = ".product_editor.toml";
const DATA_DIR_NAME: &str = "product_editor";

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct AppSettings {
    pub data_dir: Option<PathBuf>,
    pub product_id: Option<RecordId>,
    pub translations: Option<PathBuf>,
}

impl AppSettings {
    fn get_config_file_path() -> anyhow::Result<PathBuf> {
        let home = dirs::home_dir();
        match home {
            Some(directory) => Ok(directory.join(BASE_CONFIG_FILE)),
            None => bail!("Home path not found"),
        }
    }

    pub fn save_to_disk(&self) -> anyhow::Result<()> {
        self.save_to(Self::get_config_file_path()?)
    }

    pub fn load_from_disk() -> anyhow::Result<Self> {
        Self::load_from(Self::get_config_file_path()?)
    }

    pub fn save_to<P: AsRef<Path>>(&self, settings_file_path: P) -> anyhow::Result<()> {
        debug!("Saving settings to disk");
        let mut file = File::create(settings_file_path)?;
        let toml = toml::to_string(&self)?;
        file.write_all(toml.as_bytes())?;
        Ok(())
    }

    /// Reads the settings, writing the defaults first if there is no file yet.
    pub fn load_from<P: AsRef<Path>>(settings_file_path: P) -> anyhow::Result<Self> {
        let settings_file_path = settings_file_path.as_ref();
        if !settings_file_path.exists() {
            let default_settings = Self::default();
            default_settings.save_to(settings_file_path)?;
            Ok(default_settings)
        } else {
            let mut settings_file = File::open(settings_file_path)?;

            let mut toml = String::new();
            settings_file.read_to_string(&mut toml)?;

            let setting = toml::from_str(toml.as_ref())?;
            Ok(setting)
        }
    }

    pub fn get_data_dir(&self) -> anyhow::Result<PathBuf> {
        if let Some(data_dir) = &self.data_dir {
            return Ok(data_dir.to_owned());
        }
        match dirs::data_dir() {
            Some(directory) => Ok(directory.join(DATA_DIR_NAME)),
            None => bail!("Data path not found"),
        }
    }

    pub fn set_product(&mut self, product_id: RecordId) {
        self.product_id = Some(product_id);
    }
}
