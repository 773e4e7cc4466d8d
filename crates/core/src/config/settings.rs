use crate::{
    data::DataSourcePathResolver,
    error::{Error, Result},
    services::FsPathResolver,
    validation::{ClassEligibilityFilter, DEFAULT_MARKER_ATTRIBUTE, DEFAULT_TEST_CONTEXT_TYPE},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File names probed by [`Config::find_config_file`], in priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[".testgate.json", "testgate.json"];

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Folders searched for `|DataDirectory|\` paths after the working directory
    #[serde(default)]
    pub data_folders: Vec<PathBuf>,

    /// Full name of the attribute marking a test class
    #[serde(default = "default_marker_attribute")]
    pub marker_attribute: String,

    /// Full name of the TestContext type
    #[serde(default = "default_test_context_type")]
    pub test_context_type: String,

    // Directory of the file this config was loaded from (internal, not exposed in JSON)
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

fn default_marker_attribute() -> String {
    DEFAULT_MARKER_ATTRIBUTE.to_string()
}

fn default_test_context_type() -> String {
    DEFAULT_TEST_CONTEXT_TYPE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_folders: Vec::new(),
            marker_attribute: default_marker_attribute(),
            test_context_type: default_test_context_type(),
            base_dir: None,
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(
            "Loaded config from {:?} with {} data folder(s)",
            path,
            config.data_folders.len()
        );
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.is_file() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Data folders with relative entries anchored at the config file's directory
    pub fn search_dirs(&self) -> Vec<PathBuf> {
        self.data_folders
            .iter()
            .map(|folder| match &self.base_dir {
                Some(base) if folder.is_relative() => base.join(folder),
                _ => folder.clone(),
            })
            .collect()
    }

    pub fn resolver(&self) -> DataSourcePathResolver<FsPathResolver> {
        DataSourcePathResolver::new(self.search_dirs())
    }

    pub fn class_filter(&self) -> ClassEligibilityFilter {
        ClassEligibilityFilter::new()
            .with_marker_attribute(self.marker_attribute.clone())
            .with_test_context_type(self.test_context_type.clone())
    }
}
