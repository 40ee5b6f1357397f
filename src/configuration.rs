use crate::{
    format::{Formattable, FormattingError, OutputFormat},
    http_utils::DEFAULT_TIMEOUT_SECS,
};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;
use url::Url;

pub const DEFAULT_APPLICATION_ID: &str = "eayun-neutron";
pub const DEFAULT_CONFIGURATION_FILE_NAME: &str = "config.yml";
pub const CONFIG_DIR_ENV: &str = "EAYUN_NEUTRON_CONFIG_DIR";

#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("failed to resolve the configuration directory")]
    FailedToFindConfigurationDirectory,
    #[error("failed to load configuration data, because of: {cause}")]
    FailedToLoadData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to write configuration data to file, because of: {cause}")]
    FailedToWriteData {
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("missing value for property {name:?}, set it with 'config set' or the matching OS_* variable")]
    MissingRequiredPropertyValue { name: String },
    #[error("invalid value for property {name:?}: {value}")]
    InvalidPropertyValue { name: String, value: String },
}

/// Persistent settings, stored as YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Neutron endpoint without the API version, e.g. `http://controller:9696`
    #[serde(skip_serializing_if = "Option::is_none")]
    endpoint_url: Option<String>,
    /// Keystone token
    #[serde(skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default = "default_timeout")]
    timeout_secs: u64,
    /// Default page size of list commands
    #[serde(skip_serializing_if = "Option::is_none")]
    page_size: Option<u32>,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            endpoint_url: None,
            token: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: None,
        }
    }
}

impl Configuration {
    /// The configured endpoint, parsed.
    pub fn endpoint_url(&self) -> Result<Url, ConfigurationError> {
        let raw = self.endpoint_url.as_deref().ok_or_else(|| {
            ConfigurationError::MissingRequiredPropertyValue {
                name: "endpoint_url".to_string(),
            }
        })?;
        Url::parse(raw).map_err(|_| ConfigurationError::InvalidPropertyValue {
            name: "endpoint_url".to_string(),
            value: raw.to_string(),
        })
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    pub fn set_endpoint_url(&mut self, endpoint_url: &str) -> Result<(), ConfigurationError> {
        Url::parse(endpoint_url).map_err(|_| ConfigurationError::InvalidPropertyValue {
            name: "endpoint_url".to_string(),
            value: endpoint_url.to_string(),
        })?;
        self.endpoint_url = Some(endpoint_url.to_string());
        Ok(())
    }

    pub fn set_token(&mut self, token: &str) {
        self.token = Some(token.to_string());
    }

    pub fn clear_token(&mut self) {
        self.token = None;
    }

    pub fn set_timeout_secs(&mut self, timeout_secs: u64) {
        self.timeout_secs = timeout_secs;
    }

    pub fn set_page_size(&mut self, page_size: u32) {
        self.page_size = Some(page_size);
    }

    pub fn get_default_configuration_file_path() -> Result<PathBuf, ConfigurationError> {
        if let Ok(config_dir_str) = std::env::var(CONFIG_DIR_ENV) {
            let mut config_path = PathBuf::from(config_dir_str);
            config_path.push(DEFAULT_CONFIGURATION_FILE_NAME);
            return Ok(config_path);
        }

        match config_dir() {
            Some(configuration_directory) => {
                let mut default_config_file_path = configuration_directory;
                default_config_file_path.push(DEFAULT_APPLICATION_ID);
                default_config_file_path.push(DEFAULT_CONFIGURATION_FILE_NAME);

                Ok(default_config_file_path)
            }
            None => Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }
    }

    /// Load the default configuration file, or the defaults if there is none yet.
    pub fn load_or_default() -> Result<Configuration, ConfigurationError> {
        let default_file_path = Configuration::get_default_configuration_file_path()?;
        debug!("Loading configuration from {}...", default_file_path.display());

        if !default_file_path.exists() {
            debug!("Configuration file not found, using defaults");
            return Ok(Configuration::default());
        }
        Configuration::load_from_file(&default_file_path)
    }

    pub fn load_from_file(path: &Path) -> Result<Configuration, ConfigurationError> {
        let configuration = fs::read_to_string(path)
            .map_err(|cause| ConfigurationError::FailedToLoadData {
                cause: Box::new(cause),
            })?;
        serde_yaml::from_str(&configuration).map_err(|cause| ConfigurationError::FailedToLoadData {
            cause: Box::new(cause),
        })
    }

    /// Apply command-line and environment overrides on top of the file values.
    pub fn with_overrides(
        mut self,
        endpoint_url: Option<&String>,
        token: Option<&String>,
    ) -> Result<Configuration, ConfigurationError> {
        if let Some(endpoint_url) = endpoint_url {
            self.set_endpoint_url(endpoint_url)?;
        }
        if let Some(token) = token {
            self.set_token(token);
        }
        Ok(self)
    }

    pub fn write(&self, writer: Box<dyn Write>) -> Result<(), ConfigurationError> {
        serde_yaml::to_writer(writer, self)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigurationError> {
        // first check if the parent directory exists and try to create it if not
        match path.parent() {
            Some(directory) => fs::create_dir_all(directory)
                .map_err(|_| ConfigurationError::FailedToFindConfigurationDirectory)?,
            None => return Err(ConfigurationError::FailedToFindConfigurationDirectory),
        }

        let file = File::create(path)
            .map_err(|e| ConfigurationError::FailedToWriteData { cause: Box::new(e) })?;
        self.write(Box::new(file))
    }

    /// Copy for display with the token masked.
    pub fn redacted(&self) -> Configuration {
        let mut copy = self.clone();
        if copy.token.is_some() {
            copy.token = Some("********".to_string());
        }
        copy
    }
}

impl Formattable for Configuration {
    fn format(&self, f: &OutputFormat) -> Result<String, FormattingError> {
        match f {
            OutputFormat::Json(options) => {
                if options.pretty {
                    Ok(serde_json::to_string_pretty(self)?)
                } else {
                    Ok(serde_json::to_string(self)?)
                }
            }
            OutputFormat::Yaml(_) => Ok(serde_yaml::to_string(self)?),
            OutputFormat::Csv(options) => {
                let mut wtr = csv::Writer::from_writer(vec![]);
                if options.with_headers {
                    wtr.write_record(["ENDPOINT_URL", "TOKEN", "TIMEOUT_SECS", "PAGE_SIZE"])?;
                }
                wtr.write_record([
                    self.endpoint_url.clone().unwrap_or_default(),
                    self.token.clone().unwrap_or_default(),
                    self.timeout_secs.to_string(),
                    self.page_size.map(|p| p.to_string()).unwrap_or_default(),
                ])?;
                Ok(String::from_utf8(wtr.into_inner()?)?)
            }
        }
    }
}
