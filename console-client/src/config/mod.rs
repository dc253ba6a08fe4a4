use serde::Deserialize;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub log: LogSettings,
}

#[derive(Deserialize, Clone)]
pub struct ApiSettings {
    /// Base URL of the panel API, e.g. http://localhost:8080.
    pub url: String,
}

#[derive(Deserialize, Clone)]
pub struct StorageSettings {
    /// File holding the persisted session entries.
    #[serde(default = "default_storage_path")]
    pub path: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
        }
    }
}

fn default_storage_path() -> String {
    ".console/session.json".to_string()
}

#[derive(Deserialize, Clone)]
pub struct LogSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");

    // Check if we're already in console-client directory or need to navigate to it
    let configuration_directory = if base_path.ends_with("console-client") {
        base_path.join("config")
    } else {
        base_path.join("console-client").join("config")
    };

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
