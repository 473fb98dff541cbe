use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub scores_api: ScoresApiSettings,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

/// Where the student scores come from.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct ScoresApiSettings {
    pub base_url: String,
}

impl ScoresApiSettings {
    pub fn students_url(&self) -> String {
        format!(
            "{}/students/withTotalScores",
            self.base_url.trim_end_matches('/')
        )
    }
}

/// Reads `configuration/base.yaml` relative to the working directory, then
/// applies `APP_`-prefixed environment overrides such as
/// `APP_SCORES_API__BASE_URL`.
pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path =
        std::env::current_dir().map_err(|e| config::ConfigError::Foreign(Box::new(e)))?;
    let configuration_file = base_path.join("configuration").join("base.yaml");

    config::Config::builder()
        .set_default("application.host", "127.0.0.1")?
        .set_default("application.port", 8000)?
        .add_source(config::File::from(configuration_file).required(false))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize()
}
