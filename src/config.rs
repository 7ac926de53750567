use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    /// Optional external draft generator. Absent section means the
    /// capability is unavailable, which is a recoverable condition.
    #[serde(default)]
    pub generator: Option<GeneratorConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct GeneratorConfig {
    pub endpoint: String,
    #[serde(default = "default_model")]
    pub model: String,
    pub api_key: Option<String>,
}

fn default_model() -> String {
    "draft-writer-v1".to_string()
}

impl Config {
    pub fn load() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::Environment::with_prefix("SAFET").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_generator_section_from_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(
            file,
            r#"
[generator]
endpoint = "https://drafts.example.com/v1/generate"
api_key = "test-key-123"
"#
        )
        .unwrap();

        let config: Config = config::Config::builder()
            .add_source(config::File::from(file.path()))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        let generator = config.generator.expect("generator section should parse");
        assert_eq!(generator.endpoint, "https://drafts.example.com/v1/generate");
        assert_eq!(generator.api_key.as_deref(), Some("test-key-123"));
        assert_eq!(generator.model, "draft-writer-v1");
    }

    #[test]
    fn test_empty_config_has_no_generator() {
        let config: Config = config::Config::builder()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(config.generator.is_none());
    }
}
