// Configuration type definitions

use serde::Deserialize;

use crate::service::Flag;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:8000/debug/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// How results are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Interactive full-screen viewer
    #[default]
    Tui,
    /// HTML page with highlighted text and the match list
    Html,
    /// The normalized match report as JSON
    Json,
}

/// Matching service section
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_url() -> String {
    DEFAULT_SERVICE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            url: default_url(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Display section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DisplayConfig {
    #[serde(default)]
    pub output: OutputFormat,
    /// Flags sent with every request in addition to those given on the command line
    #[serde(default)]
    pub default_flags: Vec<Flag>,
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.service.url, DEFAULT_SERVICE_URL);
        assert_eq!(config.service.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.display.output, OutputFormat::Tui);
        assert!(config.display.default_flags.is_empty());
    }

    #[test]
    fn test_full_config() {
        let toml_content = r#"
[service]
url = "https://regex.example.com/debug/"
timeout_secs = 5

[display]
output = "html"
default_flags = ["IGNORECASE", "MULTILINE"]
"#;

        let config: Config = toml::from_str(toml_content).unwrap();

        assert_eq!(config.service.url, "https://regex.example.com/debug/");
        assert_eq!(config.service.timeout_secs, 5);
        assert_eq!(config.display.output, OutputFormat::Html);
        assert_eq!(
            config.display.default_flags,
            vec![Flag::IgnoreCase, Flag::Multiline]
        );
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        let toml_content = r#"
[display]
default_flags = ["UNICODE"]
"#;

        assert!(toml::from_str::<Config>(toml_content).is_err());
    }

    // For any output value in the config, parsing extracts that format.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(50))]

        #[test]
        fn prop_valid_output_parsing(output in prop::sample::select(vec!["tui", "html", "json"])) {
            let toml_content = format!("[display]\noutput = \"{}\"\n", output);

            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_ok(), "Failed to parse valid output: {}", output);

            let expected = match output {
                "tui" => OutputFormat::Tui,
                "html" => OutputFormat::Html,
                "json" => OutputFormat::Json,
                _ => unreachable!(),
            };
            prop_assert_eq!(config.unwrap().display.output, expected);
        }

        #[test]
        fn prop_missing_service_fields_use_defaults(
            include_url in prop::bool::ANY,
            include_timeout in prop::bool::ANY,
        ) {
            let mut toml_content = String::from("[service]\n");
            if include_url {
                toml_content.push_str("url = \"http://localhost:9000/debug/\"\n");
            }
            if include_timeout {
                toml_content.push_str("timeout_secs = 3\n");
            }

            let config: Config = toml::from_str(&toml_content).unwrap();

            if !include_url {
                prop_assert_eq!(config.service.url, DEFAULT_SERVICE_URL);
            }
            if !include_timeout {
                prop_assert_eq!(config.service.timeout_secs, DEFAULT_TIMEOUT_SECS);
            }
        }
    }
}
