use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, Eq, PartialEq)]
pub struct Config {
    /// Resolve waits on stopped children too, not only on terminated ones.
    #[serde(default, alias = "observeStops")]
    pub observe_stops: bool,

    /// Command run when no arguments or an unknown keyword are given.
    #[serde(default = "default_command", alias = "defaultCommand")]
    pub default_command: Vec<String>,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level", alias = "logLevel")]
    pub log_level: String,
}

fn default_command() -> Vec<String> {
    vec!["ls".into(), "-l".into()]
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for Config {
    fn default() -> Config {
        Config {
            observe_stops: false,
            default_command: default_command(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Config;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(Config::default(), toml::from_str::<Config>("").unwrap());
    }

    #[test]
    fn full_document() {
        let config: Config = toml::from_str(
            r#"
            observe_stops = true
            default_command = ["date", "-u"]
            log_level = "debug"
            "#,
        )
        .unwrap();
        assert!(config.observe_stops);
        assert_eq!(vec!["date".to_string(), "-u".to_string()], config.default_command);
        assert_eq!("debug", config.log_level);
    }

    #[test]
    fn camel_case_aliases() {
        let config: Config = toml::from_str(
            r#"
            observeStops = true
            defaultCommand = ["uptime"]
            "#,
        )
        .unwrap();
        assert!(config.observe_stops);
        assert_eq!(vec!["uptime".to_string()], config.default_command);
    }

    #[test]
    fn wrong_type_rejected() {
        assert!(toml::from_str::<Config>("default_command = \"ls -l\"").is_err());
    }
}
