use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::{FirstPlayerMode, LogConfig};

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

/// `custom` wins; otherwise the file sits next to the executable.
pub fn get_config_path(custom: Option<PathBuf>) -> PathBuf {
    if let Some(path) = custom {
        return path;
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path: PathBuf,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub first_player: FirstPlayerMode,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_console_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_round_trips_through_file() {
        let default_config = Config::default();
        let path = get_temp_file_path();
        let manager = get_config_manager(path.clone());
        manager.set_config(&default_config).unwrap();

        let reloaded = get_config_manager(path.clone()).get_config().unwrap();
        assert_eq!(reloaded, default_config);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = get_config_manager(get_temp_file_path()).get_config().unwrap();
        assert_eq!(config.first_player, FirstPlayerMode::Ask);
        assert!(!config.log.enabled);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("first_player: computer\nlog:\n  enabled: true\n")
            .unwrap();
        assert_eq!(config.first_player, FirstPlayerMode::Computer);
        assert!(config.log.enabled);
        assert_eq!(config.log.prefix, None);
    }

    #[test]
    fn test_unknown_first_player_is_an_error() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, String> = serializer.deserialize("first_player: sometimes\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_search_settings_are_not_configurable() {
        let serializer = YamlConfigSerializer::new();
        let yaml = serializer.serialize(&Config::default()).unwrap();
        assert!(!yaml.contains("search"), "{}", yaml);

        let result: Result<Config, String> =
            serializer.deserialize("search:\n  pruning: false\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_file_is_rejected() {
        let path = get_temp_file_path();
        let provider = FileContentConfigProvider::new(path.clone());
        provider
            .set_config_content("log:\n  enabled: true\n  prefix: \"\"\n")
            .unwrap();

        let err = get_config_manager(path.clone()).get_config().unwrap_err();
        assert!(err.contains("log prefix"), "{}", err);

        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_custom_path_is_used_verbatim() {
        let path = PathBuf::from("/tmp/somewhere/else.yaml");
        assert_eq!(get_config_path(Some(path.clone())), path);
        assert!(get_config_path(None).ends_with(CONFIG_FILE_NAME));
    }
}
