use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::tictactoe::TicTacToeSettings;
use serde::{Deserialize, Serialize};

use super::LogConfig;

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

pub type ClientConfigManager = ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>;

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

/// Uses `path` when given, otherwise the file next to the executable.
pub fn get_config_manager(path: Option<PathBuf>) -> ClientConfigManager {
    ConfigManager::from_yaml_file(path.unwrap_or_else(get_config_path))
}

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Config {
    pub tictactoe: TicTacToeSettings,
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.tictactoe.validate()?;
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};
    use common::tictactoe::FirstPlayerMode;

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_client_config_{}.yaml", random_number))
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = Config {
            tictactoe: TicTacToeSettings {
                rows: 4,
                columns: 3,
                win_length: 3,
                first_player: FirstPlayerMode::Random,
                max_search_depth: 12,
            },
            log: LogConfig {
                use_prefix: true,
                debug: false,
            },
        };

        let serializer = YamlConfigSerializer;
        let yaml = serializer.serialize(&config).unwrap();
        assert!(yaml.contains("first_player: random"));
        let restored: Config = serializer.deserialize(&yaml).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_config_manager_saves_and_loads_file() {
        let path = get_temp_file_path();
        let manager = get_config_manager(Some(path.clone()));
        assert_eq!(manager.get_config().unwrap(), Config::default());

        let mut config = Config::default();
        config.tictactoe.rows = 5;
        config.log.debug = true;
        manager.set_config(&config).unwrap();

        let content = manager.content_provider().get_config_content().unwrap().unwrap();
        assert!(content.contains("rows: 5"));
        assert_eq!(get_config_manager(Some(path.clone())).get_config().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let path = get_temp_file_path();
        std::fs::write(&path, "tictactoe:\n  rows: 0\n").unwrap();

        let err = get_config_manager(Some(path.clone())).get_config().unwrap_err();
        assert!(err.contains("Rows must be between"));

        std::fs::remove_file(&path).unwrap();
    }
}
