use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::{
    ConfigContentProvider, ConfigSerializer, FileContentConfigProvider, Validate,
    YamlConfigSerializer,
};

/// Loads, validates and caches a config value. A missing source yields the
/// default config, which is not cached so a later save is picked up.
pub struct ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer = YamlConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    config_serializer: TConfigSerializer,
    config_content_provider: TConfigContentProvider,
    config: RefCell<Option<TConfig>>,
}

impl<TConfig> ConfigManager<FileContentConfigProvider, TConfig, YamlConfigSerializer>
where
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
{
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileContentConfigProvider::new(path), YamlConfigSerializer)
    }
}

impl<TConfigContentProvider, TConfig, TConfigSerializer>
    ConfigManager<TConfigContentProvider, TConfig, TConfigSerializer>
where
    TConfigContentProvider: ConfigContentProvider,
    TConfig: Clone + for<'de> Deserialize<'de> + Serialize + Validate + Default,
    TConfigSerializer: ConfigSerializer<TConfig>,
{
    pub fn new(config_content_provider: TConfigContentProvider, config_serializer: TConfigSerializer) -> Self {
        Self {
            config_serializer,
            config_content_provider,
            config: RefCell::new(None),
        }
    }

    pub fn content_provider(&self) -> &TConfigContentProvider {
        &self.config_content_provider
    }

    pub fn get_config(&self) -> Result<TConfig, String> {
        if let Some(config) = self.config.borrow().as_ref() {
            return Ok(config.clone());
        }

        let Some(content) = self.config_content_provider.get_config_content()? else {
            return Ok(TConfig::default());
        };

        let config = self.config_serializer.deserialize(&content)?;
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(config)
    }

    pub fn set_config(&self, config: &TConfig) -> Result<(), String> {
        config
            .validate()
            .map_err(|e| format!("Config validation error: {}", e))?;

        let serialized = self.config_serializer.serialize(config)?;
        self.config_content_provider.set_config_content(&serialized)?;

        *self.config.borrow_mut() = Some(config.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
    struct SampleConfig {
        size: u32,
        name: String,
    }

    impl Validate for SampleConfig {
        fn validate(&self) -> Result<(), String> {
            if self.size > 10 {
                return Err(format!("size {} is too large", self.size));
            }
            Ok(())
        }
    }

    #[derive(Default)]
    struct MemoryProvider {
        content: RefCell<Option<String>>,
        reads: RefCell<u32>,
    }

    impl ConfigContentProvider for MemoryProvider {
        fn get_config_content(&self) -> Result<Option<String>, String> {
            *self.reads.borrow_mut() += 1;
            Ok(self.content.borrow().clone())
        }

        fn set_config_content(&self, content: &str) -> Result<(), String> {
            *self.content.borrow_mut() = Some(content.to_string());
            Ok(())
        }
    }

    fn memory_manager(content: Option<&str>) -> ConfigManager<MemoryProvider, SampleConfig> {
        let provider = MemoryProvider {
            content: RefCell::new(content.map(str::to_string)),
            reads: RefCell::new(0),
        };
        ConfigManager::new(provider, YamlConfigSerializer)
    }

    fn get_temp_file_path() -> PathBuf {
        let random_number: u32 = rand::random();
        std::env::temp_dir().join(format!("temp_tictactoe_config_{}.yaml", random_number))
    }

    #[test]
    fn test_missing_content_gives_default() {
        let manager = memory_manager(None);
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
    }

    #[test]
    fn test_loaded_config_is_cached() {
        let manager = memory_manager(Some("size: 4\nname: four\n"));
        let first = manager.get_config().unwrap();
        let second = manager.get_config().unwrap();

        assert_eq!(first, SampleConfig { size: 4, name: "four".to_string() });
        assert_eq!(first, second);
        assert_eq!(*manager.content_provider().reads.borrow(), 1);
    }

    #[test]
    fn test_invalid_content_is_rejected() {
        let manager = memory_manager(Some("size: 40\nname: big\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.contains("Config validation error"));
        assert!(err.contains("too large"));
    }

    #[test]
    fn test_malformed_content_is_rejected() {
        let manager = memory_manager(Some("size: [not a number\n"));
        let err = manager.get_config().unwrap_err();
        assert!(err.starts_with("Failed to deserialize config"));
    }

    #[test]
    fn test_set_config_refuses_invalid() {
        let manager = memory_manager(None);
        let config = SampleConfig { size: 11, name: String::new() };
        assert!(manager.set_config(&config).is_err());
        assert!(manager.content_provider().content.borrow().is_none());
    }

    #[test]
    fn test_yaml_file_round_trip() {
        let path = get_temp_file_path();
        let config = SampleConfig { size: 3, name: "three".to_string() };

        let manager = ConfigManager::<_, SampleConfig>::from_yaml_file(path.clone());
        assert_eq!(manager.get_config().unwrap(), SampleConfig::default());
        manager.set_config(&config).unwrap();

        let reloaded = ConfigManager::<_, SampleConfig>::from_yaml_file(path.clone());
        assert_eq!(reloaded.get_config().unwrap(), config);

        std::fs::remove_file(&path).unwrap();
    }
}
