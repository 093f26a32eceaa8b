use common::config::Validate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LogConfig {
    pub use_prefix: bool,
    pub debug: bool,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}
