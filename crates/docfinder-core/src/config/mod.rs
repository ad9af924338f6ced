use crate::error::Result;

mod controls;
mod env;
mod provider;

pub use controls::{ControlConfig, DEFAULT_PAGE_URL};
pub use provider::{DEFAULT_DATA_URL, DataSource, ProviderConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub controls: ControlConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            provider: ProviderConfig::from_env()?,
            controls: ControlConfig::from_env()?,
        })
    }
}
