use anyhow::Result;

use crate::infra::config::AppConfig;

pub trait ConfigAdapter {
    fn load(&self) -> Result<AppConfig>;
}

/// Hands a URL or URI (maps search, `tel:`) to the operating system.
pub trait ExternalOpener {
    fn open(&self, target: &str) -> Result<()>;
}
