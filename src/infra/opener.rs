use anyhow::{Context, Result};

use crate::infra::contracts::ExternalOpener;

/// Opens targets with the platform handler (`xdg-open`, `open`, `start`).
#[derive(Debug, Clone, Default)]
pub struct SystemOpener;

impl ExternalOpener for SystemOpener {
    fn open(&self, target: &str) -> Result<()> {
        open::that(target).with_context(|| format!("failed to open {target}"))
    }
}
