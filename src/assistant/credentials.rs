use std::env;

use crate::{infra::secrets::ApiKey, usecases::city_guide::CredentialSource};

/// Reads the provider key from a named environment variable on every lookup.
#[derive(Debug, Clone)]
pub struct EnvCredentialSource {
    var_name: String,
}

impl EnvCredentialSource {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

impl CredentialSource for EnvCredentialSource {
    fn api_key(&self) -> Option<ApiKey> {
        env::var(&self.var_name).ok().and_then(ApiKey::new)
    }
}
