//! Chat round trip against the hosted city-guide model.
//!
//! `CityGuide::reply` is total: every failure branch maps to a canned Turkish
//! string, so callers only ever receive text to display.

use async_trait::async_trait;
use thiserror::Error;

use crate::infra::secrets::{redact_text, ApiKey};

pub const MISSING_API_KEY_REPLY: &str = "AI servisi şu an kullanılamıyor (API Key eksik).";
pub const EMPTY_REPLY: &str = "Üzgünüm, şu an cevap veremiyorum.";
pub const ERROR_REPLY: &str = "Bir hata oluştu, lütfen daha sonra tekrar dene.";

pub const GUIDE_TEMPERATURE: f32 = 0.7;

const GUIDE_SYSTEM_INSTRUCTION: &str = "Sen 'Gebzem' uygulamasının akıllı şehir asistanısın. \
Kullanıcılara Gebze (Kocaeli) hakkında bilgi veriyorsun. \
Gebze'nin sanayi kenti olmasının yanı sıra Eskihisar, Ballıkayalar, Osman Hamdi Bey Müzesi, \
Gebze Teknik Üniversitesi ve Çoban Mustafa Paşa Külliyesi gibi önemli yerlerini biliyorsun. \
Cevaplarını her zaman samimi, yardımsever ve Türkçe ver. \
Eğer bir yer öneriyorsan nedenini de kısaca açıkla.";

const GUIDE_CREDENTIAL_MISSING: &str = "GUIDE_CREDENTIAL_MISSING";
const GUIDE_PROVIDER_FAILED: &str = "GUIDE_PROVIDER_FAILED";
const GUIDE_EMPTY_RESPONSE: &str = "GUIDE_EMPTY_RESPONSE";

/// One generation call: `generate(model, content, system_instruction, temperature)`.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub model: String,
    pub content: String,
    pub system_instruction: String,
    pub temperature: f32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedText {
    /// `None` when the provider answered without any text.
    pub text: Option<String>,
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("provider responded with status {status}: {body}")]
    Provider { status: u16, body: String },
    #[error("malformed provider response: {0}")]
    InvalidResponse(String),
}

/// Hosted text-generation backend.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> Result<GeneratedText, GenerationError>;
}

/// Where the provider key comes from; consulted on every round trip.
pub trait CredentialSource: Send + Sync {
    fn api_key(&self) -> Option<ApiKey>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideSettings {
    pub model: String,
}

pub struct CityGuide<C, G> {
    credentials: C,
    generator: G,
    settings: GuideSettings,
}

impl<C, G> CityGuide<C, G>
where
    C: CredentialSource,
    G: TextGenerator,
{
    pub fn new(credentials: C, generator: G, settings: GuideSettings) -> Self {
        Self {
            credentials,
            generator,
            settings,
        }
    }

    pub fn request_for(&self, prompt: &str) -> GenerationRequest {
        GenerationRequest {
            model: self.settings.model.clone(),
            content: prompt.to_owned(),
            system_instruction: GUIDE_SYSTEM_INSTRUCTION.to_owned(),
            temperature: GUIDE_TEMPERATURE,
        }
    }

    /// Turns one user utterance into one displayable reply. Never fails.
    ///
    /// Callers are expected to skip blank prompts; this method does not check.
    pub async fn reply(&self, prompt: &str) -> String {
        let Some(api_key) = self.credentials.api_key() else {
            tracing::warn!(
                code = GUIDE_CREDENTIAL_MISSING,
                "city guide credential is not configured; skipping provider call"
            );
            return MISSING_API_KEY_REPLY.to_owned();
        };

        let request = self.request_for(prompt);
        tracing::debug!(
            model = %request.model,
            prompt_chars = prompt.chars().count(),
            "sending city guide request"
        );

        match self.generator.generate(&api_key, &request).await {
            Ok(GeneratedText { text: Some(text) }) if !text.is_empty() => text,
            Ok(_) => {
                tracing::warn!(
                    code = GUIDE_EMPTY_RESPONSE,
                    "city guide provider returned no text"
                );
                EMPTY_REPLY.to_owned()
            }
            Err(error) => {
                tracing::error!(
                    code = GUIDE_PROVIDER_FAILED,
                    error = %redact_text(&error.to_string()),
                    "city guide request failed"
                );
                ERROR_REPLY.to_owned()
            }
        }
    }
}
