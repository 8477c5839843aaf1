use async_trait::async_trait;
use reqwest::Client;

use crate::{
    infra::{config::AssistantConfig, secrets::ApiKey},
    usecases::city_guide::{GeneratedText, GenerationError, GenerationRequest, TextGenerator},
};

use super::wire::{GenerateContentBody, GenerateContentResponse};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Gemini REST client. One instance per process; the key is supplied per call.
///
/// No request timeout is configured: a stalled provider keeps the caller waiting.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub fn from_config(config: &AssistantConfig) -> Self {
        Self::new(config.base_url.clone())
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(
        &self,
        api_key: &ApiKey,
        request: &GenerationRequest,
    ) -> Result<GeneratedText, GenerationError> {
        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header(API_KEY_HEADER, api_key.expose())
            .json(&GenerateContentBody::from_request(request))
            .send()
            .await
            .map_err(|error| GenerationError::Transport(error.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| GenerationError::Transport(error.to_string()))?;

        if !status.is_success() {
            return Err(GenerationError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        parse_response(&body)
    }
}

fn parse_response(body: &str) -> Result<GeneratedText, GenerationError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|error| GenerationError::InvalidResponse(error.to_string()))?;

    Ok(GeneratedText {
        text: parsed.text(),
    })
}

#[cfg(test)]
mod tests {
    use std::{
        io::{Read, Write},
        net::TcpListener,
        thread::{self, JoinHandle},
    };

    use super::*;

    /// Serves exactly one HTTP response and hands back the raw request it read.
    fn serve_once(status_line: &'static str, body: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").expect("stub listener must bind");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("client must connect");
            let mut raw = Vec::new();
            let mut chunk = [0_u8; 4096];

            let header_end = loop {
                let read = stream.read(&mut chunk).expect("request must be readable");
                assert!(read > 0, "connection closed before headers ended");
                raw.extend_from_slice(&chunk[..read]);
                if let Some(pos) = raw.windows(4).position(|window| window == b"\r\n\r\n") {
                    break pos + 4;
                }
            };

            let head = String::from_utf8_lossy(&raw[..header_end]).to_ascii_lowercase();
            let content_length = head
                .lines()
                .find_map(|line| line.strip_prefix("content-length:"))
                .and_then(|value| value.trim().parse::<usize>().ok())
                .unwrap_or(0);
            while raw.len() < header_end + content_length {
                let read = stream.read(&mut chunk).expect("body must be readable");
                assert!(read > 0, "connection closed before body ended");
                raw.extend_from_slice(&chunk[..read]);
            }

            let response = format!(
                "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
                body.len()
            );
            stream
                .write_all(response.as_bytes())
                .expect("response must be writable");

            String::from_utf8_lossy(&raw).into_owned()
        });

        (base_url, handle)
    }

    fn request() -> GenerationRequest {
        GenerationRequest {
            model: "gemini-test".to_owned(),
            content: "Nereye gideyim?".to_owned(),
            system_instruction: "Sen bir şehir rehberisin.".to_owned(),
            temperature: 0.7,
        }
    }

    fn generate_against(base_url: &str) -> Result<GeneratedText, GenerationError> {
        let client = GeminiClient::new(base_url);
        let api_key = ApiKey::new("k123").expect("key");

        tokio::runtime::Runtime::new()
            .expect("runtime must start")
            .block_on(client.generate(&api_key, &request()))
    }

    #[test]
    fn non_success_status_maps_to_provider_error() {
        let (base_url, server) = serve_once("429 Too Many Requests", r#"{"error":"quota"}"#);

        let result = generate_against(&base_url);
        let raw_request = server.join().expect("stub server must finish");

        match result {
            Err(GenerationError::Provider { status, body }) => {
                assert_eq!(status, 429);
                assert_eq!(body, r#"{"error":"quota"}"#);
            }
            other => panic!("expected provider error, got {other:?}"),
        }
        assert!(raw_request
            .starts_with("POST /v1beta/models/gemini-test:generateContent HTTP/1.1\r\n"));
        assert!(raw_request
            .to_ascii_lowercase()
            .contains("\r\nx-goog-api-key: k123\r\n"));
    }

    #[test]
    fn request_body_is_camel_case_and_success_text_is_returned() {
        let (base_url, server) = serve_once(
            "200 OK",
            r#"{"candidates":[{"content":{"parts":[{"text":"Eskihisar'ı gezebilirsin."}]}}]}"#,
        );

        let result = generate_against(&base_url);
        let raw_request = server.join().expect("stub server must finish");

        let generated = result.expect("200 response must succeed");
        assert_eq!(generated.text.as_deref(), Some("Eskihisar'ı gezebilirsin."));

        let (_, body) = raw_request
            .split_once("\r\n\r\n")
            .expect("request must have a body");
        let body: serde_json::Value = serde_json::from_str(body).expect("body must be JSON");
        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Nereye gideyim?");
        assert_eq!(
            body["systemInstruction"]["parts"][0]["text"],
            "Sen bir şehir rehberisin."
        );
        assert!(body["generationConfig"]["temperature"].is_number());
        assert!(body.get("system_instruction").is_none());
    }

    #[test]
    fn endpoint_targets_model_generate_content() {
        let client = GeminiClient::new("https://generativelanguage.googleapis.com/");

        assert_eq!(
            client.endpoint("gemini-3-flash-preview"),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-3-flash-preview:generateContent"
        );
    }

    #[test]
    fn from_config_uses_configured_base_url() {
        let config = AssistantConfig {
            base_url: "http://127.0.0.1:9999".to_owned(),
            ..AssistantConfig::default()
        };

        let client = GeminiClient::from_config(&config);

        assert!(client.endpoint("m").starts_with("http://127.0.0.1:9999/v1beta/"));
    }

    #[test]
    fn parse_response_extracts_text() {
        let body = r#"{"candidates":[{"content":{"parts":[{"text":"Ballıkayalar'a git."}]}}]}"#;

        let generated = parse_response(body).expect("valid body must parse");

        assert_eq!(generated.text.as_deref(), Some("Ballıkayalar'a git."));
    }

    #[test]
    fn parse_response_rejects_non_json() {
        let error = parse_response("<html>bad gateway</html>").expect_err("html must fail");

        assert!(matches!(error, GenerationError::InvalidResponse(_)));
    }

    #[test]
    fn unreachable_provider_is_a_transport_error() {
        // Port 9 (discard) on localhost is expected to refuse connections.
        let client = GeminiClient::new("http://127.0.0.1:9");
        let api_key = ApiKey::new("test-key").expect("key");
        let request = GenerationRequest {
            model: "gemini-test".to_owned(),
            content: "Merhaba".to_owned(),
            system_instruction: "test".to_owned(),
            temperature: 0.7,
        };

        let result = tokio::runtime::Runtime::new()
            .expect("runtime must start")
            .block_on(client.generate(&api_key, &request));

        assert!(matches!(result, Err(GenerationError::Transport(_))));
    }
}
