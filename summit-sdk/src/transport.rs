//! HTTP transport boundary.
//!
//! Everything wire-shaped is resolved here once: URLs are joined against
//! the configured base, non-2xx responses become `PortalError::Api` with
//! the server's message when one exists, and multipart bodies are built
//! from a transport-agnostic `FormData` so tests can implement the
//! `Transport` trait without touching the network.

use crate::config::PortalConfig;
use crate::error::{PortalError, Result};
use async_trait::async_trait;
use bytes::Bytes;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct FilePart {
    /// Multipart field name, e.g. `file` or `proof`.
    pub field: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Bytes,
}

impl FilePart {
    pub fn new(
        field: impl Into<String>,
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: impl Into<Bytes>,
    ) -> Self {
        Self {
            field: field.into(),
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes: bytes.into(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FormData {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }
}

/// Seam between the SDK and the HTTP client. Production code uses
/// `HttpTransport`; tests substitute their own implementation.
#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value>;

    async fn post(&self, path: &str, body: Value) -> Result<Value>;

    async fn put(&self, path: &str, body: Value) -> Result<Value>;

    async fn post_form(&self, path: &str, form: FormData) -> Result<Value>;

    /// Fetch an opaque binary body. Returns the bytes plus the server's
    /// suggested filename from `Content-Disposition`, if any.
    async fn get_bytes(&self, path: &str) -> Result<(Bytes, Option<String>)>;
}

pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(config: &PortalConfig) -> Result<Self> {
        if config.base_url.trim().is_empty() {
            return Err(PortalError::MissingBaseUrl);
        }
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn read_json(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json().await?);
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|v| v.get("message").and_then(Value::as_str).map(String::from))
            .or_else(|| {
                let trimmed = body.trim();
                (!trimmed.is_empty()).then(|| trimmed.to_string())
            })
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("unknown error")
                    .to_string()
            });

        Err(PortalError::Api {
            status: status.as_u16(),
            message,
        })
    }

    fn build_form(form: FormData) -> Result<reqwest::multipart::Form> {
        let mut multipart = reqwest::multipart::Form::new();
        for (name, value) in form.fields {
            multipart = multipart.text(name, value);
        }
        for part in form.files {
            let file = reqwest::multipart::Part::bytes(part.bytes.to_vec())
                .file_name(part.file_name)
                .mime_str(&part.content_type)?;
            multipart = multipart.part(part.field, file);
        }
        Ok(multipart)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::read_json(response).await
    }

    async fn post(&self, path: &str, body: Value) -> Result<Value> {
        let response = self.http.post(self.url(path)).json(&body).send().await?;
        Self::read_json(response).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value> {
        let response = self.http.put(self.url(path)).json(&body).send().await?;
        Self::read_json(response).await
    }

    async fn post_form(&self, path: &str, form: FormData) -> Result<Value> {
        let response = self
            .http
            .post(self.url(path))
            .multipart(Self::build_form(form)?)
            .send()
            .await?;
        Self::read_json(response).await
    }

    async fn get_bytes(&self, path: &str) -> Result<(Bytes, Option<String>)> {
        let response = self.http.get(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = status
                .canonical_reason()
                .unwrap_or("unknown error")
                .to_string();
            return Err(PortalError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let file_name = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .and_then(attachment_file_name);
        Ok((response.bytes().await?, file_name))
    }
}

fn attachment_file_name(header: &str) -> Option<String> {
    header.split(';').find_map(|part| {
        part.trim()
            .strip_prefix("filename=")
            .map(|name| name.trim_matches('"').to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let transport = HttpTransport::new(&PortalConfig::new("https://api.summit.dz/v1/")).unwrap();
        assert_eq!(
            transport.url("/exhibition-demands"),
            "https://api.summit.dz/v1/exhibition-demands"
        );
        assert_eq!(
            transport.url("pitch-decks/7/download"),
            "https://api.summit.dz/v1/pitch-decks/7/download"
        );
    }

    #[test]
    fn test_empty_base_url_is_rejected() {
        let result = HttpTransport::new(&PortalConfig::new("  "));
        assert_eq!(result.err(), Some(PortalError::MissingBaseUrl));
    }

    #[test]
    fn test_attachment_file_name() {
        assert_eq!(
            attachment_file_name("attachment; filename=\"deck.pdf\""),
            Some("deck.pdf".to_string())
        );
        assert_eq!(
            attachment_file_name("attachment; filename=deck.pdf"),
            Some("deck.pdf".to_string())
        );
        assert_eq!(attachment_file_name("inline"), None);
    }
}
