//! File upload and download flows.
//!
//! Uploads go out as multipart forms; downloads come back as opaque bytes
//! paired with a filename derived client-side from the record's title (or
//! a default stem) plus the original extension.

use crate::client::ResourceHandle;
use crate::error::Result;
use crate::mutation::Ack;
use crate::transport::{FilePart, FormData};
use bytes::Bytes;
use std::path::Path;
use summit_core::Resource;

#[derive(Debug, Clone)]
pub struct Download {
    pub bytes: Bytes,
    pub file_name: String,
}

impl<T: Resource> ResourceHandle<T> {
    /// Attach a file to a record.
    pub async fn upload(&self, id: u64, part: FilePart) -> Result<Ack> {
        let path = format!("{}/{}/files", T::PATH, id);
        let value = self
            .transport
            .post_form(&path, FormData::new().file(part))
            .await?;
        self.store.invalidate(T::PATH).await;
        Ok(serde_json::from_value(value)?)
    }

    /// Submit a payment-confirmation proof for a record.
    pub async fn confirm_payment(&self, id: u64, proof: FilePart) -> Result<Ack> {
        let path = format!("{}/{}/payment-confirmation", T::PATH, id);
        let value = self
            .transport
            .post_form(&path, FormData::new().file(proof))
            .await?;
        self.store.invalidate(T::PATH).await;
        Ok(serde_json::from_value(value)?)
    }

    /// Download the file attached to a record. `title`, when given, names
    /// the saved file; the extension always comes from the original.
    pub async fn download(&self, id: u64, title: Option<&str>) -> Result<Download> {
        let path = format!("{}/{}/download", T::PATH, id);
        let (bytes, original) = self.transport.get_bytes(&path).await?;
        let original = original.unwrap_or_else(|| "document".to_string());
        Ok(Download {
            bytes,
            file_name: derive_file_name(title, "document", &original),
        })
    }
}

/// Derive a client-side filename: the sanitized title when present, else
/// the default stem, keeping the original file's extension.
pub fn derive_file_name(title: Option<&str>, default_stem: &str, original: &str) -> String {
    let stem = title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(sanitize_stem)
        .unwrap_or_else(|| {
            Path::new(original)
                .file_stem()
                .and_then(|s| s.to_str())
                .filter(|s| !s.is_empty())
                .map(sanitize_stem)
                .unwrap_or_else(|| default_stem.to_string())
        });

    match Path::new(original).extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}.{}", stem, ext),
        None => stem,
    }
}

/// Collapse anything outside `[A-Za-z0-9._-]` into single dashes.
fn sanitize_stem(raw: &str) -> String {
    let mut stem = String::with_capacity(raw.len());
    let mut last_was_dash = false;
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '.' || ch == '_' || ch == '-' {
            stem.push(ch);
            last_was_dash = ch == '-';
        } else if !last_was_dash {
            stem.push('-');
            last_was_dash = true;
        }
    }
    let trimmed = stem.trim_matches('-');
    if trimmed.is_empty() {
        "document".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_replaces_the_stem_keeps_the_extension() {
        assert_eq!(
            derive_file_name(Some("Acme Robotics Deck"), "document", "upload-3411.pdf"),
            "Acme-Robotics-Deck.pdf"
        );
    }

    #[test]
    fn test_missing_title_falls_back_to_original_stem() {
        assert_eq!(
            derive_file_name(None, "document", "visa_letter.docx"),
            "visa_letter.docx"
        );
    }

    #[test]
    fn test_blank_title_and_empty_original_use_the_default() {
        assert_eq!(derive_file_name(Some("   "), "document", ""), "document");
    }

    #[test]
    fn test_no_extension_yields_bare_stem() {
        assert_eq!(derive_file_name(Some("receipt"), "document", "blob"), "receipt");
    }

    #[test]
    fn test_sanitize_collapses_runs() {
        assert_eq!(sanitize_stem("études // légales"), "tudes-l-gales");
        assert_eq!(sanitize_stem("***"), "document");
    }
}
