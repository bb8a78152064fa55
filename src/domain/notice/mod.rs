//! The markdown notice board.
//!
//! The backend stores the notice as base64 of its UTF-8 bytes. Rendering the
//! markdown is left to the caller.

#[cfg(feature = "http")]
pub mod client;
pub mod wire;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use thiserror::Error;

use wire::NoticeResponse;

#[derive(Error, Debug)]
pub enum NoticeError {
    #[error("Notice content is not valid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Notice content is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Encode markdown for the wire.
pub fn encode_content(markdown: &str) -> String {
    STANDARD.encode(markdown.as_bytes())
}

/// Decode wire content into markdown. Embedded whitespace (line-wrapped
/// base64) is ignored.
pub fn decode_content(encoded: &str) -> Result<String, NoticeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = STANDARD.decode(compact.as_bytes())?;
    Ok(String::from_utf8(bytes)?)
}

/// The current notice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notice {
    pub markdown: String,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Notice {
    pub fn is_empty(&self) -> bool {
        self.markdown.trim().is_empty()
    }
}

impl TryFrom<NoticeResponse> for Notice {
    type Error = NoticeError;

    fn try_from(source: NoticeResponse) -> Result<Self, Self::Error> {
        let markdown = match source.content.as_deref() {
            Some(encoded) if !encoded.trim().is_empty() => decode_content(encoded)?,
            _ => String::new(),
        };
        Ok(Notice {
            markdown,
            updated_at: source.updated_at,
        })
    }
}
