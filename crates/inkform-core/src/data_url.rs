//! The tagged embedded-binary format used to carry image attachments inside
//! a JSON payload: `data:<media-type>;base64,<payload>`.
//!
//! Binary data crosses the system boundary only through [`DataUrl::encode`]
//! and [`DataUrl::parse`]; internally attachments are always the decoded
//! `{ mime_type, bytes }` pair, never a bare string.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use crate::error::CoreError;

/// A decoded embedded attachment: raw bytes plus their declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// Parse a `data:<media-type>;base64,<payload>` string.
    ///
    /// Only the base64 form is accepted; the media type must be present.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let rest = input
            .strip_prefix("data:")
            .ok_or_else(|| CoreError::InvalidDataUrl("missing data: prefix".to_string()))?;

        let (head, payload) = rest
            .split_once(',')
            .ok_or_else(|| CoreError::InvalidDataUrl("missing payload separator".to_string()))?;

        let mime_type = head
            .strip_suffix(";base64")
            .ok_or_else(|| CoreError::InvalidDataUrl("missing base64 marker".to_string()))?;

        if mime_type.is_empty() {
            return Err(CoreError::InvalidDataUrl(
                "missing media type".to_string(),
            ));
        }

        let bytes = STANDARD.decode(payload)?;

        Ok(Self {
            mime_type: mime_type.to_string(),
            bytes,
        })
    }

    /// Encode back to the tagged string form. `parse` of an `encode`
    /// output recovers the value byte-exactly.
    pub fn encode(&self) -> String {
        format!(
            "data:{};base64,{}",
            self.mime_type,
            STANDARD.encode(&self.bytes)
        )
    }

    /// File extension derived from the declared media type's subtype:
    /// `png` for `image/png`, `jpeg` for `image/jpeg`. Falls back to `bin`
    /// when the type carries no subtype.
    pub fn extension(&self) -> &str {
        self.mime_type
            .split_once('/')
            .map(|(_, subtype)| subtype)
            .filter(|s| !s.is_empty())
            .unwrap_or("bin")
    }
}
