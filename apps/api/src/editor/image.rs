//! Inline image embedding. Uploaded files become `data:` URLs stored
//! directly in the document — there is no external object storage and no
//! size limit, so large images inflate the persisted document without
//! bound (same trade-off as the original).

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

/// Where an uploaded image lands in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageTarget {
    Profile,
    Project,
}

pub fn to_data_url(content_type: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", content_type, STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_url_carries_mime_and_base64_payload() {
        let url = to_data_url("image/png", b"abc");
        assert_eq!(url, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_empty_payload_still_forms_a_data_url() {
        assert_eq!(to_data_url("image/jpeg", b""), "data:image/jpeg;base64,");
    }
}
