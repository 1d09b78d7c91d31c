//! Two-stage MIME type detection.
//!
//! Stage one sniffs well-known magic numbers in the content; stage two
//! falls back to an extension-based guess on the original filename. The
//! result is a tagged value rather than an `Option`, so callers must
//! handle the undetermined case explicitly.

use crm_core::error::AppError;
use crm_core::result::AppResult;

/// MIME type for DOCX files.
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

/// MIME types accepted for upload.
pub const ALLOWED_MIME_TYPES: [&str; 4] =
    ["application/pdf", MIME_DOCX, "image/jpeg", "image/png"];

/// Outcome of MIME detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MimeDetection {
    /// A concrete MIME type was determined.
    Detected(String),
    /// Neither content sniffing nor the filename yielded a type.
    Undetermined,
}

/// Detect the MIME type of uploaded content.
///
/// Content sniffing wins over the filename; the extension guess only runs
/// when the magic numbers are inconclusive.
pub fn detect(content: &[u8], filename: &str) -> MimeDetection {
    if let Some(mime) = sniff_content(content) {
        return MimeDetection::Detected(mime.to_string());
    }
    match mime_guess::from_path(filename).first_raw() {
        Some(mime) => MimeDetection::Detected(mime.to_string()),
        None => MimeDetection::Undetermined,
    }
}

/// Detect and enforce the upload allow-list.
///
/// Returns the MIME type, or a policy error when the type is undetermined
/// or not allowed.
pub fn detect_allowed(content: &[u8], filename: &str) -> AppResult<String> {
    match detect(content, filename) {
        MimeDetection::Detected(mime) => {
            if ALLOWED_MIME_TYPES.contains(&mime.as_str()) {
                Ok(mime)
            } else {
                Err(AppError::policy(format!(
                    "File type '{mime}' is not allowed"
                )))
            }
        }
        MimeDetection::Undetermined => {
            Err(AppError::policy("Could not determine file type"))
        }
    }
}

/// Sniff magic numbers for the formats this service cares about.
fn sniff_content(content: &[u8]) -> Option<&'static str> {
    if content.starts_with(b"%PDF") {
        return Some("application/pdf");
    }
    if content.starts_with(b"\x89PNG\r\n\x1a\n") {
        return Some("image/png");
    }
    if content.starts_with(b"\xFF\xD8\xFF") {
        return Some("image/jpeg");
    }
    // DOCX is a ZIP container; the word/ directory marker distinguishes it
    // from arbitrary archives without unpacking.
    if content.starts_with(b"PK\x03\x04") && contains(content, b"word/") {
        return Some(MIME_DOCX);
    }
    None
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crm_core::error::ErrorKind;

    #[test]
    fn test_sniff_pdf() {
        assert_eq!(
            detect(b"%PDF-1.7 rest of file", "anything.bin"),
            MimeDetection::Detected("application/pdf".to_string())
        );
    }

    #[test]
    fn test_sniff_png() {
        let png = b"\x89PNG\r\n\x1a\n0000";
        assert_eq!(
            detect(png, "photo.jpg"),
            MimeDetection::Detected("image/png".to_string()),
            "content sniff must win over a misleading extension"
        );
    }

    #[test]
    fn test_sniff_jpeg() {
        assert_eq!(
            detect(b"\xFF\xD8\xFF\xE0rest", "pic"),
            MimeDetection::Detected("image/jpeg".to_string())
        );
    }

    #[test]
    fn test_sniff_docx_zip_marker() {
        let mut docx = b"PK\x03\x04".to_vec();
        docx.extend_from_slice(b"....word/document.xml....");
        assert_eq!(
            detect(&docx, "unnamed"),
            MimeDetection::Detected(MIME_DOCX.to_string())
        );
    }

    #[test]
    fn test_extension_fallback() {
        assert_eq!(
            detect(b"no recognizable magic", "scan.pdf"),
            MimeDetection::Detected("application/pdf".to_string())
        );
    }

    #[test]
    fn test_undetermined() {
        assert_eq!(detect(b"mystery bytes", "mystery"), MimeDetection::Undetermined);
    }

    #[test]
    fn test_detect_allowed_rejects_undetermined() {
        let err = detect_allowed(b"mystery bytes", "mystery").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Policy);
    }

    #[test]
    fn test_detect_allowed_rejects_disallowed_type() {
        // GIF sniffs to nothing here, but the .gif extension guesses image/gif,
        // which is outside the allow-list.
        let err = detect_allowed(b"GIF89a...", "anim.gif").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Policy);
        assert!(err.message.contains("image/gif"));
    }

    #[test]
    fn test_detect_allowed_accepts_png() {
        let png = b"\x89PNG\r\n\x1a\nchunk";
        assert_eq!(detect_allowed(png, "img.png").unwrap(), "image/png");
    }
}
