//! Text extraction for uploads. PDFs go through `pdf-extract`; plain-text and
//! markdown files are read as UTF-8. Everything else is rejected.

use thiserror::Error;

/// Why an upload yielded no usable text.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("'{0}' is not a supported format (PDF, TXT or MD)")]
    Unsupported(String),

    #[error("{0}")]
    Unreadable(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    PlainText,
}

impl DocumentKind {
    /// Content type wins over the file extension when both are present.
    pub fn detect(file_name: &str, content_type: Option<&str>) -> Option<Self> {
        let from_mime = content_type.and_then(|ct| {
            let mime = ct.split(';').next().unwrap_or(ct).trim();
            match mime {
                "application/pdf" => Some(DocumentKind::Pdf),
                "text/plain" | "text/markdown" => Some(DocumentKind::PlainText),
                _ => None,
            }
        });
        from_mime.or_else(|| {
            let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
            match ext.as_str() {
                "pdf" => Some(DocumentKind::Pdf),
                "txt" | "md" => Some(DocumentKind::PlainText),
                _ => None,
            }
        })
    }
}

/// Extracts plain text from an uploaded file. CPU-bound for PDFs; call it from
/// `spawn_blocking` in async contexts.
pub fn extract_text(
    file_name: &str,
    content_type: Option<&str>,
    bytes: &[u8],
) -> Result<String, ExtractionError> {
    let kind = DocumentKind::detect(file_name, content_type)
        .ok_or_else(|| ExtractionError::Unsupported(file_name.to_string()))?;

    let text = match kind {
        DocumentKind::Pdf => pdf_extract::extract_text_from_mem(bytes).map_err(|e| {
            ExtractionError::Unreadable(format!("Could not read PDF '{file_name}': {e}"))
        })?,
        DocumentKind::PlainText => String::from_utf8(bytes.to_vec()).map_err(|_| {
            ExtractionError::Unreadable(format!("'{file_name}' is not valid UTF-8 text"))
        })?,
    };

    if text.trim().is_empty() {
        return Err(ExtractionError::Unreadable(format!(
            "No text could be extracted from '{file_name}'"
        )));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_by_content_type() {
        assert_eq!(
            DocumentKind::detect("upload", Some("application/pdf")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(
            DocumentKind::detect("upload.bin", Some("text/plain; charset=utf-8")),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn test_detect_by_extension() {
        assert_eq!(
            DocumentKind::detect("CV.PDF", Some("application/octet-stream")),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::detect("notes.md", None), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::detect("resume.docx", None), None);
        assert_eq!(DocumentKind::detect("noextension", None), None);
    }

    #[test]
    fn test_plain_text_extraction() {
        let text = extract_text("resume.txt", None, "Jane Doe\nEngineer".as_bytes()).unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_rejects_unsupported_and_empty() {
        assert!(matches!(
            extract_text("resume.docx", None, b"PK"),
            Err(ExtractionError::Unsupported(_))
        ));
        assert!(matches!(
            extract_text("resume.txt", None, b"   \n"),
            Err(ExtractionError::Unreadable(_))
        ));
        assert!(matches!(
            extract_text("resume.txt", None, &[0xff, 0xfe, 0x00]),
            Err(ExtractionError::Unreadable(_))
        ));
    }

    #[test]
    fn test_corrupt_pdf_is_unprocessable() {
        assert!(matches!(
            extract_text("resume.pdf", Some("application/pdf"), b"not a pdf"),
            Err(ExtractionError::Unreadable(_))
        ));
    }
}
