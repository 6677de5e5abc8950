//! Document input types.

/// A document handed to the extractor. Consumed once per extraction.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    /// A PDF uploaded as raw bytes.
    Upload { bytes: Vec<u8> },
    /// A document reachable over HTTP.
    Url { url: String },
}

impl DocumentSource {
    /// Short description for logs and error messages.
    pub fn describe(&self) -> String {
        match self {
            Self::Upload { bytes } => format!("uploaded file ({} bytes)", bytes.len()),
            Self::Url { url } => url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let upload = DocumentSource::Upload { bytes: vec![0; 42] };
        assert_eq!(upload.describe(), "uploaded file (42 bytes)");

        let url = DocumentSource::Url {
            url: "https://example.com/bill.pdf".into(),
        };
        assert_eq!(url.describe(), "https://example.com/bill.pdf");
    }
}
