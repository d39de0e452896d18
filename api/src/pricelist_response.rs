use serde::Serialize;

/// Reply of `/upload-pricelist`. Failures are reported in the body, with
/// status 200, the same way the widget has always read them.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum UploadResponse {
    Stored {
        status: &'static str,
        filename: String,
        text_length: usize,
    },
    Failed {
        error: String,
    },
}

impl UploadResponse {
    pub fn stored(filename: String, text_length: usize) -> Self {
        UploadResponse::Stored {
            status: "ok",
            filename,
            text_length,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        UploadResponse::Failed {
            error: error.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub status: &'static str,
}

impl DeleteResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_response_shapes() {
        let stored = serde_json::to_value(UploadResponse::stored("cennik.pdf".into(), 11)).unwrap();
        assert_eq!(
            stored,
            serde_json::json!({"status": "ok", "filename": "cennik.pdf", "text_length": 11})
        );
        let failed = serde_json::to_value(UploadResponse::failed("bad pdf")).unwrap();
        assert_eq!(failed, serde_json::json!({"error": "bad pdf"}));
    }
}
