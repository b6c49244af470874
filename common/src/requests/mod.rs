use serde::{Deserialize, Serialize};

/// Response of `POST /api/ads/{id}/click`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClickResponse {
    pub clicks: u64,
}

/// Response of `POST /api/upload`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Generated name of the stored file inside the uploads directory.
    pub filename: String,
    /// File name declared by the client.
    pub original_name: String,
    /// Stored size in bytes.
    pub size: u64,
    /// Public URL the file can be fetched from.
    pub url: String,
}

/// Response of `GET /api/health`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
}

/// A validation failure on a single form field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// JSON body of every error response returned by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable summary.
    pub error: String,
    /// Request path, set on 404 responses for unknown routes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Per-field failures of a rejected form.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<FieldError>,
    /// Underlying cause of an internal error. Omitted in production mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            ..Self::default()
        }
    }

    pub fn route_not_found(path: impl Into<String>) -> Self {
        Self {
            error: "Not found".to_string(),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Joins the summary and every field failure into one line for display.
    pub fn describe(&self) -> String {
        if self.details.is_empty() {
            return self.error.clone();
        }
        let fields: Vec<String> = self
            .details
            .iter()
            .map(|d| format!("{}: {}", d.field, d.message))
            .collect();
        format!("{} ({})", self.error, fields.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_response_uses_camel_case() {
        let response = UploadResponse {
            filename: "1-abc.mp4".to_string(),
            original_name: "clip.mp4".to_string(),
            size: 42,
            url: "/uploads/1-abc.mp4".to_string(),
        };
        let value = serde_json::to_value(response).unwrap();
        assert_eq!(value["originalName"], "clip.mp4");
        assert_eq!(value["size"], 42);
    }

    #[test]
    fn error_response_omits_empty_parts() {
        let value = serde_json::to_value(ErrorResponse::route_not_found("/api/nope")).unwrap();
        assert_eq!(value, serde_json::json!({ "error": "Not found", "path": "/api/nope" }));
    }

    #[test]
    fn describe_lists_field_errors() {
        let response = ErrorResponse {
            error: "Validation failed".to_string(),
            details: vec![
                FieldError {
                    field: "title".to_string(),
                    message: "Please enter the ad title".to_string(),
                },
                FieldError {
                    field: "price".to_string(),
                    message: "Please enter a bid".to_string(),
                },
            ],
            ..ErrorResponse::default()
        };
        assert_eq!(
            response.describe(),
            "Validation failed (title: Please enter the ad title; price: Please enter a bid)"
        );
    }
}
