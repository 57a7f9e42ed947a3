//! API response type definitions.

use serde::Deserialize;

use crate::error::{Error, Result};

/// Status value reported by the endpoint on success.
pub const STATUS_SUCCESS: &str = "success";

/// Response of the random image endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomImageResponse {
    /// Image URL on success, error text otherwise.
    pub message: Option<String>,
    pub status: Option<String>,
}

impl RandomImageResponse {
    /// Extract the image URL, rejecting error statuses and missing messages.
    pub fn into_image_url(self) -> Result<String> {
        if let Some(status) = self.status.as_deref() {
            if status != STATUS_SUCCESS {
                return Err(Error::InvalidResponse(format!(
                    "Endpoint reported status '{}': {}",
                    status,
                    self.message.as_deref().unwrap_or("no message")
                )));
            }
        }

        match self.message {
            Some(url) if !url.trim().is_empty() => Ok(url),
            _ => Err(Error::InvalidResponse(
                "No image URL in response message".into(),
            )),
        }
    }
}

/// Parse a metadata response body into the image URL it carries.
pub fn parse_image_url(body: &str) -> Result<String> {
    let response: RandomImageResponse = serde_json::from_str(body).map_err(|e| {
        Error::InvalidResponse(format!(
            "Failed to parse image metadata: {} - Response: {}",
            e,
            body.chars().take(200).collect::<String>()
        ))
    })?;

    response.into_image_url()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_image_url() {
        let body = r#"{"message":"https://x/y.jpg","status":"success"}"#;
        assert_eq!(parse_image_url(body).unwrap(), "https://x/y.jpg");
    }

    #[test]
    fn test_missing_message_is_invalid_response() {
        let body = r#"{"status":"success"}"#;
        assert!(matches!(
            parse_image_url(body),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_malformed_body_is_invalid_response() {
        assert!(matches!(
            parse_image_url("<html>502 Bad Gateway</html>"),
            Err(Error::InvalidResponse(_))
        ));
        assert!(matches!(
            parse_image_url(r#"{"message": 42}"#),
            Err(Error::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_error_status_is_invalid_response() {
        let body = r#"{"message":"Breed not found","status":"error"}"#;
        let err = parse_image_url(body).unwrap_err();
        assert!(err.to_string().contains("Breed not found"));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let body = r#"{"message":"https://x/z.jpg","status":"success","code":200}"#;
        assert_eq!(parse_image_url(body).unwrap(), "https://x/z.jpg");
    }
}
