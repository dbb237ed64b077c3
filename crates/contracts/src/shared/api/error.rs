use thiserror::Error;

/// Errors of the data API client
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out after {0} ms")]
    Timeout(u32),

    #[error("HTTP {status}: {}", mensaje.as_deref().unwrap_or("sin mensaje"))]
    Server { status: u16, mensaje: Option<String> },

    #[error("Failed to parse response: {0}")]
    Decode(String),

    #[error("Failed to encode request: {0}")]
    Encode(String),
}

impl ApiError {
    /// Message supplied by the server in the error payload, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server {
                mensaje: Some(m), ..
            } if !m.trim().is_empty() => Some(m.as_str()),
            _ => None,
        }
    }

    /// User-facing text: the server message when present, otherwise `fallback`
    pub fn user_message(&self, fallback: &str) -> String {
        self.server_message()
            .map(str::to_string)
            .unwrap_or_else(|| fallback.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_prefers_server_text() {
        let err = ApiError::Server {
            status: 409,
            mensaje: Some("No se puede eliminar".into()),
        };
        assert_eq!(err.user_message("Error interno"), "No se puede eliminar");
    }

    #[test]
    fn test_user_message_falls_back() {
        assert_eq!(
            ApiError::Network("offline".into()).user_message("Error interno"),
            "Error interno"
        );
        let blank = ApiError::Server {
            status: 500,
            mensaje: Some("  ".into()),
        };
        assert_eq!(blank.user_message("Error interno"), "Error interno");
    }
}
