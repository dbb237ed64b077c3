use serde::{Deserialize, Serialize};

/// Response body of every API call: `datos` on success, `mensaje` describing
/// the outcome or the error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub datos: Option<T>,
    pub mensaje: Option<String>,
}

impl<T> ApiEnvelope<T> {
    pub fn empty() -> Self {
        Self {
            datos: None,
            mensaje: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_none() {
        let env: ApiEnvelope<Vec<i32>> = serde_json::from_str("{}").unwrap();
        assert_eq!(env, ApiEnvelope::empty());

        let env: ApiEnvelope<Vec<i32>> =
            serde_json::from_str(r#"{"datos":[1,2],"mensaje":"ok"}"#).unwrap();
        assert_eq!(env.datos, Some(vec![1, 2]));
        assert_eq!(env.mensaje.as_deref(), Some("ok"));
    }
}
