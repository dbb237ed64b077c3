use super::{ApiEnvelope, ApiError, ApiRequest, ApiResponse, HttpMethod, HttpTransport};
use crate::domain::common::Entity;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

/// Data API client
///
/// Every call is a single request; there is no retry and no caching.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetch the whole collection (no pagination, no server-side filtering)
    pub async fn list<E: Entity>(&self) -> Result<Vec<E>, ApiError> {
        self.read(&E::list_path()).await
    }

    /// Fetch one record by identifier
    pub async fn fetch<E: Entity>(&self, id: E::Id) -> Result<E, ApiError> {
        self.read(&E::item_path(id)).await
    }

    /// Delete one record; returns the server message, if any
    pub async fn delete<E: Entity>(&self, id: E::Id) -> Result<Option<String>, ApiError> {
        let request = ApiRequest {
            method: HttpMethod::Delete,
            path: E::item_path(id),
            body: None,
        };
        Ok(self.execute(request).await?.mensaje)
    }

    /// Send a full-record payload (POST create / PUT replace); returns the
    /// server message, if any
    pub async fn write<P: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        payload: &P,
    ) -> Result<Option<String>, ApiError> {
        let body = serde_json::to_value(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        let request = ApiRequest {
            method,
            path: path.to_string(),
            body: Some(body),
        };
        Ok(self.execute(request).await?.mensaje)
    }

    /// GET `path` and decode the `datos` member
    pub async fn read<D: DeserializeOwned>(&self, path: &str) -> Result<D, ApiError> {
        let request = ApiRequest {
            method: HttpMethod::Get,
            path: path.to_string(),
            body: None,
        };
        let envelope = self.execute(request).await?;
        let datos = envelope
            .datos
            .ok_or_else(|| ApiError::Decode("response has no datos".to_string()))?;
        serde_json::from_value(datos).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn execute(&self, request: ApiRequest) -> Result<ApiEnvelope<Value>, ApiError> {
        let method = request.method;
        let path = request.path.clone();
        log::debug!("api: {} {}", method.as_str(), path);

        let response = self.transport.send(request).await.map_err(|e| {
            log::warn!("api: {} {} failed: {}", method.as_str(), path, e);
            e
        })?;

        if !response.is_success() {
            let mensaje = parse_envelope(&response).ok().and_then(|env| env.mensaje);
            log::warn!(
                "api: {} {} -> HTTP {} ({})",
                method.as_str(),
                path,
                response.status,
                mensaje.as_deref().unwrap_or("-")
            );
            return Err(ApiError::Server {
                status: response.status,
                mensaje,
            });
        }

        parse_envelope(&response)
    }
}

/// Decode a response body into an envelope
///
/// An empty body is an acknowledgement without data; a JSON value that is
/// not an envelope object is taken as the data itself.
fn parse_envelope(response: &ApiResponse) -> Result<ApiEnvelope<Value>, ApiError> {
    if response.body.trim().is_empty() {
        return Ok(ApiEnvelope::empty());
    }
    let value: Value =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))?;
    let is_envelope = matches!(
        &value,
        Value::Object(map) if map.contains_key("datos") || map.contains_key("mensaje")
    );
    if is_envelope {
        serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        Ok(ApiEnvelope {
            datos: Some(value),
            mensaje: None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_municipio::{Municipio, MunicipioId};
    use crate::shared::api::mock::MockTransport;

    #[tokio::test(flavor = "current_thread")]
    async fn test_list_decodes_datos() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"datos":[{"id":1,"nombre":"Teruel","densidadPoblacion":"9.5","fundacion":"1850-03-01","gobiernoCoalicion":false}]}"#,
        );
        let client = ApiClient::new(transport);

        let items: Vec<Municipio> = client.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].nombre, "Teruel");
        assert_eq!(items[0].densidad_poblacion, 9.5);

        let sent = client.transport().requests();
        assert_eq!(sent[0].method, HttpMethod::Get);
        assert_eq!(sent[0].path, "/municipios");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_error_status_carries_server_message() {
        let transport = MockTransport::new();
        transport.respond(409, r#"{"mensaje":"No se puede eliminar"}"#);
        let client = ApiClient::new(transport);

        let err = client.delete::<Municipio>(MunicipioId(5)).await.unwrap_err();
        assert_eq!(
            err,
            ApiError::Server {
                status: 409,
                mensaje: Some("No se puede eliminar".into())
            }
        );
        assert_eq!(client.transport().requests()[0].path, "/municipios/5");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_error_status_with_html_body_has_no_message() {
        let transport = MockTransport::new();
        transport.respond(502, "<html>Bad Gateway</html>");
        let client = ApiClient::new(transport);

        let err = client.list::<Municipio>().await.unwrap_err();
        assert_eq!(err.server_message(), None);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_empty_body_is_acknowledgement() {
        let transport = MockTransport::new();
        transport.respond(204, "");
        let client = ApiClient::new(transport);

        assert_eq!(client.delete::<Municipio>(MunicipioId(3)).await, Ok(None));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_bare_array_is_accepted_as_datos() {
        let transport = MockTransport::new();
        transport.respond(200, "[]");
        let client = ApiClient::new(transport);

        let items: Vec<Municipio> = client.list().await.unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_read_without_datos_is_decode_error() {
        let transport = MockTransport::new();
        transport.respond(200, r#"{"mensaje":"ok"}"#);
        let client = ApiClient::new(transport);

        let err = client.fetch::<Municipio>(MunicipioId(1)).await.unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
