pub mod aggregate;
pub mod filter;
pub mod form;

pub use aggregate::{Municipio, MunicipioDto, MunicipioId};
pub use filter::MunicipioFilter;
pub use form::MunicipioForm;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::{ApiClient, ApiError, HttpMethod};
    use crate::shared::list::{ListController, LoadState};

    const LIST: &str = r#"{"datos":[
        {"id":3,"nombre":"Alcañiz","densidadPoblacion":34.1,"fundacion":"1850-01-01","gobiernoCoalicion":true},
        {"id":5,"nombre":"Calatayud","densidadPoblacion":"17","fundacion":"1900-01-01","gobiernoCoalicion":false}
    ]}"#;

    #[tokio::test(flavor = "current_thread")]
    async fn test_failed_delete_keeps_list_and_shows_server_message() {
        let transport = MockTransport::new();
        transport.respond(200, LIST);
        transport.respond(409, r#"{"mensaje":"No se puede eliminar"}"#);
        let client = ApiClient::new(transport);
        let mut list = ListController::<Municipio>::new();

        list.load(&client).await;
        assert_eq!(list.state(), &LoadState::Ready);
        let before = list.items().to_vec();

        list.delete(&client, MunicipioId(5)).await;
        assert_eq!(list.items(), before.as_slice());
        let dialog = list.dialog().unwrap();
        assert!(!dialog.is_success());
        assert_eq!(dialog.message, "No se puede eliminar");

        let sent = client.transport().requests();
        assert_eq!(sent[1].method, HttpMethod::Delete);
        assert_eq!(sent[1].path, "/municipios/5");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_confirmed_delete_removes_record() {
        let transport = MockTransport::new();
        transport.respond(200, LIST);
        transport.respond(200, r#"{"mensaje":"Municipio eliminado"}"#);
        let client = ApiClient::new(transport);
        let mut list = ListController::<Municipio>::new();

        list.load(&client).await;
        list.delete(&client, MunicipioId(5)).await;
        assert_eq!(list.items().len(), 1);
        assert_eq!(list.items()[0].id, MunicipioId(3));
        assert!(list.dialog().is_none());
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_load_failure_message() {
        let transport = MockTransport::new();
        transport.fail(ApiError::Network("connection refused".into()));
        let client = ApiClient::new(transport);
        let mut list = ListController::<Municipio>::new();

        list.load(&client).await;
        assert_eq!(
            list.state(),
            &LoadState::Failed("No se pudo conectar al servidor".into())
        );
        assert!(list.items().is_empty());
    }

    #[test]
    fn test_delete_guard_and_cancel() {
        let mut list = ListController::<Municipio>::new();
        let ticket = list.begin_load();
        let pending = list.begin_delete(MunicipioId(1)).unwrap();
        assert!(list.is_deleting(MunicipioId(1)));
        assert!(list.begin_delete(MunicipioId(2)).is_none());

        list.cancel();
        assert!(!list.finish_delete(pending, Ok(None)));
        assert!(!list.finish_load(ticket, Ok(Vec::new())));
        assert_eq!(list.state(), &LoadState::Loading);
    }

    #[test]
    fn test_delete_does_not_invalidate_load_in_flight() {
        let mut list = ListController::<Municipio>::new();
        let ticket = list.begin_load();
        let pending = list.begin_delete(MunicipioId(5)).unwrap();

        let loaded: Municipio = serde_json::from_str(
            r#"{"id":5,"nombre":"Calatayud","densidadPoblacion":17,"fundacion":"1900-01-01","gobiernoCoalicion":false}"#,
        )
        .unwrap();
        assert!(list.finish_load(ticket, Ok(vec![loaded])));
        assert_eq!(list.state(), &LoadState::Ready);

        assert!(list.finish_delete(pending, Ok(None)));
        assert!(list.items().is_empty());
    }
}
