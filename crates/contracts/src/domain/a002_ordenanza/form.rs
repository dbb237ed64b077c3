use super::aggregate::{Ordenanza, OrdenanzaDto, OrdenanzaId};
use crate::domain::a001_municipio::MunicipioId;
use crate::shared::form::{
    flag_text, EntityForm, FieldRule, FieldSpec, FormDraft, FormMode, DATE_FORMAT,
};

pub const NOMBRE: &str = "nombre";
pub const FECHA: &str = "fecha_aprobacion";
pub const VOTO: &str = "voto_favorable";
pub const VIGENTE: &str = "vigente";
pub const MUNICIPIO: &str = "id_municipio";

pub const RULES: &[FieldSpec] = &[
    FieldSpec::new(
        NOMBRE,
        "Nombre",
        FieldRule::text(3),
        "El nombre debe tener al menos 3 caracteres",
    ),
    FieldSpec::new(
        FECHA,
        "Fecha de aprobación",
        FieldRule::date(),
        "Fecha inválida u obligatoria",
    ),
    FieldSpec::new(
        VOTO,
        "% Votos a favor",
        FieldRule::number_between(0.0, 100.0),
        "Debe estar entre 0 y 100",
    ),
    FieldSpec::new(
        MUNICIPIO,
        "Municipio",
        FieldRule::Reference,
        "Debe indicar el municipio",
    ),
    FieldSpec::new(VIGENTE, "Ordenanza vigente", FieldRule::Unchecked, ""),
];

/// Create/edit form of an ordenanza
pub struct OrdenanzaForm;

impl EntityForm for OrdenanzaForm {
    type Entity = Ordenanza;
    type Payload = OrdenanzaDto;

    fn rules(_mode: &FormMode<OrdenanzaId>) -> &'static [FieldSpec] {
        RULES
    }

    fn empty_draft() -> FormDraft {
        FormDraft::new()
            .with(NOMBRE, "")
            .with(FECHA, "")
            .with(VOTO, "")
            .with(VIGENTE, flag_text(true))
            .with(MUNICIPIO, "")
    }

    fn draft_from(record: &Ordenanza) -> FormDraft {
        FormDraft::new()
            .with(NOMBRE, record.nombre.clone())
            .with(FECHA, record.fecha_aprobacion.format(DATE_FORMAT).to_string())
            .with(VOTO, record.voto_favorable.to_string())
            .with(VIGENTE, flag_text(record.vigente))
            .with(
                MUNICIPIO,
                record
                    .municipio_id()
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            )
    }

    fn payload(draft: &FormDraft) -> Option<OrdenanzaDto> {
        Some(OrdenanzaDto {
            nombre: draft.text(NOMBRE),
            fecha_aprobacion: draft.date(FECHA)?,
            voto_favorable: draft.number(VOTO)?,
            vigente: draft.flag(VIGENTE).unwrap_or(false),
            id_municipio: MunicipioId(draft.reference(MUNICIPIO)?),
        })
    }

    fn created_message() -> &'static str {
        "Ordenanza creada correctamente"
    }

    fn updated_message() -> &'static str {
        "Ordenanza actualizada correctamente"
    }

    fn create_error_message() -> &'static str {
        "Error al crear la ordenanza"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::{ApiClient, HttpMethod};
    use crate::shared::form::{SubmissionController, SubmissionState, SubmitStart};
    use chrono::NaiveDate;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_draft() -> FormDraft {
        OrdenanzaForm::empty_draft()
            .with(NOMBRE, "Ordenanza de ruidos")
            .with(FECHA, "2023-04-05")
            .with(VOTO, "75")
            .with(MUNICIPIO, "3")
    }

    #[test]
    fn test_vote_outside_range_or_empty_fails() {
        let mut controller = SubmissionController::<OrdenanzaForm>::new(FormMode::Create);
        for voto in ["-0.5", "100.01", "", "abc"] {
            let draft = valid_draft().with(VOTO, voto);
            assert_eq!(controller.begin(&draft, today()), SubmitStart::Invalid, "{voto:?}");
            assert_eq!(controller.hint(VOTO), Some("Debe estar entre 0 y 100"));
        }
        for voto in ["0", "100"] {
            let draft = valid_draft().with(VOTO, voto);
            assert!(matches!(
                controller.begin(&draft, today()),
                SubmitStart::Ready { .. }
            ));
            controller.cancel();
        }
    }

    #[test]
    fn test_municipio_is_required() {
        let mut controller = SubmissionController::<OrdenanzaForm>::new(FormMode::Create);
        let draft = valid_draft().with(MUNICIPIO, "");
        assert_eq!(controller.begin(&draft, today()), SubmitStart::Invalid);
        assert_eq!(controller.report().invalid_fields(), vec![MUNICIPIO]);

        let not_an_id = valid_draft().with(MUNICIPIO, "tres");
        assert_eq!(controller.begin(&not_an_id, today()), SubmitStart::Invalid);
        assert_eq!(controller.hint(MUNICIPIO), Some("Debe indicar el municipio"));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_create_payload_and_default_vigente() {
        let transport = MockTransport::new();
        transport.respond(200, "");
        let client = ApiClient::new(transport);
        let mut controller = SubmissionController::<OrdenanzaForm>::new(FormMode::Create);

        let state = controller.submit(&client, &valid_draft(), today()).await;
        assert_eq!(state, SubmissionState::Succeeded);
        assert_eq!(
            controller.dialog().map(|d| d.message.as_str()),
            Some("Ordenanza creada correctamente")
        );

        let sent = client.transport().requests();
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].path, "/ordenanzas/");
        assert_eq!(
            sent[0].body,
            Some(json!({
                "nombre": "Ordenanza de ruidos",
                "fecha_aprobacion": "2023-04-05",
                "voto_favorable": 75,
                "vigente": true,
                "id_municipio": 3
            }))
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_create_failure_without_message_uses_fallback() {
        let transport = MockTransport::new();
        transport.respond(500, "");
        let client = ApiClient::new(transport);
        let mut controller = SubmissionController::<OrdenanzaForm>::new(FormMode::Create);

        let state = controller.submit(&client, &valid_draft(), today()).await;
        assert_eq!(state, SubmissionState::Failed);
        assert_eq!(
            controller.dialog().map(|d| d.message.as_str()),
            Some("Error al crear la ordenanza")
        );
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_edit_replaces_by_id() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"datos":{"id_ordenanza":4,"nombre":"Terrazas","fecha_aprobacion":"2019-09-09","voto_favorable":55,"vigente":false,"id_municipio":2}}"#,
        );
        transport.respond(200, r#"{"mensaje":"Ordenanza actualizada"}"#);
        let client = ApiClient::new(transport);
        let mut controller =
            SubmissionController::<OrdenanzaForm>::new(FormMode::Edit(OrdenanzaId(4)));

        let draft = controller.fetch_draft(&client).await.unwrap();
        assert_eq!(draft.get(VIGENTE), "false");
        assert_eq!(draft.get(MUNICIPIO), "2");

        controller.submit(&client, &draft, today()).await;
        let sent = client.transport().requests();
        assert_eq!(sent[1].method, HttpMethod::Put);
        assert_eq!(sent[1].path, "/ordenanzas/4");
        assert_eq!(sent[1].body.as_ref().unwrap()["vigente"], json!(false));
        assert_eq!(controller.dismiss_dialog(), Some("/ordenanzas".to_string()));
    }
}
