use super::aggregate::{Municipio, MunicipioDto, MunicipioId};
use crate::shared::form::{
    flag_text, DateBound, EntityForm, FieldRule, FieldSpec, FormDraft, FormMode, DATE_FORMAT,
};

pub const NOMBRE: &str = "nombre";
pub const DENSIDAD: &str = "densidadPoblacion";
pub const FUNDACION: &str = "fundacion";
pub const COALICION: &str = "gobiernoCoalicion";

/// Earliest accepted foundation date
pub const FUNDACION_MIN: DateBound = DateBound::ymd(1800, 1, 1);

const DENSIDAD_SPEC: FieldSpec = FieldSpec::new(
    DENSIDAD,
    "Densidad de población",
    FieldRule::non_negative(),
    "Ingrese un número válido",
);

const FUNDACION_SPEC: FieldSpec = FieldSpec::new(
    FUNDACION,
    "Fecha de fundación",
    FieldRule::date_between(FUNDACION_MIN, DateBound::Today),
    "Fecha inválida u obligatoria",
);

const COALICION_SPEC: FieldSpec = FieldSpec::new(
    COALICION,
    "Gobierno de coalición",
    FieldRule::Choice,
    "Seleccione una opción",
);

pub const CREATE_RULES: &[FieldSpec] = &[
    FieldSpec::new(
        NOMBRE,
        "Nombre",
        FieldRule::text(3),
        "El nombre debe tener al menos 3 caracteres",
    ),
    DENSIDAD_SPEC,
    FUNDACION_SPEC,
    COALICION_SPEC,
];

pub const EDIT_RULES: &[FieldSpec] = &[
    FieldSpec::new(
        NOMBRE,
        "Nombre",
        FieldRule::text(4),
        "El nombre debe tener al menos 4 caracteres",
    ),
    DENSIDAD_SPEC,
    FUNDACION_SPEC,
    COALICION_SPEC,
];

/// Create/edit form of a municipio
pub struct MunicipioForm;

impl EntityForm for MunicipioForm {
    type Entity = Municipio;
    type Payload = MunicipioDto;

    fn rules(mode: &FormMode<MunicipioId>) -> &'static [FieldSpec] {
        match mode {
            FormMode::Create => CREATE_RULES,
            FormMode::Edit(_) => EDIT_RULES,
        }
    }

    /// The coalition select starts on its "nothing chosen" sentinel
    fn empty_draft() -> FormDraft {
        FormDraft::new()
            .with(NOMBRE, "")
            .with(DENSIDAD, "")
            .with(FUNDACION, "")
            .with(COALICION, "")
    }

    fn draft_from(record: &Municipio) -> FormDraft {
        FormDraft::new()
            .with(NOMBRE, record.nombre.clone())
            .with(DENSIDAD, record.densidad_poblacion.to_string())
            .with(FUNDACION, record.fundacion.format(DATE_FORMAT).to_string())
            .with(COALICION, flag_text(record.gobierno_coalicion))
    }

    fn payload(draft: &FormDraft) -> Option<MunicipioDto> {
        Some(MunicipioDto {
            nombre: draft.text(NOMBRE),
            densidad_poblacion: draft.number(DENSIDAD)?,
            fundacion: draft.date(FUNDACION)?,
            gobierno_coalicion: draft.flag(COALICION)?,
        })
    }

    fn created_message() -> &'static str {
        "Municipio creado correctamente"
    }

    fn updated_message() -> &'static str {
        "Municipio actualizado correctamente"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api::mock::MockTransport;
    use crate::shared::api::{ApiClient, ApiError, HttpMethod};
    use crate::shared::form::{SubmissionController, SubmissionState, SubmitStart};
    use chrono::NaiveDate;
    use serde_json::json;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn valid_draft() -> FormDraft {
        MunicipioForm::empty_draft()
            .with(NOMBRE, "Abc")
            .with(DENSIDAD, "100")
            .with(FUNDACION, "2000-01-01")
            .with(COALICION, "true")
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_create_sends_full_record_and_shows_server_message() {
        let transport = MockTransport::new();
        transport.respond(201, r#"{"mensaje":"Municipio creado"}"#);
        let client = ApiClient::new(transport);
        let mut controller = SubmissionController::<MunicipioForm>::new(FormMode::Create);

        let state = controller.submit(&client, &valid_draft(), today()).await;
        assert_eq!(state, SubmissionState::Succeeded);

        let sent = client.transport().requests();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].path, "/municipios/");
        assert_eq!(
            sent[0].body,
            Some(json!({
                "nombre": "Abc",
                "densidadPoblacion": 100,
                "fundacion": "2000-01-01",
                "gobiernoCoalicion": true
            }))
        );

        let dialog = controller.dialog().unwrap();
        assert!(dialog.is_success());
        assert_eq!(dialog.message, "Municipio creado");
        assert_eq!(controller.dismiss_dialog(), Some("/municipios".to_string()));
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_short_name_blocks_submission() {
        let client = ApiClient::new(MockTransport::new());
        let mut controller = SubmissionController::<MunicipioForm>::new(FormMode::Create);
        let draft = valid_draft().with(NOMBRE, "Ab");

        let state = controller.submit(&client, &draft, today()).await;
        assert_eq!(state, SubmissionState::Idle);
        assert!(client.transport().requests().is_empty());
        assert_eq!(controller.report().invalid_fields(), vec![NOMBRE]);
        assert_eq!(
            controller.hint(NOMBRE),
            Some("El nombre debe tener al menos 3 caracteres")
        );
        assert!(controller.dialog().is_none());
    }

    #[test]
    fn test_edit_requires_four_characters() {
        let mut controller =
            SubmissionController::<MunicipioForm>::new(FormMode::Edit(MunicipioId(7)));
        let draft = valid_draft();

        assert_eq!(controller.begin(&draft, today()), SubmitStart::Invalid);

        match controller.begin(&draft.with(NOMBRE, "Abcd"), today()) {
            SubmitStart::Ready { request, .. } => {
                assert_eq!(request.method, HttpMethod::Put);
                assert_eq!(request.path, "/municipios/7");
            }
            other => panic!("unexpected start: {:?}", other),
        }
    }

    #[test]
    fn test_date_and_density_bounds() {
        let mut controller = SubmissionController::<MunicipioForm>::new(FormMode::Create);

        let draft = valid_draft()
            .with(FUNDACION, "1799-12-31")
            .with(DENSIDAD, "-1");
        assert_eq!(controller.begin(&draft, today()), SubmitStart::Invalid);
        assert_eq!(
            controller.report().invalid_fields(),
            vec![DENSIDAD, FUNDACION]
        );

        let future = valid_draft().with(FUNDACION, "2024-06-02");
        assert_eq!(controller.begin(&future, today()), SubmitStart::Invalid);

        let unset = valid_draft().with(COALICION, "");
        assert_eq!(controller.begin(&unset, today()), SubmitStart::Invalid);
        assert_eq!(controller.report().invalid_fields(), vec![COALICION]);

        let unknown = valid_draft().with(COALICION, "quizás");
        assert_eq!(controller.begin(&unknown, today()), SubmitStart::Invalid);
        assert_eq!(controller.hint(COALICION), Some("Seleccione una opción"));
    }

    #[test]
    fn test_second_submit_is_suppressed_while_in_flight() {
        let mut controller = SubmissionController::<MunicipioForm>::new(FormMode::Create);
        let SubmitStart::Ready { ticket, .. } = controller.begin(&valid_draft(), today()) else {
            panic!("first submit should start");
        };
        assert_eq!(
            controller.begin(&valid_draft(), today()),
            SubmitStart::Suppressed
        );

        assert!(controller.finish(ticket, Ok(None)));
        assert_eq!(
            controller.dialog().map(|d| d.message.as_str()),
            Some("Municipio creado correctamente")
        );
    }

    #[test]
    fn test_failure_keeps_user_on_form() {
        let mut controller =
            SubmissionController::<MunicipioForm>::new(FormMode::Edit(MunicipioId(2)));
        let draft = valid_draft().with(NOMBRE, "Jaca");
        let SubmitStart::Ready { ticket, .. } = controller.begin(&draft, today()) else {
            panic!("submit should start");
        };

        controller.finish(ticket, Err(ApiError::Network("offline".into())));
        assert_eq!(controller.state(), SubmissionState::Failed);
        assert_eq!(
            controller.dialog().map(|d| d.message.as_str()),
            Some("Error al actualizar el municipio")
        );
        assert_eq!(controller.dismiss_dialog(), None);
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_cancelled_result_is_ignored() {
        let mut controller = SubmissionController::<MunicipioForm>::new(FormMode::Create);
        let SubmitStart::Ready { ticket, .. } = controller.begin(&valid_draft(), today()) else {
            panic!("submit should start");
        };
        controller.cancel();

        assert!(!controller.finish(ticket, Ok(Some("tarde".into()))));
        assert!(controller.dialog().is_none());
        assert_eq!(controller.state(), SubmissionState::Idle);
    }

    #[tokio::test(flavor = "current_thread")]
    async fn test_fetch_draft_for_edit() {
        let transport = MockTransport::new();
        transport.respond(
            200,
            r#"{"datos":{"id":9,"nombre":"Ainsa","densidadPoblacion":12.5,"fundacion":"1901-02-03","gobiernoCoalicion":"false"}}"#,
        );
        let client = ApiClient::new(transport);
        let mut controller =
            SubmissionController::<MunicipioForm>::new(FormMode::Edit(MunicipioId(9)));

        let draft = controller.fetch_draft(&client).await.unwrap();
        assert_eq!(draft.get(NOMBRE), "Ainsa");
        assert_eq!(draft.get(DENSIDAD), "12.5");
        assert_eq!(draft.get(FUNDACION), "1901-02-03");
        assert_eq!(draft.get(COALICION), "false");
        assert_eq!(client.transport().requests()[0].path, "/municipios/9");
    }
}
