use contracts::domain::a002_ordenanza::form::{FECHA, MUNICIPIO, NOMBRE, VIGENTE, VOTO};
use contracts::shared::form::{flag_text, FormDraft};
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OrdenanzaFields {
    pub nombre: RwSignal<String>,
    pub fecha: RwSignal<String>,
    pub voto: RwSignal<String>,
    pub vigente: RwSignal<bool>,
    /// Selected municipio id, "" while none is chosen
    pub municipio: RwSignal<String>,
}

impl OrdenanzaFields {
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            nombre: RwSignal::new(draft.get(NOMBRE).to_string()),
            fecha: RwSignal::new(draft.get(FECHA).to_string()),
            voto: RwSignal::new(draft.get(VOTO).to_string()),
            vigente: RwSignal::new(draft.get(VIGENTE) == flag_text(true)),
            municipio: RwSignal::new(draft.get(MUNICIPIO).to_string()),
        }
    }

    pub fn apply(&self, draft: &FormDraft) {
        self.nombre.set(draft.get(NOMBRE).to_string());
        self.fecha.set(draft.get(FECHA).to_string());
        self.voto.set(draft.get(VOTO).to_string());
        self.vigente.set(draft.get(VIGENTE) == flag_text(true));
        self.municipio.set(draft.get(MUNICIPIO).to_string());
    }

    pub fn to_draft(&self) -> FormDraft {
        FormDraft::new()
            .with(NOMBRE, self.nombre.get_untracked())
            .with(FECHA, self.fecha.get_untracked())
            .with(VOTO, self.voto.get_untracked())
            .with(VIGENTE, flag_text(self.vigente.get_untracked()))
            .with(MUNICIPIO, self.municipio.get_untracked())
    }
}
