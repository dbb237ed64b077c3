use contracts::domain::a001_municipio::form::{COALICION, DENSIDAD, FUNDACION, NOMBRE};
use contracts::shared::form::FormDraft;
use leptos::prelude::*;

/// Input signals of the municipio form, one per field
#[derive(Clone, Copy)]
pub struct MunicipioFields {
    pub nombre: RwSignal<String>,
    pub densidad: RwSignal<String>,
    pub fundacion: RwSignal<String>,
    /// "true", "false" or "" (nothing chosen)
    pub coalicion: RwSignal<String>,
}

impl MunicipioFields {
    pub fn from_draft(draft: &FormDraft) -> Self {
        Self {
            nombre: RwSignal::new(draft.get(NOMBRE).to_string()),
            densidad: RwSignal::new(draft.get(DENSIDAD).to_string()),
            fundacion: RwSignal::new(draft.get(FUNDACION).to_string()),
            coalicion: RwSignal::new(draft.get(COALICION).to_string()),
        }
    }

    pub fn apply(&self, draft: &FormDraft) {
        self.nombre.set(draft.get(NOMBRE).to_string());
        self.densidad.set(draft.get(DENSIDAD).to_string());
        self.fundacion.set(draft.get(FUNDACION).to_string());
        self.coalicion.set(draft.get(COALICION).to_string());
    }

    pub fn to_draft(&self) -> FormDraft {
        FormDraft::new()
            .with(NOMBRE, self.nombre.get_untracked())
            .with(DENSIDAD, self.densidad.get_untracked())
            .with(FUNDACION, self.fundacion.get_untracked())
            .with(COALICION, self.coalicion.get_untracked())
    }
}
