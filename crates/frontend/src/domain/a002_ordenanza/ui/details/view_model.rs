use super::model::OrdenanzaFields;
use crate::shared::form_utils::FormViewModel;
use crate::shared::list_utils::ListViewModel;
use contracts::domain::a001_municipio::Municipio;
use contracts::domain::a002_ordenanza::{OrdenanzaForm, OrdenanzaId};
use contracts::shared::form::{EntityForm, FormMode};
use contracts::shared::list::LoadState;
use leptos::prelude::*;

#[derive(Clone, Copy)]
pub struct OrdenanzaDetailsVm {
    pub fields: OrdenanzaFields,
    pub form: FormViewModel<OrdenanzaForm>,
    /// Options of the municipio select
    pub municipios: ListViewModel<Municipio>,
}

impl OrdenanzaDetailsVm {
    pub fn new(id: Option<OrdenanzaId>) -> Self {
        let mode = match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        };
        Self {
            fields: OrdenanzaFields::from_draft(&OrdenanzaForm::empty_draft()),
            form: FormViewModel::new(mode),
            municipios: ListViewModel::new(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.form.is_edit() {
            "Editar ordenanza"
        } else {
            "Alta de ordenanza"
        }
    }

    pub fn load(&self) {
        let fields = self.fields;
        self.form.load(move |draft| fields.apply(&draft));
    }

    pub fn save_command(&self) {
        self.form.submit(self.fields.to_draft());
    }

    pub fn is_save_disabled(&self) -> Signal<bool> {
        let form = self.form;
        Signal::derive(move || form.is_in_flight() || form.loading.get())
    }

    /// `(id, nombre)` pairs for the select, empty until the list is loaded
    pub fn municipio_options(&self) -> Vec<(String, String)> {
        self.municipios
            .items()
            .into_iter()
            .map(|m| (m.id.to_string(), m.nombre))
            .collect()
    }

    pub fn municipios_unavailable(&self) -> bool {
        match self.municipios.load_state() {
            LoadState::Loading => false,
            LoadState::Failed(_) => true,
            LoadState::Ready => self.municipios.state.with(|c| c.items().is_empty()),
        }
    }
}
