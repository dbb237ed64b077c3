use super::model::MunicipioFields;
use crate::shared::form_utils::FormViewModel;
use contracts::domain::a001_municipio::{MunicipioForm, MunicipioId};
use contracts::shared::form::{EntityForm, FormMode};
use leptos::prelude::*;

/// ViewModel for the municipio create/edit form
#[derive(Clone, Copy)]
pub struct MunicipioDetailsVm {
    pub fields: MunicipioFields,
    pub form: FormViewModel<MunicipioForm>,
}

impl MunicipioDetailsVm {
    pub fn new(id: Option<MunicipioId>) -> Self {
        let mode = match id {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        };
        Self {
            fields: MunicipioFields::from_draft(&MunicipioForm::empty_draft()),
            form: FormViewModel::new(mode),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.form.is_edit() {
            "Editar municipio"
        } else {
            "Alta de municipio"
        }
    }

    /// Load the stored record into the fields (edit mode only)
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
}
