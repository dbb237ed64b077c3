//! Reactive submission state shared by the create/edit screens

use super::api_utils::api_client;
use super::date_utils::today;
use contracts::domain::common::Entity;
use contracts::shared::dialog::Dialog;
use contracts::shared::form::{
    EntityForm, FormDraft, FormMode, IdOf, SubmissionController, SubmitStart,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct FormViewModel<F>
where
    F: EntityForm + 'static,
    IdOf<F>: Send + Sync,
{
    pub controller: RwSignal<SubmissionController<F>>,
    pub loading: RwSignal<bool>,
}

impl<F> Clone for FormViewModel<F>
where
    F: EntityForm + 'static,
    IdOf<F>: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<F> Copy for FormViewModel<F>
where
    F: EntityForm + 'static,
    IdOf<F>: Send + Sync,
{
}

impl<F> FormViewModel<F>
where
    F: EntityForm + 'static,
    IdOf<F>: Send + Sync,
{
    pub fn new(mode: FormMode<IdOf<F>>) -> Self {
        let controller = RwSignal::new(SubmissionController::<F>::new(mode));
        on_cleanup(move || {
            controller.try_update(|c| c.cancel());
        });
        Self {
            controller,
            loading: RwSignal::new(false),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.controller.with_untracked(|c| c.mode().is_edit())
    }

    /// Fetch the record being edited and hand its draft to `on_loaded`
    pub fn load(&self, on_loaded: impl FnOnce(FormDraft) + 'static) {
        let FormMode::Edit(id) = self.controller.with_untracked(|c| c.mode()) else {
            return;
        };
        let controller = self.controller;
        let loading = self.loading;
        loading.set(true);
        spawn_local(async move {
            let client = api_client();
            let result = client.fetch::<F::Entity>(id).await;
            if loading.try_set(false).is_some() {
                return;
            }
            match result {
                Ok(record) => on_loaded(F::draft_from(&record)),
                Err(err) => {
                    controller.try_update(|c| c.load_failed(&err));
                }
            }
        });
    }

    /// Validate `draft` and send it when it passes
    pub fn submit(&self, draft: FormDraft) {
        let controller = self.controller;
        let start = controller.try_update(|c| c.begin(&draft, today()));
        let Some(SubmitStart::Ready { ticket, request }) = start else {
            return;
        };
        log::debug!(
            "{}: {} {}",
            <F::Entity as Entity>::collection_name(),
            request.method.as_str(),
            request.path
        );
        spawn_local(async move {
            let client = api_client();
            let result = client
                .write(request.method, &request.path, &request.payload)
                .await;
            controller.try_update(|c| c.finish(ticket, result));
        });
    }

    pub fn is_in_flight(&self) -> bool {
        self.controller.with(|c| c.is_in_flight())
    }

    /// Inline hint of an invalid field
    pub fn hint(&self, field: &'static str) -> Option<&'static str> {
        self.controller.with(|c| c.hint(field))
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.controller.with(|c| c.dialog().cloned())
    }

    /// Close the dialog; returns the route to navigate to after a success
    pub fn dismiss_dialog(&self) -> Option<String> {
        self.controller.try_update(|c| c.dismiss_dialog()).flatten()
    }
}
