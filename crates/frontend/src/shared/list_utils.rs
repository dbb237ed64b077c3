//! Reactive list state shared by the listing screens
//!
//! Wraps a [`ListController`] in a signal. Async results are applied with
//! `try_update`, so a result arriving after the screen was disposed is a
//! no-op, and `on_cleanup` cancels whatever is still outstanding.

use super::api_utils::api_client;
use contracts::domain::common::Entity;
use contracts::shared::dialog::Dialog;
use contracts::shared::list::{ListController, ListFilter, LoadState};
use leptos::prelude::*;
use leptos::task::spawn_local;

pub struct ListViewModel<E>
where
    E: Entity + Send + Sync + 'static,
    E::Id: Send + Sync,
{
    pub state: RwSignal<ListController<E>>,
}

impl<E> Clone for ListViewModel<E>
where
    E: Entity + Send + Sync + 'static,
    E::Id: Send + Sync,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ListViewModel<E>
where
    E: Entity + Send + Sync + 'static,
    E::Id: Send + Sync,
{
}

impl<E> ListViewModel<E>
where
    E: Entity + Send + Sync + 'static,
    E::Id: Send + Sync,
{
    /// Create the list state and start the initial fetch
    pub fn new() -> Self {
        let state = RwSignal::new(ListController::<E>::new());
        on_cleanup(move || {
            state.try_update(|c| c.cancel());
        });
        let vm = Self { state };
        vm.load();
        vm
    }

    pub fn load(&self) {
        let state = self.state;
        let Some(ticket) = state.try_update(|c| c.begin_load()) else {
            return;
        };
        spawn_local(async move {
            let client = api_client();
            let result = client.list::<E>().await;
            state.try_update(|c| c.finish_load(ticket, result));
        });
    }

    pub fn delete(&self, id: E::Id) {
        let state = self.state;
        let Some(Some(pending)) = state.try_update(|c| c.begin_delete(id)) else {
            return;
        };
        spawn_local(async move {
            let client = api_client();
            let result = client.delete::<E>(id).await;
            state.try_update(|c| c.finish_delete(pending, result));
        });
    }

    pub fn load_state(&self) -> LoadState {
        self.state.with(|c| c.state().clone())
    }

    pub fn items(&self) -> Vec<E> {
        self.state.with(|c| c.items().to_vec())
    }

    pub fn visible(&self, filter: &ListFilter<E>) -> Vec<E> {
        self.state.with(|c| c.visible(filter))
    }

    pub fn is_deleting(&self, id: E::Id) -> bool {
        self.state.with(|c| c.is_deleting(id))
    }

    pub fn dialog(&self) -> Option<Dialog> {
        self.state.with(|c| c.dialog().cloned())
    }

    pub fn dismiss_dialog(&self) {
        self.state.update(|c| c.dismiss_dialog());
    }
}
