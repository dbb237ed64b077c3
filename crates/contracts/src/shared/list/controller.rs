//! Fetch-once collection state of a listing screen
//!
//! The collection is fetched whole on display and held locally. Deleting a
//! record removes it from the local copy only after the server confirmed
//! the delete; a failed delete leaves the list untouched and opens an error
//! dialog.

use super::ListFilter;
use crate::domain::common::Entity;
use crate::shared::api::{ApiClient, ApiError, HttpTransport};
use crate::shared::dialog::Dialog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Ready,
    /// Read failure; the screen shows this message instead of the list
    Failed(String),
}

/// Token tying an async result to the operation that started it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTicket(u64);

/// Delete awaiting server confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingDelete<Id> {
    pub ticket: ListTicket,
    pub id: Id,
}

#[derive(Debug, Clone)]
pub struct ListController<E: Entity> {
    items: Vec<E>,
    state: LoadState,
    dialog: Option<Dialog>,
    pending_delete: Option<PendingDelete<E::Id>>,
    load_generation: u64,
    delete_generation: u64,
}

impl<E: Entity> Default for ListController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Entity> ListController<E> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            state: LoadState::Loading,
            dialog: None,
            pending_delete: None,
            load_generation: 0,
            delete_generation: 0,
        }
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn dialog(&self) -> Option<&Dialog> {
        self.dialog.as_ref()
    }

    pub fn is_deleting(&self, id: E::Id) -> bool {
        self.pending_delete.map_or(false, |p| p.id == id)
    }

    /// Items passing `filter`
    pub fn visible(&self, filter: &ListFilter<E>) -> Vec<E>
    where
        E: 'static,
    {
        filter.apply(&self.items)
    }

    pub fn begin_load(&mut self) -> ListTicket {
        self.state = LoadState::Loading;
        self.pending_delete = None;
        self.load_generation += 1;
        ListTicket(self.load_generation)
    }

    /// Apply the fetched collection; returns `false` if the ticket is stale
    pub fn finish_load(&mut self, ticket: ListTicket, result: Result<Vec<E>, ApiError>) -> bool {
        if ticket.0 != self.load_generation {
            return false;
        }
        match result {
            Ok(items) => {
                log::debug!("{}: loaded {} records", E::collection_name(), items.len());
                self.items = items;
                self.state = LoadState::Ready;
            }
            Err(err) => {
                log::warn!("{}: load failed: {}", E::collection_name(), err);
                self.items.clear();
                self.state = LoadState::Failed(err.user_message(E::load_error_message()));
            }
        }
        true
    }

    /// Start deleting `id`; `None` while another delete is awaiting confirmation
    pub fn begin_delete(&mut self, id: E::Id) -> Option<PendingDelete<E::Id>> {
        if self.pending_delete.is_some() {
            log::debug!("{}: delete of {} suppressed", E::collection_name(), id);
            return None;
        }
        self.delete_generation += 1;
        let pending = PendingDelete {
            ticket: ListTicket(self.delete_generation),
            id,
        };
        self.pending_delete = Some(pending);
        Some(pending)
    }

    /// Apply the server answer to a delete; returns `false` if it is stale
    pub fn finish_delete(
        &mut self,
        pending: PendingDelete<E::Id>,
        result: Result<Option<String>, ApiError>,
    ) -> bool {
        if self.pending_delete != Some(pending) || pending.ticket.0 != self.delete_generation {
            return false;
        }
        self.pending_delete = None;
        match result {
            Ok(_) => {
                self.items.retain(|item| item.id() != pending.id);
                log::debug!("{}: deleted {}", E::collection_name(), pending.id);
            }
            Err(err) => {
                log::warn!("{}: delete of {} failed: {}", E::collection_name(), pending.id, err);
                self.dialog = Some(Dialog::error(err.user_message(&E::delete_error_message())));
            }
        }
        true
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog = None;
    }

    /// Drop any outstanding operation (the screen is going away)
    pub fn cancel(&mut self) {
        self.load_generation += 1;
        self.delete_generation += 1;
        self.pending_delete = None;
    }

    /// Fetch the whole collection through `client`
    pub async fn load<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        let ticket = self.begin_load();
        let result = client.list::<E>().await;
        self.finish_load(ticket, result);
    }

    /// Delete one record through `client`
    pub async fn delete<T: HttpTransport>(&mut self, client: &ApiClient<T>, id: E::Id) {
        if let Some(pending) = self.begin_delete(id) {
            let result = client.delete::<E>(id).await;
            self.finish_delete(pending, result);
        }
    }
}
