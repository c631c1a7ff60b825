// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Create, update and delete with refresh-after-mutation.
//!
//! Every write follows the same shape:
//!
//! 1. Validate the draft locally (no call on failure)
//! 2. Ask for confirmation if the write is destructive
//! 3. Dispatch the write
//! 4. On success: reset the draft or close the dialog, publish a success
//!    notice, and refetch the owning collection in full
//! 5. On failure: keep the draft, publish an error notice, leave the
//!    collection untouched
//!
//! The store is never patched locally. A refresh that fails after a
//! successful write is reported on its own; the write still counts as
//! applied.

use helpdesk_console::{
    CollectionStore, Confirmation, ModalSession, Notice, NoticeBus, SessionError, Submission,
};
use helpdesk_domain::EntityId;
use tracing::{error, info};

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::resource::{Deletable, Editable, Resource};
use crate::transport::ApiTransport;

/// Result of a write that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The server accepted the write.
    Applied,
    /// The operator declined the confirmation; nothing was sent.
    Declined,
}

/// Performs writes on behalf of a page.
#[derive(Debug)]
pub struct MutationCoordinator<'a, T, C> {
    client: &'a ApiClient<T>,
    confirmation: &'a C,
    notices: &'a NoticeBus,
}

impl<'a, T, C> MutationCoordinator<'a, T, C>
where
    T: ApiTransport + Sync,
    C: Confirmation + Sync,
{
    /// Binds a coordinator to its collaborators.
    #[must_use]
    pub const fn new(client: &'a ApiClient<T>, confirmation: &'a C, notices: &'a NoticeBus) -> Self {
        Self {
            client,
            confirmation,
            notices,
        }
    }

    /// Refetches a collection, reporting a failure to the operator.
    ///
    /// # Errors
    ///
    /// Returns the list failure; the store is left empty and `Failed`.
    pub async fn refresh<R: Resource>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        query: &[(&str, String)],
    ) -> Result<(), ApiError> {
        let result: Result<(), ApiError> = self.client.refresh::<R>(store, query).await;
        if let Err(err) = &result {
            self.report(err, &format!("loading {}", R::KIND));
        }
        result
    }

    /// Submits a create form.
    ///
    /// The draft is reset to empty only on success; on any failure it is
    /// left as the operator typed it.
    ///
    /// # Arguments
    ///
    /// * `store` - The collection to refresh afterwards
    /// * `draft` - The form state
    /// * `query` - Filter to apply to the refresh
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidDraft` without any call if a required
    /// field is empty, or the classified failure of the POST.
    pub async fn create<R: Resource>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        draft: &mut R::Draft,
        query: &[(&str, String)],
    ) -> Result<MutationOutcome, ApiError> {
        let action: String = format!("creating {}", R::KIND.singular());
        let dispatched: Result<(), ApiError> = match R::create_payload(draft) {
            Ok(payload) => self.client.create::<R>(&payload).await,
            Err(err) => Err(ApiError::from(err)),
        };
        if let Err(err) = dispatched {
            self.report(&err, &action);
            return Err(err);
        }

        *draft = R::Draft::default();
        self.applied::<R>(store, "created", query).await;
        Ok(MutationOutcome::Applied)
    }

    /// Submits a create dialog.
    ///
    /// On success the dialog closes; on failure it reopens with its draft
    /// and the error message.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` if the dialog is not open or already
    /// submitting, `ApiError::InvalidDraft` without any call if a required
    /// field is empty, or the classified failure of the POST.
    pub async fn submit_create<R: Resource>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        session: &mut ModalSession<R::Draft>,
        query: &[(&str, String)],
    ) -> Result<MutationOutcome, ApiError> {
        let action: String = format!("creating {}", R::KIND.singular());
        let submission: Submission<R::Draft> = self.begin(session, &action)?;
        let dispatched: Result<(), ApiError> = match R::create_payload(&submission.draft) {
            Ok(payload) => self.client.create::<R>(&payload).await,
            Err(err) => Err(ApiError::from(err)),
        };
        self.settle::<R>(store, session, dispatched, &action, "created", query)
            .await
    }

    /// Submits an edit dialog against its target entity.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` if the dialog is not open, already
    /// submitting or has no target, `ApiError::InvalidDraft` without any
    /// call if a required field is empty, or the classified failure of the
    /// PUT or PATCH.
    pub async fn submit_update<R: Editable>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        session: &mut ModalSession<R::Draft>,
        query: &[(&str, String)],
    ) -> Result<MutationOutcome, ApiError> {
        let action: String = format!("updating {}", R::KIND.singular());
        let submission: Submission<R::Draft> = self.begin(session, &action)?;
        let dispatched: Result<(), ApiError> = match (
            submission.target.as_ref(),
            R::update_payload(&submission.draft),
        ) {
            (None, _) => Err(ApiError::Session(SessionError::MissingTarget)),
            (Some(_), Err(err)) => Err(ApiError::from(err)),
            (Some(id), Ok(payload)) => self.client.update::<R>(id, &payload).await,
        };
        self.settle::<R>(store, session, dispatched, &action, "updated", query)
            .await
    }

    /// Deletes an entity after the operator confirms.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the DELETE. The collection is not
    /// refreshed on failure, so the entity remains listed.
    pub async fn delete<R: Deletable>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        id: &EntityId,
        query: &[(&str, String)],
    ) -> Result<MutationOutcome, ApiError> {
        let prompt: String = format!(
            "Are you sure you want to delete this {}? This action cannot be undone.",
            R::KIND.singular()
        );
        if !self.confirmation.confirm(&prompt).await {
            info!(resource = %R::KIND, %id, "Delete declined");
            return Ok(MutationOutcome::Declined);
        }

        if let Err(err) = self.client.delete::<R>(id).await {
            self.report(&err, &format!("deleting {}", R::KIND.singular()));
            return Err(err);
        }

        info!(resource = %R::KIND, %id, "Deleted");
        self.applied::<R>(store, "deleted", query).await;
        Ok(MutationOutcome::Applied)
    }

    fn begin<D: Clone>(
        &self,
        session: &mut ModalSession<D>,
        action: &str,
    ) -> Result<Submission<D>, ApiError> {
        session.begin_submit().map_err(|err| {
            let err: ApiError = ApiError::from(err);
            self.report(&err, action);
            err
        })
    }

    async fn settle<R: Resource>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        session: &mut ModalSession<R::Draft>,
        dispatched: Result<(), ApiError>,
        action: &str,
        verb: &str,
        query: &[(&str, String)],
    ) -> Result<MutationOutcome, ApiError> {
        match dispatched {
            Ok(()) => {
                session.submit_succeeded();
                self.applied::<R>(store, verb, query).await;
                Ok(MutationOutcome::Applied)
            }
            Err(err) => {
                let message: String = err.operator_message(action);
                session.submit_failed(message.clone());
                error!(resource = %R::KIND, error = %err, "{action} failed");
                self.notices.publish(Notice::error(message));
                Err(err)
            }
        }
    }

    async fn applied<R: Resource>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        verb: &str,
        query: &[(&str, String)],
    ) {
        self.notices
            .publish(Notice::success(format!("{} {verb}", R::KIND.title())));
        // The write stands even if this refresh fails.
        let _ = self.refresh::<R>(store, query).await;
    }

    fn report(&self, err: &ApiError, action: &str) {
        error!(error = %err, "{action} failed");
        self.notices.publish(Notice::error(err.operator_message(action)));
    }
}
