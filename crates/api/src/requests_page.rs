// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The request list with its date filter and the "new informe" dialog.

use helpdesk_console::{CollectionStore, Confirmation, InformeReferences, ModalSession};
use helpdesk_domain::{
    DateRange, Department, FilterError, Request, RequestDraft, User, validate_date_range,
};
use tracing::warn;

use crate::console::Console;
use crate::coordinator::MutationOutcome;
use crate::error::{ApiError, filter_message};
use crate::resource::{Departments, Requests, Users};
use crate::transport::ApiTransport;

/// View state of the request list page.
#[derive(Debug)]
pub struct RequestsPage<'c, T, C> {
    console: &'c Console<T, C>,
    requests: CollectionStore<Request>,
    start_date: String,
    end_date: String,
    filter_error: Option<FilterError>,
    /// The last range that passed validation; used for refreshes after a
    /// write.
    active_range: DateRange,
    informe: ModalSession<RequestDraft>,
    references: InformeReferences,
}

impl<'c, T, C> RequestsPage<'c, T, C>
where
    T: ApiTransport + Sync,
    C: Confirmation + Sync,
{
    /// Creates the page with an empty list and no filter.
    #[must_use]
    pub fn new(console: &'c Console<T, C>) -> Self {
        Self {
            console,
            requests: CollectionStore::new("requests"),
            start_date: String::new(),
            end_date: String::new(),
            filter_error: None,
            active_range: DateRange::unbounded(),
            informe: ModalSession::new(),
            references: InformeReferences::default(),
        }
    }

    /// Returns the request store.
    #[must_use]
    pub const fn requests(&self) -> &CollectionStore<Request> {
        &self.requests
    }

    /// Returns the raw start date input.
    #[must_use]
    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    /// Returns the raw end date input.
    #[must_use]
    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    /// Returns why the current filter inputs were refused, if they were.
    #[must_use]
    pub const fn filter_error(&self) -> Option<&FilterError> {
        self.filter_error.as_ref()
    }

    /// Returns the operator-facing text for the current filter error.
    #[must_use]
    pub fn filter_message(&self) -> Option<String> {
        self.filter_error.as_ref().map(filter_message)
    }

    /// Returns the last range that passed validation.
    #[must_use]
    pub const fn active_range(&self) -> DateRange {
        self.active_range
    }

    /// Returns the informe dialog.
    #[must_use]
    pub const fn informe(&self) -> &ModalSession<RequestDraft> {
        &self.informe
    }

    /// Returns the choice lists loaded when the informe dialog opened.
    #[must_use]
    pub const fn references(&self) -> &InformeReferences {
        &self.references
    }

    /// Loads the list with the current filter.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_filters`].
    pub async fn load(&mut self) -> Result<(), ApiError> {
        self.apply_filters().await
    }

    /// Sets the start date input and re-applies the filter.
    ///
    /// An empty value clears the bound.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_filters`].
    pub async fn set_start_date(&mut self, value: &str) -> Result<(), ApiError> {
        self.start_date = value.to_string();
        self.apply_filters().await
    }

    /// Sets the end date input and re-applies the filter.
    ///
    /// An empty value clears the bound.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_filters`].
    pub async fn set_end_date(&mut self, value: &str) -> Result<(), ApiError> {
        self.end_date = value.to_string();
        self.apply_filters().await
    }

    /// Sets both date inputs and applies them with a single fetch.
    ///
    /// # Errors
    ///
    /// See [`Self::apply_filters`].
    pub async fn set_date_range(&mut self, start: &str, end: &str) -> Result<(), ApiError> {
        self.start_date = start.to_string();
        self.end_date = end.to_string();
        self.apply_filters().await
    }

    /// Validates the filter inputs and, if they pass, refetches the list.
    ///
    /// A refused filter clears the list without any call and is kept in
    /// [`Self::filter_error`] until the inputs change.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Filter` if the inputs are refused, or the list
    /// failure.
    pub async fn apply_filters(&mut self) -> Result<(), ApiError> {
        let validated = validate_date_range(Some(&*self.start_date), Some(&*self.end_date));
        match validated {
            Err(err) => {
                warn!(
                    start = %self.start_date,
                    end = %self.end_date,
                    error = %err,
                    "Filter refused"
                );
                self.requests.clear();
                self.filter_error = Some(err.clone());
                Err(ApiError::Filter(err))
            }
            Ok(range) => {
                self.filter_error = None;
                self.active_range = range;
                self.console
                    .coordinator()
                    .refresh::<Requests>(&mut self.requests, &range.query_pairs())
                    .await
            }
        }
    }

    /// Opens the informe dialog with an empty draft and fresh choice lists.
    ///
    /// Departments and users are fetched concurrently. A list that fails to
    /// load is left empty; the dialog still opens.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` while a submission is in flight.
    pub async fn open_informe(&mut self) -> Result<(), ApiError> {
        self.informe.open_create()?;

        let client = self.console.client();
        let (departments, users) = futures::join!(
            client.list::<Departments>(&[]),
            client.list::<Users>(&[])
        );
        let departments: Vec<Department> = departments.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load departments for the informe dialog");
            Vec::new()
        });
        let users: Vec<User> = users.unwrap_or_else(|err| {
            warn!(error = %err, "Failed to load technicians for the informe dialog");
            Vec::new()
        });

        self.references = InformeReferences::new(departments, &users);
        Ok(())
    }

    /// Returns the informe draft for editing while the dialog is open.
    pub fn informe_draft_mut(&mut self) -> Option<&mut RequestDraft> {
        self.informe.draft_mut()
    }

    /// Closes the informe dialog without sending anything.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session` while a submission is in flight.
    pub fn cancel_informe(&mut self) -> Result<(), ApiError> {
        self.informe.cancel()?;
        self.references = InformeReferences::default();
        Ok(())
    }

    /// Files the informe and refreshes the list with the active filter.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Session`, `ApiError::InvalidDraft` or the POST
    /// failure; the dialog stays open with its draft on any failure.
    pub async fn submit_informe(&mut self) -> Result<MutationOutcome, ApiError> {
        let query: Vec<(&'static str, String)> = self.active_range.query_pairs();
        let outcome: MutationOutcome = self
            .console
            .coordinator()
            .submit_create::<Requests>(&mut self.requests, &mut self.informe, &query)
            .await?;
        self.references = InformeReferences::default();
        Ok(outcome)
    }
}
