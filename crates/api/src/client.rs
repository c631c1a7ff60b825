// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Typed calls against the API.
//!
//! The client turns resources into requests and responses into typed
//! results. It never touches view state except through
//! [`ApiClient::refresh`], which replaces a store's snapshot wholesale.

use helpdesk_console::CollectionStore;
use helpdesk_domain::EntityId;
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::resource::{Deletable, Editable, Resource};
use crate::transport::{ApiRequest, ApiResponse, ApiTransport, HttpMethod};

/// Typed API client over a transport.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    transport: T,
}

impl<T: ApiTransport + Sync> ApiClient<T> {
    /// Creates a client.
    #[must_use]
    pub const fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Returns the underlying transport.
    #[must_use]
    pub const fn transport(&self) -> &T {
        &self.transport
    }

    /// Fetches a whole collection.
    ///
    /// # Arguments
    ///
    /// * `query` - Filter parameters appended to the list URL
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Network`, `ApiError::Validation` or
    /// `ApiError::Server` (including for a body that is not a list of the
    /// expected shape).
    pub async fn list<R: Resource>(
        &self,
        query: &[(&str, String)],
    ) -> Result<Vec<R::Entity>, ApiError> {
        let request: ApiRequest = R::KIND
            .collection_request(HttpMethod::Get)
            .with_query(query);
        let response: ApiResponse = self.execute(request).await?;
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Server {
            status: Some(response.status),
            message: format!("Malformed {} list: {e}", R::KIND),
        })
    }

    /// Creates an entity.
    ///
    /// The response body is not decoded; the caller refreshes instead.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the POST.
    pub async fn create<R: Resource>(&self, payload: &R::Create) -> Result<(), ApiError> {
        let request: ApiRequest = R::KIND
            .collection_request(HttpMethod::Post)
            .with_body(encode(payload)?);
        self.execute(request).await.map(|_| ())
    }

    /// Updates an entity with the resource's update method.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the PUT or PATCH.
    pub async fn update<R: Editable>(
        &self,
        id: &EntityId,
        payload: &R::Update,
    ) -> Result<(), ApiError> {
        let request: ApiRequest = R::KIND
            .item_request(R::UPDATE_METHOD, id)
            .with_body(encode(payload)?);
        self.execute(request).await.map(|_| ())
    }

    /// Deletes an entity.
    ///
    /// # Errors
    ///
    /// Returns the classified failure of the DELETE.
    pub async fn delete<R: Deletable>(&self, id: &EntityId) -> Result<(), ApiError> {
        let request: ApiRequest = R::KIND.item_request(HttpMethod::Delete, id);
        self.execute(request).await.map(|_| ())
    }

    /// Refetches a collection into `store`.
    ///
    /// The store shows `Loading` (with its old snapshot) while the call is
    /// in flight, then either the new list or an empty `Failed` state.
    ///
    /// # Errors
    ///
    /// Returns the list failure after recording it in the store.
    pub async fn refresh<R: Resource>(
        &self,
        store: &mut CollectionStore<R::Entity>,
        query: &[(&str, String)],
    ) -> Result<(), ApiError> {
        store.begin_refresh();
        match self.list::<R>(query).await {
            Ok(items) => {
                store.complete_refresh(items);
                Ok(())
            }
            Err(err) => {
                store.fail_refresh(err.operator_message(&format!("loading {}", R::KIND)));
                Err(err)
            }
        }
    }

    /// Sends a request and rejects non-2xx responses.
    async fn execute(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let method: HttpMethod = request.method;
        let path: String = request.path();
        let response: ApiResponse = self.transport.send(request).await.map_err(|err| {
            warn!(%method, %path, error = %err, "API request did not complete");
            ApiError::from(err)
        })?;

        if response.is_success() {
            debug!(%method, %path, status = response.status, "API request succeeded");
            Ok(response)
        } else {
            let err: ApiError = ApiError::from_status(&response);
            warn!(%method, %path, status = response.status, error = %err, "API request rejected");
            Err(err)
        }
    }
}

fn encode<P: Serialize>(payload: &P) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(payload).map_err(|e| ApiError::Internal {
        message: format!("Failed to encode payload: {e}"),
    })
}
