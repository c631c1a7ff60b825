// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_console::{Confirmation, NoticeBus};

use crate::client::ApiClient;
use crate::coordinator::MutationCoordinator;
use crate::transport::ApiTransport;

/// Shared collaborators of every page: the API client, the operator's
/// confirmation capability, and the notice channel.
///
/// Pages borrow a console; they own their stores and dialogs themselves.
#[derive(Debug)]
pub struct Console<T, C> {
    client: ApiClient<T>,
    confirmation: C,
    notices: NoticeBus,
}

impl<T, C> Console<T, C>
where
    T: ApiTransport + Sync,
    C: Confirmation + Sync,
{
    /// Creates a console with a fresh notice bus.
    #[must_use]
    pub fn new(transport: T, confirmation: C) -> Self {
        Self {
            client: ApiClient::new(transport),
            confirmation,
            notices: NoticeBus::new(),
        }
    }

    /// Returns the API client.
    #[must_use]
    pub const fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    /// Returns the confirmation capability.
    #[must_use]
    pub const fn confirmation(&self) -> &C {
        &self.confirmation
    }

    /// Returns the notice bus.
    #[must_use]
    pub const fn notices(&self) -> &NoticeBus {
        &self.notices
    }

    /// Returns a mutation coordinator bound to this console.
    #[must_use]
    pub const fn coordinator(&self) -> MutationCoordinator<'_, T, C> {
        MutationCoordinator::new(&self.client, &self.confirmation, &self.notices)
    }
}
