// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::future::Future;

/// Asks the operator a yes/no question before a destructive action.
///
/// Implementations must resolve to `false` on any failure to obtain an
/// answer; only an explicit "yes" allows the action to proceed.
pub trait Confirmation {
    /// Presents `prompt` and resolves to the operator's decision.
    fn confirm(&self, prompt: &str) -> impl Future<Output = bool> + Send;
}

/// Confirms every prompt without asking.
///
/// For non-interactive use where the operator has already agreed up front
/// (e.g. a `--yes` flag).
#[derive(Debug, Clone, Copy, Default)]
pub struct AutoConfirm;

impl Confirmation for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}
