// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use helpdesk_console::{AutoConfirm, Confirmation};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::warn;

/// Asks on the terminal.
///
/// The prompt goes to stderr so it never mixes with listed output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinConfirmation;

impl Confirmation for StdinConfirmation {
    async fn confirm(&self, prompt: &str) -> bool {
        let mut stderr = tokio::io::stderr();
        let mut stdin = BufReader::new(tokio::io::stdin());
        ask(prompt, &mut stderr, &mut stdin).await
    }
}

/// Writes the question, then reads one answer line.
///
/// The answer is not read unless the question was fully written and
/// flushed; any I/O failure counts as "no".
async fn ask<W, R>(prompt: &str, writer: &mut W, reader: &mut R) -> bool
where
    W: AsyncWrite + Unpin + Send,
    R: AsyncBufRead + Unpin + Send,
{
    let question: String = format!("{prompt} [y/N] ");
    if let Err(err) = writer.write_all(question.as_bytes()).await {
        warn!(error = %err, "Could not write confirmation prompt");
        return false;
    }
    if let Err(err) = writer.flush().await {
        warn!(error = %err, "Could not flush confirmation prompt");
        return false;
    }

    let mut answer: String = String::new();
    match reader.read_line(&mut answer).await {
        Ok(_) => is_affirmative(&answer),
        Err(err) => {
            warn!(error = %err, "Could not read confirmation answer");
            false
        }
    }
}

/// Only an explicit yes counts.
fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

/// The confirmation source chosen on the command line.
#[derive(Debug, Clone, Copy)]
pub enum Confirmer {
    /// `--yes` was given.
    Auto(AutoConfirm),
    /// Ask on the terminal.
    Stdin(StdinConfirmation),
}

impl Confirmer {
    /// Picks the source for the `--yes` flag.
    #[must_use]
    pub const fn from_flag(assume_yes: bool) -> Self {
        if assume_yes {
            Self::Auto(AutoConfirm)
        } else {
            Self::Stdin(StdinConfirmation)
        }
    }
}

impl Confirmation for Confirmer {
    async fn confirm(&self, prompt: &str) -> bool {
        match self {
            Self::Auto(auto) => auto.confirm(prompt).await,
            Self::Stdin(stdin) => stdin.confirm(prompt).await,
        }
    }
}
