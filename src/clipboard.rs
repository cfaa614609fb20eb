// SPDX-License-Identifier: MPL-2.0
//! Asynchronous clipboard writes.
//!
//! The write itself is a blocking platform call, so it runs on the blocking
//! pool and resolves to a `Result` that the update loop turns into a success
//! or error notification. Failures never propagate past that notification.

use crate::error::{Error, Result};

/// Copies `text` to the system clipboard.
pub async fn copy(text: String) -> Result<()> {
    match tokio::task::spawn_blocking(move || write_text(&text)).await {
        Ok(result) => result,
        Err(join_error) => Err(Error::Clipboard(join_error.to_string())),
    }
}

fn write_text(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(text.to_owned())?;
    Ok(())
}
