//! Writing a set of answers into the day's note.
//!
//! Settings are loaded before and saved after by the caller; this module
//! only reads the note, rewrites the prompt section and writes it back.

use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::info;

use crate::daily::{DailyNoteError, DailyNotes};
use crate::markdown::{Document, RewriteOutcome, SectionError, rewrite_section};
use crate::prompts::{PromptSettings, RenderError, normalize_answers, render_answers};
use crate::store::{NoteStore, StoreError};

#[derive(Debug, Error)]
pub enum FillError {
    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Section(#[from] SectionError),

    #[error(transparent)]
    Daily(#[from] DailyNoteError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One fill invocation.
#[derive(Debug, Clone)]
pub struct FillRequest {
    pub date: NaiveDate,
    /// Raw answers, one per configured question, in order.
    pub answers: Vec<String>,
    /// Compute the result without creating or writing the note.
    pub dry_run: bool,
}

/// What a fill did.
#[derive(Debug, Clone)]
pub struct FillReport {
    pub note: PathBuf,
    /// The note did not exist before this fill (or would be created).
    pub created: bool,
    pub outcome: RewriteOutcome,
    /// Full text of the note after the rewrite.
    pub content: String,
}

/// Render `request.answers` and write them into the prompt section of the
/// daily note for `request.date`, creating the note if needed.
pub fn fill_daily_note(
    store: &dyn NoteStore,
    daily: &DailyNotes,
    settings: &PromptSettings,
    request: &FillRequest,
) -> Result<FillReport, FillError> {
    let answers = normalize_answers(&settings.questions, &request.answers)?;
    let block = render_answers(settings, &answers)?;

    let (note, created, existing) = if request.dry_run {
        match daily.find(store, request.date)? {
            Some(found) => {
                let text = store.read(&found.path)?;
                (found.path, false, text)
            }
            None => (daily.path_for(request.date)?, true, String::new()),
        }
    } else {
        let found = daily.get_or_create(store, request.date)?;
        let text = store.read(&found.path)?;
        (found.path, found.created, text)
    };

    let mut doc = Document::parse(&existing);
    let outcome = rewrite_section(&mut doc, &settings.heading, &block)?;
    let content = doc.render();

    if request.dry_run {
        info!(note = %note.display(), "dry run, note not written");
    } else {
        store.write(&note, &content)?;
        info!(note = %note.display(), answers = answers.len(), "prompt answers written");
    }

    Ok(FillReport { note, created, outcome, content })
}
