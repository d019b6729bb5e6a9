//! Date-keyed daily note lookup and creation.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use regex::Regex;
use thiserror::Error;
use tracing::info;

use crate::store::{NoteStore, StoreError};

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([a-zA-Z0-9_]+)\}\}").unwrap());

#[derive(Debug, Error)]
pub enum DailyNoteError {
    #[error("invalid daily note date format '{0}'")]
    InvalidFormat(String),

    #[error("failed to read daily note template {0}: {1}")]
    Template(String, #[source] StoreError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A resolved daily note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyNote {
    pub date: NaiveDate,
    pub path: PathBuf,
    /// Whether this lookup created the note.
    pub created: bool,
}

/// Where daily notes live and how new ones start.
#[derive(Debug, Clone)]
pub struct DailyNotes {
    folder: PathBuf,
    format: String,
    template: Option<PathBuf>,
}

impl DailyNotes {
    /// Fails if `format` is not a strftime pattern that can format a date.
    pub fn new(
        folder: impl Into<PathBuf>,
        format: impl Into<String>,
        template: Option<PathBuf>,
    ) -> Result<Self, DailyNoteError> {
        let format = format.into();
        validate_format(&format)?;
        Ok(Self { folder: folder.into(), format, template })
    }

    /// The note's file stem for `date`, e.g. `2025-01-02`.
    pub fn title_for(&self, date: NaiveDate) -> Result<String, DailyNoteError> {
        format_date(date, &self.format)
    }

    pub fn path_for(&self, date: NaiveDate) -> Result<PathBuf, DailyNoteError> {
        Ok(self.folder.join(format!("{}.md", self.title_for(date)?)))
    }

    /// Look up the note for `date` without creating it.
    pub fn find(
        &self,
        store: &dyn NoteStore,
        date: NaiveDate,
    ) -> Result<Option<DailyNote>, DailyNoteError> {
        let path = self.path_for(date)?;
        Ok(store.exists(&path).then_some(DailyNote { date, path, created: false }))
    }

    /// Look up the note for `date`, creating it from the template if missing.
    pub fn get_or_create(
        &self,
        store: &dyn NoteStore,
        date: NaiveDate,
    ) -> Result<DailyNote, DailyNoteError> {
        if let Some(note) = self.find(store, date)? {
            return Ok(note);
        }

        let path = self.path_for(date)?;
        let body = match &self.template {
            Some(template) => {
                let raw = store.read(template).map_err(|e| {
                    DailyNoteError::Template(template.display().to_string(), e)
                })?;
                render_template(&raw, &self.template_context(date)?)
            }
            None => String::new(),
        };

        store.write(&path, &body)?;
        info!(path = %path.display(), "created daily note");
        Ok(DailyNote { date, path, created: true })
    }

    fn template_context(&self, date: NaiveDate) -> Result<HashMap<String, String>, DailyNoteError> {
        let mut ctx = HashMap::new();
        ctx.insert("date".to_string(), format_date(date, DEFAULT_DATE_FORMAT)?);
        ctx.insert("title".to_string(), self.title_for(date)?);
        ctx.insert("time".to_string(), Local::now().format("%H:%M").to_string());
        Ok(ctx)
    }
}

/// Check that `format` formats a date without error.
pub fn validate_format(format: &str) -> Result<(), DailyNoteError> {
    let sample = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap_or_default();
    match format_date(sample, format) {
        Ok(s) if !s.trim().is_empty() => Ok(()),
        _ => Err(DailyNoteError::InvalidFormat(format.to_string())),
    }
}

fn format_date(date: NaiveDate, format: &str) -> Result<String, DailyNoteError> {
    let mut out = String::new();
    write!(out, "{}", date.format(format))
        .map_err(|_| DailyNoteError::InvalidFormat(format.to_string()))?;
    Ok(out)
}

/// Substitute `{{name}}` placeholders; unknown names are left untouched.
fn render_template(template: &str, ctx: &HashMap<String, String>) -> String {
    PLACEHOLDER_RE
        .replace_all(template, |caps: &regex::Captures<'_>| {
            let key = &caps[1];
            ctx.get(key).cloned().unwrap_or_else(|| caps[0].to_string())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryNoteStore;
    use std::path::Path;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
    }

    #[test]
    fn path_uses_folder_and_format() {
        let daily = DailyNotes::new("Journal/Daily", DEFAULT_DATE_FORMAT, None).unwrap();
        assert_eq!(daily.path_for(day()).unwrap(), PathBuf::from("Journal/Daily/2025-03-09.md"));
    }

    #[test]
    fn nested_format_produces_nested_path() {
        let daily = DailyNotes::new("", "%Y/%m/%Y-%m-%d", None).unwrap();
        assert_eq!(daily.path_for(day()).unwrap(), PathBuf::from("2025/03/2025-03-09.md"));
    }

    #[test]
    fn invalid_formats_are_rejected() {
        for format in ["%Q", "%H:%M", ""] {
            assert!(
                matches!(DailyNotes::new("", format, None), Err(DailyNoteError::InvalidFormat(_))),
                "accepted {format:?}"
            );
        }
    }

    #[test]
    fn existing_note_is_found_not_created() {
        let store = MemoryNoteStore::new().with_note("2025-03-09.md", "# Sunday\n");
        let daily = DailyNotes::new("", DEFAULT_DATE_FORMAT, None).unwrap();
        let note = daily.get_or_create(&store, day()).unwrap();
        assert!(!note.created);
        assert_eq!(store.get(Path::new("2025-03-09.md")).unwrap(), "# Sunday\n");
    }

    #[test]
    fn missing_note_is_created_from_template() {
        let store = MemoryNoteStore::new()
            .with_note("tpl/daily.md", "# {{title}}\n\nDate: {{date}} {{unknown}}\n");
        let daily =
            DailyNotes::new("days", "%d.%m.%Y", Some(PathBuf::from("tpl/daily.md"))).unwrap();

        let note = daily.get_or_create(&store, day()).unwrap();
        assert!(note.created);
        assert_eq!(note.path, PathBuf::from("days/09.03.2025.md"));
        assert_eq!(
            store.get(&note.path).unwrap(),
            "# 09.03.2025\n\nDate: 2025-03-09 {{unknown}}\n"
        );
    }

    #[test]
    fn missing_template_is_reported() {
        let store = MemoryNoteStore::new();
        let daily =
            DailyNotes::new("", DEFAULT_DATE_FORMAT, Some(PathBuf::from("missing.md"))).unwrap();
        assert!(matches!(
            daily.get_or_create(&store, day()),
            Err(DailyNoteError::Template(_, StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn find_does_not_create() {
        let store = MemoryNoteStore::new();
        let daily = DailyNotes::new("", DEFAULT_DATE_FORMAT, None).unwrap();
        assert_eq!(daily.find(&store, day()).unwrap(), None);
        assert!(!store.exists(Path::new("2025-03-09.md")));
    }
}
