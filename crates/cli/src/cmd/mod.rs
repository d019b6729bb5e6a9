pub mod completions;
pub mod doctor;
pub mod fill;
pub mod questions;
pub mod show;

use chrono::{Duration, Local, NaiveDate};
use dailyprompt_core::config::types::ResolvedConfig;
use dailyprompt_core::daily::{DailyNoteError, DailyNotes};

/// Parse a `--date` value: `YYYY-MM-DD`, `today` or `yesterday`.
pub fn parse_date(value: Option<&str>) -> Result<NaiveDate, String> {
    let today = Local::now().date_naive();
    match value.map(str::trim) {
        None | Some("today") => Ok(today),
        Some("yesterday") => Ok(today - Duration::days(1)),
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| format!("invalid date '{s}': expected YYYY-MM-DD, today or yesterday")),
    }
}

pub fn daily_notes(cfg: &ResolvedConfig) -> Result<DailyNotes, DailyNoteError> {
    DailyNotes::new(&cfg.daily.folder, &cfg.daily.format, cfg.daily.template.clone())
}
