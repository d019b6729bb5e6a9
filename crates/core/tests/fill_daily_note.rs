use chrono::NaiveDate;
use dailyprompt_core::daily::DailyNotes;
use dailyprompt_core::fill::{FillError, FillRequest, fill_daily_note};
use dailyprompt_core::markdown::RewriteOutcome;
use dailyprompt_core::prompts::{FieldType, PromptSettings, Question, RenderError};
use dailyprompt_core::store::{FsNoteStore, MemoryNoteStore, NoteStore};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 2).unwrap()
}

fn settings() -> PromptSettings {
    PromptSettings {
        questions: vec![
            Question::new("Grateful for", FieldType::Text),
            Question::new("Energy", FieldType::Slider),
            Question::new("Exercised", FieldType::Checkbox),
        ],
        ..PromptSettings::default()
    }
}

fn request(answers: &[&str], dry_run: bool) -> FillRequest {
    FillRequest {
        date: date(),
        answers: answers.iter().map(|s| s.to_string()).collect(),
        dry_run,
    }
}

#[test]
fn fill_replaces_existing_section() {
    let store = MemoryNoteStore::new().with_note(
        "Daily/2025-01-02.md",
        "# 2025-01-02\n\n## Prompts\nold stuff\n\n## Log\n- standup\n",
    );
    let daily = DailyNotes::new("Daily", "%Y-%m-%d", None).unwrap();

    let report =
        fill_daily_note(&store, &daily, &settings(), &request(&["tea", " 70 ", "yes"], false))
            .unwrap();

    assert!(!report.created);
    assert!(matches!(report.outcome, RewriteOutcome::Replaced(_)));
    let expected = "# 2025-01-02\n\n## Prompts\n**Grateful for**\ntea\n\n**Energy**\n70\n\n**Exercised**\nYes\n\n## Log\n- standup\n";
    assert_eq!(report.content, expected);
    assert_eq!(store.get(Path::new("Daily/2025-01-02.md")).unwrap(), expected);
}

#[test]
fn fill_creates_missing_note_and_appends_section() {
    let store = MemoryNoteStore::new();
    let daily = DailyNotes::new("Daily", "%Y-%m-%d", None).unwrap();

    let report =
        fill_daily_note(&store, &daily, &settings(), &request(&["tea", "50", "no"], false))
            .unwrap();

    assert!(report.created);
    assert_eq!(report.note, PathBuf::from("Daily/2025-01-02.md"));
    assert_eq!(report.outcome, RewriteOutcome::Appended { heading_line: 1 });
    assert!(report.content.starts_with("\n## Prompts\n**Grateful for**\ntea\n"));
    assert!(store.exists(Path::new("Daily/2025-01-02.md")));
}

#[test]
fn second_fill_replaces_first() {
    let store = MemoryNoteStore::new().with_note("2025-01-02.md", "# Thursday\n");
    let daily = DailyNotes::new("", "%Y-%m-%d", None).unwrap();

    fill_daily_note(&store, &daily, &settings(), &request(&["tea", "10", "no"], false)).unwrap();
    let report =
        fill_daily_note(&store, &daily, &settings(), &request(&["coffee", "90", "yes"], false))
            .unwrap();

    assert!(matches!(report.outcome, RewriteOutcome::Replaced(_)));
    let text = store.get(Path::new("2025-01-02.md")).unwrap();
    assert_eq!(text.matches("## Prompts").count(), 1);
    assert!(text.contains("coffee"));
    assert!(!text.contains("tea"));
}

#[test]
fn dry_run_neither_creates_nor_writes() {
    let store = MemoryNoteStore::new();
    let daily = DailyNotes::new("", "%Y-%m-%d", None).unwrap();

    let report =
        fill_daily_note(&store, &daily, &settings(), &request(&["a", "1", "no"], true)).unwrap();

    assert!(report.created);
    assert!(report.content.contains("**Energy**\n1\n"));
    assert!(!store.exists(Path::new("2025-01-02.md")));
}

#[test]
fn wrong_answer_count_fails_before_touching_note() {
    let store = MemoryNoteStore::new();
    let daily = DailyNotes::new("", "%Y-%m-%d", None).unwrap();

    let err =
        fill_daily_note(&store, &daily, &settings(), &request(&["only one"], false)).unwrap_err();
    assert!(matches!(
        err,
        FillError::Render(RenderError::AnswerCountMismatch { expected: 3, got: 1 })
    ));
    assert!(!store.exists(Path::new("2025-01-02.md")));
}

#[test]
fn invalid_slider_answer_fails() {
    let store = MemoryNoteStore::new();
    let daily = DailyNotes::new("", "%Y-%m-%d", None).unwrap();

    let err = fill_daily_note(&store, &daily, &settings(), &request(&["a", "500", "no"], false))
        .unwrap_err();
    assert!(matches!(err, FillError::Render(RenderError::InvalidAnswer { .. })));
}

#[test]
fn fill_writes_through_filesystem_store() {
    let tmp = tempdir().unwrap();
    let vault = tmp.path();
    fs::create_dir_all(vault.join("templates")).unwrap();
    fs::write(vault.join("templates/daily.md"), "# {{title}}\n\n## Log\n").unwrap();

    let store = FsNoteStore::new(vault);
    let daily = DailyNotes::new(
        vault.join("Journal"),
        "%Y-%m-%d",
        Some(vault.join("templates/daily.md")),
    )
    .unwrap();

    let report =
        fill_daily_note(&store, &daily, &settings(), &request(&["sun", "80", "true"], false))
            .unwrap();

    assert!(report.created);
    let text = fs::read_to_string(vault.join("Journal/2025-01-02.md")).unwrap();
    assert_eq!(
        text,
        "# 2025-01-02\n\n## Log\n\n## Prompts\n**Grateful for**\nsun\n\n**Energy**\n80\n\n**Exercised**\nYes\n\n"
    );
}
