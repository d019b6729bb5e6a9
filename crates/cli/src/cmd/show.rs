use dailyprompt_core::config::loader::ConfigLoader;
use dailyprompt_core::markdown::SectionEditor;
use dailyprompt_core::store::{FsNoteStore, NoteStore};
use std::path::Path;

use super::{daily_notes, parse_date};
use crate::ShowArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &ShowArgs) {
    let cfg = match ConfigLoader::load(config, profile) {
        Ok(rc) => rc,
        Err(e) => fail(e),
    };

    let date = match parse_date(args.date.as_deref()) {
        Ok(d) => d,
        Err(e) => fail(e),
    };

    let daily = match daily_notes(&cfg) {
        Ok(d) => d,
        Err(e) => fail(e),
    };

    let store = FsNoteStore::new(&cfg.vault_root);
    let note = match daily.find(&store, date) {
        Ok(Some(note)) => note,
        Ok(None) => match daily.path_for(date) {
            Ok(path) => fail(format!("no daily note for {date}: {}", path.display())),
            Err(e) => fail(e),
        },
        Err(e) => fail(e),
    };

    let text = match store.read(&note.path) {
        Ok(t) => t,
        Err(e) => fail(e),
    };

    match SectionEditor::section_content(&text, &cfg.prompt.heading) {
        Ok(Some(body)) => print!("{body}"),
        Ok(None) => fail(format!(
            "section '{}' not found in {}",
            cfg.prompt.heading.trim(),
            note.path.display()
        )),
        Err(e) => fail(e),
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    println!("FAIL dprompt show");
    println!("{e}");
    std::process::exit(1);
}
