//! `dprompt fill`: answer the prompts and write them into the daily note.

use dailyprompt_core::config::loader::ConfigLoader;
use dailyprompt_core::config::types::ResolvedConfig;
use dailyprompt_core::fill::{fill_daily_note, FillRequest};
use dailyprompt_core::markdown::RewriteOutcome;
use dailyprompt_core::store::FsNoteStore;
use dailyprompt_core::vault::resolve_link;
use std::path::Path;
use tracing::{debug, warn};

use super::{daily_notes, parse_date};
use crate::prompt::{collect_answers, PromptOptions};
use crate::FillArgs;

pub fn run(config: Option<&Path>, profile: Option<&str>, args: &FillArgs) {
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

    let options = PromptOptions { batch_mode: args.batch };
    let answers =
        match collect_answers(&cfg.prompt.questions, &args.answers, &cfg.vault_root, &options) {
            Ok(a) => a,
            Err(e) => fail(e),
        };

    warn_unresolved_links(&cfg, &answers);

    let store = FsNoteStore::new(&cfg.vault_root);
    let request = FillRequest { date, answers, dry_run: args.dry_run };
    let report = match fill_daily_note(&store, &daily, &cfg.prompt, &request) {
        Ok(r) => r,
        Err(e) => fail(e),
    };

    if args.dry_run {
        print!("{}", report.content);
        return;
    }

    println!("OK   dprompt fill");
    println!("note: {}", report.note.display());
    if report.created {
        println!("created: yes");
    }
    match report.outcome {
        RewriteOutcome::Replaced(span) => {
            println!("section: replaced lines {}-{}", span.start + 1, span.end);
        }
        RewriteOutcome::Appended { heading_line } => {
            println!("section: appended at line {}", heading_line + 1);
        }
    }
}

/// Note-reference answers that match no file in the vault are still
/// written, but the user is told about them.
fn warn_unresolved_links(cfg: &ResolvedConfig, answers: &[String]) {
    for (question, answer) in cfg.prompt.questions.iter().zip(answers) {
        if !question.field.is_note_reference() {
            continue;
        }
        let Ok(target) = question.field.normalize(answer) else {
            continue;
        };
        if target.is_empty() {
            continue;
        }
        match resolve_link(&cfg.vault_root, &target) {
            Some(path) => {
                debug!(link = %target, path = %path.display(), "note reference resolved")
            }
            None => warn!(
                question = %question.text,
                link = %target,
                "note reference does not match any file in the vault"
            ),
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    println!("FAIL dprompt fill");
    println!("{e}");
    std::process::exit(1);
}
