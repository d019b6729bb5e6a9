//! `dprompt questions`: view and edit the configured prompts.

use dailyprompt_core::config::loader::{default_config_path, ConfigLoader};
use dailyprompt_core::config::types::ConfigFile;
use dailyprompt_core::prompts::{FieldType, Question};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tabled::{settings::Style, Table, Tabled};

use crate::QuestionsCommand;

#[derive(Serialize)]
struct QuestionJson<'a> {
    index: usize,
    text: &'a str,
    field: FieldType,
}

#[derive(Tabled)]
struct QuestionRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Question")]
    text: String,
}

pub fn run(config: Option<&Path>, command: QuestionsCommand) {
    let path: PathBuf = config.map_or_else(default_config_path, Path::to_path_buf);

    let mut cf = match ConfigLoader::load_file(&path) {
        Ok(cf) => cf,
        Err(e) => fail("questions", e),
    };

    match command {
        QuestionsCommand::List { json } => list(&cf, json),
        QuestionsCommand::Add { text, field } => {
            let field = parse_field("questions add", &field);
            let text = non_empty("questions add", &text);
            cf.prompt.questions.push(Question::new(text, field));
            save(&cf, &path, "questions add");
            println!("added question {}", cf.prompt.questions.len());
        }
        QuestionsCommand::Remove { index } => {
            let i = position("questions remove", &cf, index);
            let removed = cf.prompt.questions.remove(i);
            save(&cf, &path, "questions remove");
            println!("removed: {}", removed.text);
        }
        QuestionsCommand::Edit { index, text, field } => {
            if text.is_none() && field.is_none() {
                fail("questions edit", "nothing to change: pass --text and/or --field");
            }
            let i = position("questions edit", &cf, index);
            let field = field.map(|f| parse_field("questions edit", &f));
            let text = text.map(|t| non_empty("questions edit", &t));

            let question = &mut cf.prompt.questions[i];
            if let Some(text) = text {
                question.text = text;
            }
            if let Some(field) = field {
                question.field = field;
            }
            save(&cf, &path, "questions edit");
            println!("updated question {index}");
        }
    }
}

fn list(cf: &ConfigFile, json: bool) {
    let questions = &cf.prompt.questions;

    if json {
        let out: Vec<QuestionJson<'_>> = questions
            .iter()
            .enumerate()
            .map(|(i, q)| QuestionJson { index: i + 1, text: &q.text, field: q.field })
            .collect();
        match serde_json::to_string_pretty(&out) {
            Ok(s) => println!("{s}"),
            Err(e) => fail("questions list", e),
        }
        return;
    }

    if questions.is_empty() {
        println!("(no questions configured)");
        return;
    }

    let rows: Vec<QuestionRow> = questions
        .iter()
        .enumerate()
        .map(|(i, q)| QuestionRow {
            index: i + 1,
            field: q.field.to_string(),
            text: q.text.clone(),
        })
        .collect();

    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{table}");
}

fn parse_field(cmd: &str, value: &str) -> FieldType {
    value.parse().unwrap_or_else(|e| fail(cmd, e))
}

fn non_empty(cmd: &str, text: &str) -> String {
    let text = text.trim();
    if text.is_empty() {
        fail(cmd, "question text must not be empty");
    }
    text.to_string()
}

/// Map a 1-based position to an index into the question list.
fn position(cmd: &str, cf: &ConfigFile, index: usize) -> usize {
    let count = cf.prompt.questions.len();
    if index == 0 || index > count {
        fail(cmd, format!("no question {index} (there are {count})"));
    }
    index - 1
}

fn save(cf: &ConfigFile, path: &Path, cmd: &str) {
    if let Err(e) = cf.save(path) {
        fail(cmd, e);
    }
}

fn fail(cmd: &str, e: impl std::fmt::Display) -> ! {
    println!("FAIL dprompt {cmd}");
    println!("{e}");
    std::process::exit(1);
}
