//! Question commands: list, show, create, update, delete, attend, unattend.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use serde_json::{Map, Value};

use askboard_types::question::{Question, QuestionId, QuestionsEnvelope};

use super::QuestionAction;
use super::input::{parse_params, read_json};
use crate::output::{print_json, print_outcome};
use crate::state::AppState;

pub async fn run(state: &AppState, action: QuestionAction, json: bool) -> Result<()> {
    let questions = &state.api.questions;

    match action {
        QuestionAction::List { params } => {
            let envelope = questions.list(&parse_params(&params)).await?;
            if json {
                print_json(&envelope)?;
            } else {
                print_table(&envelope);
            }
        }
        QuestionAction::Show { id } => {
            let question = questions.details(&QuestionId::new(id)).await?;
            if json {
                print_json(&question)?;
            } else {
                print_question(&question)?;
            }
        }
        QuestionAction::Create { file } => {
            let question: Question = read_json(&file).await?;
            let reply = questions.create(&question).await?;
            print_outcome("Question created", &reply, json)?;
        }
        QuestionAction::Update { file } => {
            let question: Question = read_json(&file).await?;
            let reply = questions.update(&question).await?;
            print_outcome("Question updated", &reply, json)?;
        }
        QuestionAction::Delete { id } => {
            let reply = questions.delete(&QuestionId::new(id)).await?;
            print_outcome("Question deleted", &reply, json)?;
        }
        QuestionAction::Attend { id } => {
            let reply = questions.attend(&QuestionId::new(id)).await?;
            print_outcome("Attending question", &reply, json)?;
        }
        QuestionAction::Unattend { id } => {
            let reply = questions.unattend(&QuestionId::new(id)).await?;
            print_outcome("No longer attending question", &reply, json)?;
        }
    }

    Ok(())
}

fn print_table(envelope: &QuestionsEnvelope) {
    if envelope.questions.is_empty() {
        println!();
        println!("  {} No questions found.", style("i").blue().bold());
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Title").fg(Color::White),
        Cell::new("Category").fg(Color::White),
        Cell::new("Date").fg(Color::White),
    ]);

    for question in &envelope.questions {
        table.add_row(vec![
            Cell::new(question.id.as_ref().map(QuestionId::as_str).unwrap_or("-")).fg(Color::Cyan),
            Cell::new(question.title().unwrap_or("")),
            Cell::new(question.category().unwrap_or("")),
            Cell::new(question.date().unwrap_or("")).fg(Color::DarkGrey),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} of {} question{}",
        style(envelope.questions.len()).bold(),
        style(envelope.question_count).bold(),
        if envelope.question_count == 1 { "" } else { "s" }
    );
    println!();
}

/// Fields printed on their own line when they hold text.
const SHOWN_FIELDS: [&str; 4] = ["title", "description", "category", "date"];

fn print_question(question: &Question) -> Result<()> {
    println!();
    println!(
        "  {} {}",
        style(question.title().unwrap_or("(untitled)")).bold(),
        style(question.id.as_ref().map(QuestionId::as_str).unwrap_or("")).dim()
    );
    if let Some(description) = question.description() {
        println!();
        println!("  {description}");
    }
    if let Some(category) = question.category() {
        println!("  {} {}", style("category:").dim(), category);
    }
    if let Some(date) = question.date() {
        println!("  {} {}", style("date:").dim(), date);
    }
    let rest: Map<String, Value> = question
        .fields
        .iter()
        .filter(|(key, value)| {
            !(SHOWN_FIELDS.contains(&key.as_str()) && value.is_string())
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();
    if !rest.is_empty() {
        println!();
        println!("{}", serde_json::to_string_pretty(&Value::Object(rest))?);
    }
    println!();
    Ok(())
}
