//! Answer commands: list, show, create, update, delete.

use anyhow::Result;
use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;

use askboard_types::answer::{Answer, AnswerId, AnswersEnvelope};

use super::AnswerAction;
use super::input::{parse_params, read_json};
use crate::output::{print_json, print_outcome, truncate};
use crate::state::AppState;

pub async fn run(state: &AppState, action: AnswerAction, json: bool) -> Result<()> {
    let answers = &state.api.answers;

    match action {
        AnswerAction::List { params } => {
            let envelope = answers.list(&parse_params(&params)).await?;
            if json {
                print_json(&envelope)?;
            } else {
                print_table(&envelope);
            }
        }
        AnswerAction::Show { id } => {
            let answer = answers.details(&AnswerId::new(id)).await?;
            print_json(&answer)?;
        }
        AnswerAction::Create { file } => {
            let answer: Answer = read_json(&file).await?;
            let reply = answers.create(&answer).await?;
            print_outcome("Answer created", &reply, json)?;
        }
        AnswerAction::Update { file } => {
            let answer: Answer = read_json(&file).await?;
            let reply = answers.update(&answer).await?;
            print_outcome("Answer updated", &reply, json)?;
        }
        AnswerAction::Delete { id } => {
            let reply = answers.delete(&AnswerId::new(id)).await?;
            print_outcome("Answer deleted", &reply, json)?;
        }
    }

    Ok(())
}

fn print_table(envelope: &AnswersEnvelope) {
    if envelope.answers.is_empty() {
        println!();
        println!("  {} No answers found.", style("i").blue().bold());
        println!();
        return;
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("Id").fg(Color::White),
        Cell::new("Question").fg(Color::White),
        Cell::new("Answer").fg(Color::White),
    ]);

    for answer in &envelope.answers {
        table.add_row(vec![
            Cell::new(answer.id.as_ref().map(AnswerId::as_str).unwrap_or("-")).fg(Color::Cyan),
            Cell::new(answer.question_id().unwrap_or("")).fg(Color::DarkGrey),
            Cell::new(truncate(answer.body().unwrap_or(""), 60)),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} of {} answer{}",
        style(envelope.answers.len()).bold(),
        style(envelope.answer_count).bold(),
        if envelope.answer_count == 1 { "" } else { "s" }
    );
    println!();
}
