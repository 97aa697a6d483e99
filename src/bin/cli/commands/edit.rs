use anyhow::Result;

use flashsprint::tags::parse_tag_list;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    id: u64,
    question: Option<&str>,
    answer: Option<&str>,
    tags: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    // Unspecified flags keep the card's current values
    let current = app.engine.get_card(id)?;
    let question = question.unwrap_or(current.question.as_str());
    let answer = answer.unwrap_or(current.answer.as_str());
    let tags = match tags {
        Some(raw) => parse_tag_list(raw),
        None => current.tags.clone(),
    };

    let card = app.engine.edit_card(id, question, answer, &tags)?;
    app.save()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&card)?),
        OutputFormat::Plain => println!("Updated card #{}", card.id),
    }

    Ok(())
}
