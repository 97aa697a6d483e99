use anyhow::Result;

use flashsprint::tags::parse_tag_list;

use crate::app::App;
use crate::OutputFormat;

pub fn run(
    app: &mut App,
    question: &str,
    answer: &str,
    tags: Option<&str>,
    format: &OutputFormat,
) -> Result<()> {
    let tags = tags.map(parse_tag_list).unwrap_or_default();
    let card = app.engine.add_card(question, answer, &tags)?;
    app.save()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&card)?),
        OutputFormat::Plain => println!("Added card #{}", card.id),
    }

    Ok(())
}
