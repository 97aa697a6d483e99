use anyhow::Result;

use flashsprint::tags::normalize;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, tag: &str, format: &OutputFormat) -> Result<()> {
    let cards = app.engine.search_by_tag(tag);
    let display = normalize(tag).unwrap_or_else(|| tag.to_string());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
        OutputFormat::Plain => {
            if cards.is_empty() {
                println!("No cards found for tag '{}'", display);
                return Ok(());
            }

            println!("Cards tagged '{}':", display);
            for card in &cards {
                println!(
                    "#{:<4} Q: {} | tags: {} | tier={} due_in={}",
                    card.id,
                    card.question,
                    card.tags.join(", "),
                    card.tier,
                    card.due_counter,
                );
            }
        }
    }

    Ok(())
}
