use anyhow::Result;

use flashsprint::cards::Card;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let cards = app.engine.list_all();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
        OutputFormat::Plain => {
            if cards.is_empty() {
                println!("No cards.");
                return Ok(());
            }

            for card in &cards {
                println!("{}", render_line(card));
            }

            println!("\n{} cards total", cards.len());
        }
    }

    Ok(())
}

fn render_line(card: &Card) -> String {
    let tags = if card.tags.is_empty() {
        "-".to_string()
    } else {
        card.tags.join(", ")
    };
    format!(
        "#{:<4} {} | tags: {} | tier={} due_in={}",
        card.id,
        truncate(&card.question, 60),
        tags,
        card.tier,
        card.due_counter,
    )
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    }
}
