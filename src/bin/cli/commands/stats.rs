use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let boxes = app.engine.box_stats();
    let stats = app.engine.review_stats();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "boxes": boxes
                    .iter()
                    .map(|(label, count)| serde_json::json!({
                        "label": label,
                        "count": count,
                    }))
                    .collect::<Vec<_>>(),
                "review": stats,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            for (label, count) in &boxes {
                println!("{:<12} {}", label, count);
            }
            println!();
            println!("{} cards, {} due now", stats.total_cards, stats.due_cards);
            println!(
                "{} reviews, {} correct",
                stats.total_reviews, stats.correct_reviews
            );
        }
    }

    Ok(())
}
