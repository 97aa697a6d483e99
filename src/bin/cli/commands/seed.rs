use anyhow::Result;

use crate::app::App;
use crate::OutputFormat;

/// Starter cards for a fresh collection
const SAMPLE_CARDS: &[(&str, &str, &[&str])] = &[
    ("What is FIFO in queues?", "First In First Out", &["queue", "ds"]),
    (
        "How to handle collisions in hash map?",
        "Use chaining (linked lists) or open addressing",
        &["hashmap", "ds"],
    ),
    (
        "What is enqueue operation?",
        "Insert element at the tail of queue",
        &["queue", "srs"],
    ),
];

pub fn run(app: &mut App, format: &OutputFormat) -> Result<()> {
    let mut added = Vec::new();
    for (question, answer, tags) in SAMPLE_CARDS {
        let tags: Vec<String> = tags.iter().map(|t| t.to_string()).collect();
        added.push(app.engine.add_card(question, answer, &tags)?);
    }
    app.save()?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&added)?),
        OutputFormat::Plain => println!("Added {} sample cards", added.len()),
    }

    Ok(())
}
