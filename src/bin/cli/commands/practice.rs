use std::io::{self, BufRead, Write};

use anyhow::Result;

use flashsprint::review::NextCard;

use crate::app::App;

pub fn run(app: &mut App, limit: Option<usize>) -> Result<()> {
    if app.engine.is_empty() {
        println!("No cards in the queue. Add some first.");
        return Ok(());
    }

    println!("Starting practice. Enter 'q' at any prompt to stop.");
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut reviewed = 0usize;

    loop {
        if limit.is_some_and(|limit| reviewed >= limit) {
            break;
        }

        match app.engine.next_card()? {
            NextCard::Exhausted => {
                println!("Queue empty.");
                break;
            }
            NextCard::NotYetDue => {
                // Each failed pass advances the rotation; ask again
                continue;
            }
            NextCard::Due(card) => {
                println!("\n---\nCard #{}\nQ: {}", card.id, card.question);
                print!("(press Enter to see the answer, 'q' to stop) ");
                io::stdout().flush()?;
                match read_line(&mut input)? {
                    Some(line) if line.trim() != "q" => {}
                    _ => {
                        app.engine.postpone();
                        break;
                    }
                }

                println!("A: {}", card.answer);
                print!("Did you answer correctly? (y/n, 'q' to stop): ");
                io::stdout().flush()?;
                let response = match read_line(&mut input)? {
                    Some(line) => line.trim().to_lowercase(),
                    None => {
                        app.engine.postpone();
                        break;
                    }
                };
                if response == "q" {
                    app.engine.postpone();
                    break;
                }

                let correct = response.starts_with('y');
                let updated = app.engine.submit(card.id, correct)?;
                if correct {
                    println!("Correct! Moved to tier {}.", updated.tier);
                } else {
                    println!("Missed. Back to tier {}.", updated.tier);
                }
                reviewed += 1;
            }
        }
    }

    app.save()?;
    println!("Exiting practice.");
    Ok(())
}

/// Read one line; None on end of input
fn read_line(input: &mut impl BufRead) -> Result<Option<String>> {
    let mut buf = String::new();
    let n = input.read_line(&mut buf)?;
    if n == 0 {
        Ok(None)
    } else {
        Ok(Some(buf))
    }
}
