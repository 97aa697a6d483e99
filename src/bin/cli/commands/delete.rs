use anyhow::Result;

use crate::app::App;

pub fn run(app: &mut App, id: u64) -> Result<()> {
    let card = app.engine.delete_card(id)?;
    app.save()?;

    println!("Deleted card #{}", card.id);
    Ok(())
}
