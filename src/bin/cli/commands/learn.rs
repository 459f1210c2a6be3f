use anyhow::Result;

use crate::app::App;

pub fn run(app: &mut App, arabic: &str) -> Result<()> {
    if !app.catalog.all_words().any(|w| w.arabic == arabic) {
        println!("Note: '{}' is not in the catalog", arabic);
    }

    let learned = app.progress.toggle_learned(arabic)?;
    if learned {
        println!("Marked '{}' as learned", arabic);
    } else {
        println!("Unmarked '{}'", arabic);
    }

    Ok(())
}
