use anyhow::Result;

use kalima::query::WordQuery;

use crate::app::App;
use crate::commands::render_stars;

pub fn run(app: &App, query_text: &str) -> Result<()> {
    let query = WordQuery::new(&app.catalog, &app.progress);
    let matches = query.search(query_text);

    if matches.is_empty() {
        println!("No words matching '{}'", query_text);
        return Ok(());
    }

    for category in matches {
        println!("{} {}", category.icon, category.name);
        for word in category.words {
            println!(
                "  {} {:20} {}",
                render_stars(app.progress.stars(&word.arabic)),
                word.english,
                word.arabic
            );
        }
        println!();
    }

    Ok(())
}
