use anyhow::Result;

use kalima::query::{CategoryFilter, WordQuery};

use crate::app::App;
use crate::commands::{render_stars, star_filter};

pub fn run(app: &App, category: Option<&str>, stars: Option<u8>, hide_known: bool) -> Result<()> {
    let query = WordQuery::new(&app.catalog, &app.progress);
    let star_filter = star_filter(stars);

    for (name, data) in app.catalog.iter() {
        if let Some(wanted) = category {
            if wanted != "all" && wanted != name {
                continue;
            }
        }

        let filter = CategoryFilter::Named(name.to_string());
        let words = query.filtered_words(&filter, star_filter, hide_known);
        if words.is_empty() {
            continue;
        }

        println!("{} {} ({})", data.icon, name, words.len());
        for word in words {
            let learned = if app.progress.is_learned(&word.arabic) {
                "✓"
            } else {
                " "
            };
            println!(
                "  {} {} {:20} {}",
                learned,
                render_stars(app.progress.stars(&word.arabic)),
                word.english,
                word.arabic
            );
        }
        println!();
    }

    Ok(())
}
