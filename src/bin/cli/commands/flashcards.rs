use std::io::{self, BufRead, Write};

use anyhow::Result;

use kalima::query::CategoryFilter;
use kalima::session::{DeckConfig, FlashcardSession};

use crate::app::App;
use crate::commands::{render_stars, star_filter};

pub fn run(
    app: &mut App,
    category: Option<&str>,
    stars: Option<u8>,
    hide_known: bool,
    reverse: bool,
) -> Result<()> {
    let config = DeckConfig {
        category: CategoryFilter::from_name(category),
        star_filter: star_filter(stars),
        hide_known,
        reverse,
    };

    let mut rng = rand::thread_rng();
    let mut session = FlashcardSession::new(config, &app.catalog, &app.progress, &mut rng);

    if session.deck_size() == 0 {
        println!("No words match the current filters.");
        return Ok(());
    }

    println!("{} cards. Enter flips, 1 = known, 2 = unknown, r = reverse, q = quit.", session.deck_size());

    let stdin = io::stdin();

    loop {
        let view = session.view(&app.progress);
        if session.is_flipped() {
            println!();
            println!("[{}/{}] {}  {}", view.position, view.deck_size, view.back, render_stars(view.stars));
        } else {
            println!();
            println!("[{}/{}] {}  {}", view.position, view.deck_size, view.front, render_stars(view.stars));
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };

        match line?.trim() {
            "" => session.flip(),
            "1" => {
                let outcome = session.judge(true, &app.catalog, &mut app.progress, &mut rng)?;
                if let Some(stars) = outcome.stars {
                    println!("Known — now at {}", render_stars(stars));
                }
                if outcome.deck_restarted {
                    if session.deck_size() == 0 {
                        println!("Nothing left that matches the filters.");
                        break;
                    }
                    println!("Deck finished — reshuffled, starting over.");
                }
            }
            "2" => {
                let outcome = session.judge(false, &app.catalog, &mut app.progress, &mut rng)?;
                if outcome.deck_restarted {
                    println!("Deck finished — reshuffled, starting over.");
                }
            }
            "r" => {
                let reverse = !session.config().reverse;
                session.set_reverse(reverse);
            }
            "q" => break,
            _ => println!("Enter flips, 1 = known, 2 = unknown, r = reverse, q = quit."),
        }
    }

    Ok(())
}
