use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;

use kalima::session::QuizSession;

use crate::app::App;

/// How long the answer feedback stays on screen before the next question
const FEEDBACK_DELAY: Duration = Duration::from_millis(1500);

pub fn run(app: &App) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut session = QuizSession::start(&app.catalog, &mut rng);

    if session.is_empty() {
        println!("No words in the catalog.");
        return Ok(());
    }

    let stdin = io::stdin();

    while let Some(question) = session.current_question().cloned() {
        println!();
        println!(
            "[{}/{}] {}",
            session.current_index() + 1,
            session.len(),
            question.prompt
        );
        for (i, option) in question.options.iter().enumerate() {
            println!("  {}) {}", i + 1, option);
        }
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let selected = line?
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| question.options.get(i));

        let Some(selected) = selected else {
            println!("Pick a number between 1 and {}.", question.options.len());
            continue;
        };

        if let Some(submission) = session.submit_answer(selected) {
            if submission.correct {
                println!("✓ Correct!");
            } else {
                println!("✗ Wrong — it was \"{}\"", question.correct);
            }
            thread::sleep(FEEDBACK_DELAY);
            session.advance(submission.advance);
        }
    }

    println!();
    println!("Score: {}/{}", session.score(), session.len());

    Ok(())
}
