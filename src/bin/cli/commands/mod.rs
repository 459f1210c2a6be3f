pub mod flashcards;
pub mod learn;
pub mod list;
pub mod quiz;
pub mod search;
pub mod stats;

use kalima::progress::MAX_STARS;
use kalima::query::StarFilter;

/// Render a rating as filled and empty star glyphs, e.g. `⭐⭐☆`
pub fn render_stars(count: u8) -> String {
    let mut stars = String::new();
    for i in 0..MAX_STARS {
        if i < count {
            stars.push('⭐');
        } else {
            stars.push('☆');
        }
    }
    stars
}

pub fn star_filter(stars: Option<u8>) -> StarFilter {
    match stars {
        Some(level) => StarFilter::Exactly(level),
        None => StarFilter::Any,
    }
}
