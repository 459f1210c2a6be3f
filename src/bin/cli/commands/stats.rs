use anyhow::Result;

use kalima::query::WordQuery;

use crate::app::App;

pub fn run(app: &App) -> Result<()> {
    let query = WordQuery::new(&app.catalog, &app.progress);
    let stats = query.stats();

    println!("Words:    {}", stats.total);
    println!("Learned:  {}", stats.learned);
    println!("Progress: {}%", stats.percent);

    Ok(())
}
