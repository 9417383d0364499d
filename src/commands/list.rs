//! List articles in an export

use anyhow::Result;
use std::path::Path;

use crate::content::ArticleLoader;
use crate::BlogCards;

/// Print one line per article: id, date, title and link
pub fn run(app: &BlogCards, input: &Path) -> Result<()> {
    let articles = ArticleLoader::load(input)?;
    let cards = app.view()?.cards(&articles)?;

    println!("Articles ({}):", cards.len());
    for card in cards {
        println!("  {:>4}  {}  {} [{}]", card.id, card.date, card.title, card.href);
    }

    Ok(())
}
