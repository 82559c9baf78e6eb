// Terminal rendering for movie cards and the collection list

use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use movie_list_models::Movie;

/// Render one movie as a preview card.
pub fn movie_card(movie: &Movie) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);

    table.add_row(vec![Cell::new("Title"), Cell::new(&movie.title)]);
    table.add_row(vec![Cell::new("Plot"), Cell::new(&movie.description)]);
    table.add_row(vec![Cell::new("Poster"), Cell::new(&movie.img_url)]);
    table.add_row(vec![Cell::new("IMDB"), Cell::new(&movie.imdb_url)]);

    table
}

/// Render the collected list in insertion order.
pub fn collection_table(movies: &[Movie]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "IMDB"]);

    for (index, movie) in movies.iter().enumerate() {
        table.add_row(vec![
            Cell::new(index + 1),
            Cell::new(&movie.title),
            Cell::new(&movie.imdb_url),
        ]);
    }

    table
}
