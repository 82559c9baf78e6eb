// Collection list access for the search-and-collect workflow

use movie_list_models::Movie;
use tracing::debug;

/// Read/replace access to the caller-owned, ordered movie list.
///
/// The workflow never assumes ownership: it reads the current list for the
/// duplicate check and replaces it wholesale with an appended copy, so
/// observers can detect the change by identity.
pub trait CollectionStore {
    fn get(&self) -> Vec<Movie>;
    fn replace(&mut self, movies: Vec<Movie>);
}

/// Simple in-process list owner, mainly for the CLI session and tests.
#[derive(Debug, Default)]
pub struct InMemoryCollection {
    movies: Vec<Movie>,
}

impl InMemoryCollection {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CollectionStore for InMemoryCollection {
    fn get(&self) -> Vec<Movie> {
        self.movies.clone()
    }

    fn replace(&mut self, movies: Vec<Movie>) {
        self.movies = movies;
    }
}

/// Append `movie` to the store unless an entry with the exact same title
/// already exists (case-sensitive). Returns whether the list grew.
///
/// Uniqueness is checked on `title` only, not on `imdb_id`. Insertion order
/// is preserved; new entries land at the end.
pub fn append_unique_by_title(store: &mut dyn CollectionStore, movie: Movie) -> bool {
    let current = store.get();

    if current.iter().any(|existing| existing.title == movie.title) {
        debug!(
            "append_unique_by_title: skipping duplicate title={:?}",
            movie.title
        );
        return false;
    }

    debug!(
        "append_unique_by_title: appending title={:?}, list_len={}",
        movie.title,
        current.len() + 1
    );

    let mut next = current;
    next.push(movie);
    store.replace(next);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_movie(title: &str, imdb_id: &str) -> Movie {
        Movie {
            title: title.to_string(),
            imdb_id: imdb_id.to_string(),
            description: String::new(),
            img_url: String::new(),
            imdb_url: Movie::imdb_url_for(imdb_id),
        }
    }

    #[test]
    fn test_append_to_empty_collection() {
        let mut store = InMemoryCollection::new();

        let added = append_unique_by_title(&mut store, create_movie("Up", "tt1049413"));
        assert!(added);
        assert_eq!(store.get().len(), 1);
        assert_eq!(store.get()[0].title, "Up");
    }

    #[test]
    fn test_append_preserves_insertion_order() {
        let mut store = InMemoryCollection::new();

        append_unique_by_title(&mut store, create_movie("Up", "tt1049413"));
        append_unique_by_title(&mut store, create_movie("The Matrix", "tt0133093"));
        append_unique_by_title(&mut store, create_movie("Alien", "tt0078748"));

        let titles: Vec<String> = store.get().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["Up", "The Matrix", "Alien"]);
    }

    #[test]
    fn test_duplicate_title_leaves_list_unchanged() {
        let mut store = InMemoryCollection::new();
        append_unique_by_title(&mut store, create_movie("Up", "tt1049413"));
        let before = store.get();

        // Same title, different provider ID - still a duplicate
        let added = append_unique_by_title(&mut store, create_movie("Up", "tt9999999"));
        assert!(!added);
        assert_eq!(store.get(), before);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut store = InMemoryCollection::new();
        append_unique_by_title(&mut store, create_movie("Up", "tt1049413"));

        let added = append_unique_by_title(&mut store, create_movie("UP", "tt1049413"));
        assert!(added);
        assert_eq!(store.get().len(), 2);
    }
}
