use crate::models::book::Book;

fn non_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

fn non_zero(value: i64) -> Option<String> {
    if value == 0 {
        None
    } else {
        Some(value.to_string())
    }
}

// Empty strings and zero counts are treated the same as a missing
// attribute, so such books never match a filter on that category.
pub fn category_value(book: &Book, category: &str) -> Option<String> {
    match category {
        "id" => non_empty(&book.id),
        "title" => non_empty(&book.title),
        "author" => non_empty(&book.author),
        "genre" => non_empty(&book.genre),
        "sales" => non_zero(book.sales),
        "publication_date" => non_zero(book.publication_date),
        _ => None,
    }
}

// Prefix match, not substring: "sci" matches "scifi", "fi" does not.
pub fn filter_by_category(books: Vec<Book>, category: &str, term: &str) -> Vec<Book> {
    let term = term.to_lowercase();

    books
        .into_iter()
        .filter(|book| {
            category_value(book, category)
                .map(|value| value.to_lowercase().starts_with(&term))
                .unwrap_or(false)
        })
        .collect()
}

pub fn find_by_id<'a>(books: &'a [Book], id: &str) -> Option<&'a Book> {
    books.iter().find(|book| book.id == id)
}
