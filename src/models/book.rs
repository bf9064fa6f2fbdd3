use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub sales: i64,
    pub publication_date: i64,
}

// The create payload: same shape as Book minus the server-generated id.
// Unknown fields are rejected so the shape stays closed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub sales: i64,
    pub publication_date: i64,
}

impl NewBook {
    pub fn into_book(self, id: String) -> Book {
        Book {
            id,
            title: self.title,
            author: self.author,
            genre: self.genre,
            sales: self.sales,
            publication_date: self.publication_date,
        }
    }
}
