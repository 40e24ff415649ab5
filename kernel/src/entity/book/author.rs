#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookAuthor(String);

impl BookAuthor {
    pub fn new(author: impl Into<String>) -> Self {
        Self(author.into())
    }
}

impl From<BookAuthor> for String {
    fn from(author: BookAuthor) -> Self {
        author.0
    }
}

impl AsRef<String> for BookAuthor {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
