#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookTitle(String);

impl BookTitle {
    pub fn new(title: impl Into<String>) -> Self {
        Self(title.into())
    }
}

impl From<BookTitle> for String {
    fn from(title: BookTitle) -> Self {
        title.0
    }
}

impl AsRef<String> for BookTitle {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
