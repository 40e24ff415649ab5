#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserEmail(String);

impl UserEmail {
    pub fn new(email: impl Into<String>) -> Self {
        Self(email.into())
    }
}

impl From<UserEmail> for String {
    fn from(email: UserEmail) -> Self {
        email.0
    }
}

impl AsRef<String> for UserEmail {
    fn as_ref(&self) -> &String {
        &self.0
    }
}
