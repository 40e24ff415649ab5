#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct IsStaff(bool);

impl IsStaff {
    pub fn new(value: impl Into<bool>) -> Self {
        Self(value.into())
    }
}

impl From<IsStaff> for bool {
    fn from(value: IsStaff) -> Self {
        value.0
    }
}

impl AsRef<bool> for IsStaff {
    fn as_ref(&self) -> &bool {
        &self.0
    }
}
