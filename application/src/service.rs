mod book;
mod borrowing;
mod user;

#[cfg(test)]
pub(crate) mod mock;

pub use self::{book::*, borrowing::*, user::*};
