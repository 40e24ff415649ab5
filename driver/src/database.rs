pub mod postgres;

pub use self::postgres::*;
