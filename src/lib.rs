#![forbid(unsafe_code)]
pub mod arithmetic;
pub mod error;

pub use arithmetic::{add, divide, multiply, subtract};

pub type Result<T> = std::result::Result<T, crate::error::Error>;
