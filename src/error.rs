#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Cannot divide by zero")]
    DivisionByZero,
}
