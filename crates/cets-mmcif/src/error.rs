use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MmcifError {
    #[error("row for {category} has {actual} values, expected {expected}")]
    RowWidth {
        category: String,
        expected: usize,
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, MmcifError>;
