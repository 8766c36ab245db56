use crate::error::WordGridError;

pub type WordGridResult<T> = Result<T, WordGridError>;
