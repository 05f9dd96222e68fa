use crate::error::Error as MikiErr;
pub type Result<T> = std::result::Result<T, MikiErr>;
