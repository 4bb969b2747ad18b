use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Too many entries for {field}: at most {max} allowed")]
    CustomEntryLimit { field: &'static str, max: usize },

    #[error("Value for {field} exceeds {max} characters")]
    ValueTooLong { field: &'static str, max: usize },

    #[error("Unknown option '{id}' for {field}")]
    UnknownOption { field: &'static str, id: String },
}
