use thiserror::Error;

/// Errors that can occur while loading the recipe and location tables.
///
/// The lookup and expansion functions never fail; this is the only error
/// boundary in the crate.
#[derive(Error, Debug, Clone)]
pub enum DataError {
    #[error("Could not read data file '{path}': {message}")]
    Io { path: String, message: String },

    #[error("Failed to parse {table} JSON: {message}")]
    JsonParse { table: String, message: String },
}

impl DataError {
    pub(crate) fn io(path: &str, err: std::io::Error) -> Self {
        DataError::Io {
            path: path.to_string(),
            message: err.to_string(),
        }
    }

    pub(crate) fn json(table: &str, err: serde_json::Error) -> Self {
        DataError::JsonParse {
            table: table.to_string(),
            message: err.to_string(),
        }
    }
}
