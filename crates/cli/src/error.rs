use model::errors::CriteriaError;
use query_builder::error::RenderError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to deserialize JSON input: {0}")]
    JsonDeserialize(#[from] serde_json::Error),

    #[error("Failed to serialize data to JSON: {0}")]
    JsonSerialize(serde_json::Error),

    #[error("Invalid criteria: {0}")]
    Criteria(#[from] CriteriaError),

    #[error("Failed to render the query: {0}")]
    Render(#[from] RenderError),

    #[error("Unsupported dialect: {0}")]
    UnsupportedDialect(String),

    #[error("No table given; pass --table or set `table` in the config file")]
    MissingTable,
}
