use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchemadocError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Type not found: {0}")]
    TypeNotFound(String),

    #[error("Field not found: {0}.{1}")]
    FieldNotFound(String, String),

    #[error("Schema parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemadocError>;
