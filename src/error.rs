use thiserror::Error;

#[derive(Error, Debug)]
pub enum PedidosError {
    #[error("Line item index out of range: {index} (draft has {count} items)")]
    ItemIndexOutOfRange { index: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, PedidosError>;
