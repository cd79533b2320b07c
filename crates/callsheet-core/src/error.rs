use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid equipment type: {0}")]
    InvalidEquipmentType(String),
}
