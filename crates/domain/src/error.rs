use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("unknown image category: {0} (expected desktop or mobile)")]
    UnknownCategory(String),
}
