use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("config error: {0}")]
    Config(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("render error: {0}")]
    Render(String),
    #[error("qr code error: {0}")]
    QrCode(String),
    #[error("background task failed: {0}")]
    Task(String),
}
