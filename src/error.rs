use thiserror::Error;

#[derive(Debug, Error)]
pub enum GateError {
    #[error("serialization gate is closed")]
    Closed,

    #[error("queued task aborted before producing a result")]
    TaskAborted,
}

#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("identity resolution failed: {0}")]
    Resolution(#[source] anyhow::Error),

    #[error("activity store error: {0}")]
    Store(#[source] anyhow::Error),

    #[error(transparent)]
    Gate(#[from] GateError),
}
