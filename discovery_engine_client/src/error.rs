#[derive(thiserror::Error, Debug)]
pub enum DiscoveryEngineError {
    #[error("invalid argument: {details}")]
    InvalidArgument { details: String },
    #[error("unauthorized: {details}")]
    Unauthorized { details: String },
    #[error("permission denied: {details}")]
    PermissionDenied { details: String },
    #[error("not found: {details}")]
    NotFound { details: String },
    #[error("resource exhausted: {details}")]
    ResourceExhausted { details: String },
    #[error("internal server error: {details}")]
    InternalServerError { details: String },
    #[error("unable to build request: {details}")]
    RequestBuildError { details: String },
    #[error("unable to resolve access token: {details}")]
    Auth { details: String },
    #[error("{message}")]
    Generic { message: String },
}
