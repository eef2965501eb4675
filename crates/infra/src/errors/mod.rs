//! Conversions from external infrastructure errors into domain errors.

use trackboard_domain::TrackboardError;

/// Error newtype that keeps conversions on the infrastructure side and can
/// be converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub TrackboardError);

impl From<InfraError> for TrackboardError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<TrackboardError> for InfraError {
    fn from(value: TrackboardError) -> Self {
        Self(value)
    }
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → TrackboardError */
/* -------------------------------------------------------------------------- */

impl From<reqwest::Error> for InfraError {
    fn from(err: reqwest::Error) -> Self {
        let converted = if err.is_timeout() {
            TrackboardError::Network("request timed out".into())
        } else if err.is_connect() {
            TrackboardError::Network(format!("connection failed: {err}"))
        } else if err.is_decode() {
            TrackboardError::Serialization(format!("failed to decode response body: {err}"))
        } else if err.is_builder() {
            TrackboardError::Internal(format!("failed to build request: {err}"))
        } else {
            TrackboardError::Network(err.to_string())
        };
        Self(converted)
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → TrackboardError */
/* -------------------------------------------------------------------------- */

impl From<serde_json::Error> for InfraError {
    fn from(err: serde_json::Error) -> Self {
        Self(TrackboardError::Serialization(err.to_string()))
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → TrackboardError */
/* -------------------------------------------------------------------------- */

impl From<std::io::Error> for InfraError {
    fn from(err: std::io::Error) -> Self {
        let converted = match err.kind() {
            std::io::ErrorKind::NotFound => {
                TrackboardError::NotFound(format!("file not found: {err}"))
            }
            std::io::ErrorKind::PermissionDenied => {
                TrackboardError::Storage(format!("permission denied: {err}"))
            }
            _ => TrackboardError::Storage(err.to_string()),
        };
        Self(converted)
    }
}
