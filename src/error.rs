use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by geolocation lookups.
///
/// A lookup the service itself rejects (`"status": "fail"` in the body) is
/// not an error; it is returned as a normal [`GeoLocation`] carrying the
/// failure message.
///
/// [`GeoLocation`]: crate::GeoLocation
#[derive(Error, Debug)]
pub enum GeoLocatorError {
    /// A lookup was requested with an empty target string
    #[error("lookup target must not be empty")]
    EmptyTarget,

    /// The request could not be sent or the body could not be read
    #[error("HTTP request error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-success HTTP status
    #[error("geolocation service returned HTTP status {0}")]
    HttpStatus(StatusCode),

    /// The response body was not the expected JSON shape
    #[error("failed to decode geolocation response: {0}")]
    Decode(#[source] serde_json::Error),
}
