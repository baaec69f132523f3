//! Client library for the [ip-api.com](https://ip-api.com/) IP-geolocation
//! service.
//!
//! [`GeoLocator`] issues a single GET per lookup and decodes the JSON body
//! into a [`GeoLocation`]. Transport, HTTP-status and decode problems raise
//! [`GeoLocatorError`]; a lookup the service itself rejects comes back as a
//! normal result with [`GeoStatus::Fail`] and the service's message.

pub mod error;
pub mod geo_locator;

pub use error::GeoLocatorError;
pub use geo_locator::{GeoLocation, GeoLocator, GeoStatus};
