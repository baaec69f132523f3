// Module containing response data structures for the geolocation service
mod response;

use tracing::{debug, error};
use url::Url;

use crate::error::GeoLocatorError;

pub use response::{GeoLocation, GeoStatus};

// Fixed endpoint of the free ip-api.com JSON API (plain HTTP; HTTPS is
// paid-tier only)
const BASE_URL: &str = "http://ip-api.com/json/";

/// Client for the [ip-api.com](https://ip-api.com/) geolocation service.
///
/// Holds a `reqwest::Client` and the fixed base URL; each lookup is a single
/// stateless GET. The client keeps no mutable state, so it can be cloned
/// cheaply and shared across tasks.
///
/// # Example
/// ```no_run
/// # async fn run() -> Result<(), geolocator::GeoLocatorError> {
/// let locator = geolocator::GeoLocator::new();
/// let location = locator.lookup("8.8.8.8").await?;
/// println!("{:?}", location.city);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeoLocator {
    client: reqwest::Client,
    base: Url,
}

impl GeoLocator {
    /// Creates a locator bound to the ip-api.com endpoint with a default
    /// HTTP client.
    pub fn new() -> Self {
        Self::with_client(reqwest::Client::new())
    }

    /// Creates a locator using a caller-configured `reqwest::Client`, for
    /// setting timeouts, proxies and the like. The endpoint stays fixed.
    pub fn with_client(client: reqwest::Client) -> Self {
        let base = Url::parse(BASE_URL).expect("base endpoint is a valid URL");
        Self { client, base }
    }

    fn with_base(client: reqwest::Client, base: Url) -> Self {
        Self { client, base }
    }

    /// Fetches geolocation information for the caller's own public IP
    /// address, as seen by the service.
    ///
    /// # Errors
    /// [`GeoLocatorError`] if the request cannot be sent, the service
    /// answers with a non-success HTTP status, or the body cannot be
    /// decoded.
    pub async fn lookup_self(&self) -> Result<GeoLocation, GeoLocatorError> {
        debug!("looking up geolocation of own address");
        self.fetch(self.base.clone()).await
    }

    /// Fetches geolocation information for the IP address or hostname given.
    ///
    /// The target is sent as a single percent-encoded path segment. A lookup
    /// the service itself rejects (private range, bogus hostname) returns
    /// `Ok` with [`GeoStatus::Fail`] and the service's message; see
    /// [`GeoLocatorError`] for the conditions that do raise errors.
    ///
    /// # Errors
    /// [`GeoLocatorError::EmptyTarget`] if `target` is empty, otherwise the
    /// same conditions as [`lookup_self`](Self::lookup_self).
    pub async fn lookup(&self, target: &str) -> Result<GeoLocation, GeoLocatorError> {
        if target.is_empty() {
            return Err(GeoLocatorError::EmptyTarget);
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .expect("http URLs always have path segments")
            .pop_if_empty()
            .push(target);

        debug!("looking up geolocation for target: {}", target);
        self.fetch(url).await
    }

    async fn fetch(&self, url: Url) -> Result<GeoLocation, GeoLocatorError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            error!("geolocation request failed: {}", status);
            return Err(GeoLocatorError::HttpStatus(status));
        }

        let body = response.text().await?;
        let location: GeoLocation =
            serde_json::from_str(&body).map_err(GeoLocatorError::Decode)?;
        debug!("geolocation fetched: {:?}", location);
        Ok(location)
    }
}

impl Default for GeoLocator {
    fn default() -> Self {
        Self::new()
    }
}
