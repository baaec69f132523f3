/// Outcome reported by the geolocation service itself, separate from the
/// HTTP status of the exchange. A failed lookup (private range, bogus
/// hostname) still arrives as HTTP 200 with `"status": "fail"`.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GeoStatus {
    Success,
    Fail,
}

/// Geolocation record decoded from one ip-api.com JSON response.
///
/// Every field except `status` is optional: the service omits location data
/// on failed lookups, and the free tier may drop fields. Extra fields the
/// service adds over time are ignored during decoding.
#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
pub struct GeoLocation {
    /// Whether the service could resolve the queried address
    pub status: GeoStatus,
    /// Reason for the failure, set when `status` is `Fail`
    pub message: Option<String>,
    /// Country name (e.g., "United States")
    pub country: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    /// Region/state short code (e.g., "CA")
    pub region: Option<String>,
    /// Region/state full name
    #[serde(rename = "regionName")]
    pub region_name: Option<String>,
    /// City name
    pub city: Option<String>,
    /// Postal code
    pub zip: Option<String>,
    /// Latitude in decimal degrees
    pub lat: Option<f64>,
    /// Longitude in decimal degrees
    pub lon: Option<f64>,
    /// IANA timezone name (e.g., "America/Los_Angeles")
    pub timezone: Option<String>,
    /// Internet service provider name
    pub isp: Option<String>,
    /// Organization name
    pub org: Option<String>,
    /// Autonomous system number and name
    #[serde(rename = "as")]
    pub autonomous_system: Option<String>,
    /// The IP address the service resolved the query to
    pub query: Option<String>,
}

impl GeoLocation {
    /// Returns `true` when the service resolved the queried address.
    pub fn is_success(&self) -> bool {
        self.status == GeoStatus::Success
    }
}
