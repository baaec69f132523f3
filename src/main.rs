use std::env;

use geolocator::GeoLocator;
use tracing_subscriber::EnvFilter;

/// Looks up the IP address or hostname given as the first argument, or the
/// caller's own public address when no argument is passed, and prints the
/// decoded geolocation record.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let locator = GeoLocator::new();
    let location = match env::args().nth(1) {
        Some(target) => locator.lookup(&target).await?,
        None => locator.lookup_self().await?,
    };

    println!("{location:#?}");
    Ok(())
}
