pub mod file;
pub mod http;
pub mod traits;

use std::time::Duration;

use crate::error::LoadError;

// Re-export
pub use file::FileSalesSource;
pub use http::HttpSalesSource;
pub use traits::SalesSource;

/// Picks an HTTP source for `http(s)://` locations and a file source otherwise.
pub fn open_source(location: &str, timeout: Duration) -> Result<Box<dyn SalesSource>, LoadError> {
    if is_url(location) {
        Ok(Box::new(HttpSalesSource::new(location, timeout)?))
    } else {
        Ok(Box::new(FileSalesSource::new(location)))
    }
}

fn is_url(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}
