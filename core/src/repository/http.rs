use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::LoadError;
use crate::repository::traits::SalesSource;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Reads the document with a single blocking GET.
pub struct HttpSalesSource {
    client: Client,
    url: String,
}

impl HttpSalesSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, LoadError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl SalesSource for HttpSalesSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        let response = self.client.get(&self.url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }
        Ok(response.text()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    use super::*;
    use crate::service::loader::load_dataset;

    // Answers a single request on a loopback port with the given raw response.
    fn serve_once(response: &'static str) -> (String, JoinHandle<()>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/satis_verileri.json", listener.local_addr().unwrap());
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 1024];
            let _ = stream.read(&mut buf);
            stream.write_all(response.as_bytes()).unwrap();
        });
        (url, handle)
    }

    fn source(url: &str) -> HttpSalesSource {
        HttpSalesSource::new(url, Duration::from_secs(5)).unwrap()
    }

    const NOT_FOUND: &str = "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n";

    #[test]
    fn test_fetch_returns_body() {
        let (url, server) = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 2\r\nConnection: close\r\n\r\n[]",
        );
        assert_eq!(source(&url).fetch().unwrap(), "[]");
        server.join().unwrap();
    }

    #[test]
    fn test_non_success_status() {
        let (url, server) = serve_once(NOT_FOUND);
        let err = source(&url).fetch().unwrap_err();
        assert!(matches!(err, LoadError::Status { status: 404, .. }));
        assert!(err.is_transport());
        server.join().unwrap();
    }

    #[test]
    fn test_unreachable_host_is_transport_error() {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let err = source(&format!("http://127.0.0.1:{port}/")).fetch().unwrap_err();
        assert!(matches!(err, LoadError::Http(_)));
        assert!(err.is_transport());
    }

    #[test]
    fn test_failed_request_loads_empty_dataset() {
        let (url, server) = serve_once(NOT_FOUND);
        let dataset = load_dataset(&source(&url));
        assert!(dataset.is_empty());
        assert!(dataset.years.is_empty());
        server.join().unwrap();
    }
}
