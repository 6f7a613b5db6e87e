//! HTTP client for the drug catalog service.
//!
//! reqwest works on both native and WASM targets: native builds use hyper
//! with rustls, the web build rides on the browser's fetch() API. The
//! client is pooled and shared, so repeated catalog queries reuse
//! connections.

use once_cell::sync::Lazy;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use super::DrugRecord;
use crate::config::{API_URL_ENV, DEFAULT_API_URL};
use crate::error::CatalogError;

/// Global HTTP client for connection pooling.
#[cfg(not(target_arch = "wasm32"))]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(|| {
    reqwest::Client::builder()
        .user_agent(concat!("MediScan/", env!("CARGO_PKG_VERSION")))
        .timeout(std::time::Duration::from_secs(30))
        .build()
        .expect("Failed to build HTTP client")
});

// The WASM backend neither supports timeouts nor pools connections; the
// browser owns both concerns.
#[cfg(target_arch = "wasm32")]
static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Client for the two catalog endpoints: `GET /drugs` (optionally filtered)
/// and `GET /drugs/{id}`.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    base: Url,
}

impl CatalogClient {
    /// Creates a client against the given base URL. Only `http`/`https`
    /// schemes are accepted.
    pub fn new(base_url: &str) -> Result<Self, CatalogError> {
        let base = Url::parse(base_url)
            .map_err(|e| CatalogError::InvalidBaseUrl(format!("{base_url}: {e}")))?;
        if base.scheme() != "http" && base.scheme() != "https" {
            return Err(CatalogError::InvalidBaseUrl(format!(
                "Unsupported scheme: {} (only http/https allowed)",
                base.scheme()
            )));
        }
        Ok(Self { base })
    }

    /// Reads the base URL from `MEDISCAN_API_URL`, falling back to the
    /// default when the variable is unset or invalid.
    pub fn from_env() -> Self {
        std::env::var(API_URL_ENV)
            .ok()
            .and_then(|value| Self::new(&value).ok())
            .unwrap_or_else(|| {
                Self::new(DEFAULT_API_URL).expect("default catalog URL is valid")
            })
    }

    /// Fetches records matching `filter`; an empty or absent filter returns
    /// the full catalog. The server matches name, active ingredient, and
    /// manufacturer.
    pub async fn list_drugs(
        &self,
        filter: Option<&str>,
    ) -> Result<Vec<DrugRecord>, CatalogError> {
        let url = self.listing_url(filter);
        debug!(%url, "fetching drug listing");

        let response = HTTP_CLIENT
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(format!("{url}: {e}")))?;
        if !response.status().is_success() {
            return Err(CatalogError::RequestFailed(format!(
                "{url} returned HTTP {}",
                response.status()
            )));
        }

        response
            .json::<Vec<DrugRecord>>()
            .await
            .map_err(|e| CatalogError::DecodeFailed(e.to_string()))
    }

    /// Fetches exactly one record by identifier. HTTP 404 maps to
    /// [`CatalogError::NotFound`].
    pub async fn get_drug(&self, id: &str) -> Result<DrugRecord, CatalogError> {
        let url = self.endpoint(&["drugs", id]);
        debug!(%url, "fetching drug record");

        let response = HTTP_CLIENT
            .get(url.clone())
            .send()
            .await
            .map_err(|e| CatalogError::RequestFailed(format!("{url}: {e}")))?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(CatalogError::NotFound(id.to_string()));
        }
        if !response.status().is_success() {
            return Err(CatalogError::RequestFailed(format!(
                "{url} returned HTTP {}",
                response.status()
            )));
        }

        response
            .json::<DrugRecord>()
            .await
            .map_err(|e| CatalogError::DecodeFailed(e.to_string()))
    }

    fn listing_url(&self, filter: Option<&str>) -> Url {
        let mut url = self.endpoint(&["drugs"]);
        if let Some(term) = filter.map(str::trim).filter(|t| !t.is_empty()) {
            url.query_pairs_mut().append_pair("search", term);
        }
        url
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // http(s) URLs always have a segmentable path
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_invalid_base_url() {
        assert!(matches!(
            CatalogClient::new("not a url"),
            Err(CatalogError::InvalidBaseUrl(_))
        ));
        assert!(matches!(
            CatalogClient::new("ftp://catalog.example"),
            Err(CatalogError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_listing_url_without_filter() {
        let client = CatalogClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.listing_url(None).as_str(),
            "http://localhost:8000/drugs"
        );
        // Whitespace-only filters behave like no filter
        assert_eq!(
            client.listing_url(Some("   ")).as_str(),
            "http://localhost:8000/drugs"
        );
    }

    #[test]
    fn test_listing_url_encodes_filter() {
        let client = CatalogClient::new("http://localhost:8000").unwrap();
        assert_eq!(
            client.listing_url(Some("panadol extra")).as_str(),
            "http://localhost:8000/drugs?search=panadol+extra"
        );
    }

    #[test]
    fn test_detail_url_joins_id() {
        let client = CatalogClient::new("https://api.example.com/v1/").unwrap();
        assert_eq!(
            client.endpoint(&["drugs", "999"]).as_str(),
            "https://api.example.com/v1/drugs/999"
        );
    }

    #[tokio::test]
    async fn test_http_404_maps_to_not_found() {
        use std::io::{Read, Write};

        // One-shot server answering any request with 404
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            if let Ok((mut stream, _)) = listener.accept() {
                let mut buf = [0u8; 1024];
                let _ = stream.read(&mut buf);
                let _ = stream.write_all(
                    b"HTTP/1.1 404 Not Found\r\ncontent-length: 0\r\nconnection: close\r\n\r\n",
                );
            }
        });

        let client = CatalogClient::new(&format!("http://{addr}")).unwrap();
        let err = client.get_drug("999").await.unwrap_err();
        assert_eq!(err, CatalogError::NotFound("999".to_string()));
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_unreachable_catalog_is_a_request_failure() {
        // Nothing listens on the discard port; the connection is refused
        let client = CatalogClient::new("http://127.0.0.1:9").unwrap();
        let err = client.get_drug("1").await.unwrap_err();
        assert!(matches!(err, CatalogError::RequestFailed(_)));
        assert!(!err.is_not_found());
    }
}
