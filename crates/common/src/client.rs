//! HTTP client for the Datadog API
//!
//! Builds a `reqwest` client from per-call credentials and decodes JSON
//! responses into typed values, translating non-2xx responses into
//! [`Error::Api`].

use std::time::Duration;

use reqwest::{header, Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::credentials::Credentials;
use crate::error::{Error, Result};

const API_KEY_HEADER: &str = "DD-API-KEY";
const APPLICATION_KEY_HEADER: &str = "DD-APPLICATION-KEY";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Thin wrapper around a configured `reqwest::Client` for Datadog API access.
///
/// One instance is built per handler invocation; nothing is shared across
/// invocations.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    http: Client,
}

impl ApiClient {
    /// Build a client that authenticates every request with the supplied
    /// API key and application key headers.
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let base_url = parse_base_url(credentials.api_url())?;

        let mut default_headers = header::HeaderMap::new();
        default_headers.insert(
            API_KEY_HEADER,
            header::HeaderValue::from_str(&credentials.api_key)
                .map_err(|_| Error::InvalidConfig("API key is not a valid header value".to_string()))?,
        );
        default_headers.insert(
            APPLICATION_KEY_HEADER,
            header::HeaderValue::from_str(&credentials.application_key).map_err(|_| {
                Error::InvalidConfig("application key is not a valid header value".to_string())
            })?,
        );
        default_headers.insert(
            header::ACCEPT,
            header::HeaderValue::from_static("application/json"),
        );

        let http = Client::builder()
            .default_headers(default_headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self { base_url, http })
    }

    /// Build a request for a method and API-relative path (no leading slash).
    pub fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let url = self
            .base_url
            .join(path)
            .map_err(|e| Error::InvalidConfig(format!("invalid request path '{}': {}", path, e)))?;
        debug!(%url, "building request");
        Ok(self.http.request(method, url))
    }

    /// GET a path with query parameters and decode the JSON response.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let response = self.request(Method::GET, path)?.query(query).send().await?;
        decode_response(response).await
    }

    /// Send a JSON body (POST/PUT/DELETE) and decode the JSON response.
    pub async fn send_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: &B,
    ) -> Result<T> {
        let response = self
            .request(method, path)?
            .query(query)
            .json(body)
            .send()
            .await?;
        decode_response(response).await
    }

    /// DELETE a path with no body and decode the JSON response.
    pub async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let response = self.request(Method::DELETE, path)?.send().await?;
        decode_response(response).await
    }
}

/// Decode a response body, turning any non-2xx status into [`Error::Api`]
/// carrying the response text.
async fn decode_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        let message = if body.is_empty() {
            status.to_string()
        } else {
            body
        };
        return Err(Error::Api {
            status: status.as_u16(),
            message,
        });
    }

    // Some endpoints answer 2xx with an empty body
    let body = if body.is_empty() {
        "null"
    } else {
        body.as_str()
    };
    Ok(serde_json::from_str(body)?)
}

/// Validate and normalize the configured base URL.
///
/// The URL must be HTTP(S) with a host; the path gains a trailing slash so
/// relative joins preserve any prefix.
fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw)
        .map_err(|e| Error::InvalidConfig(format!("invalid API URL '{}': {}", raw, e)))?;

    if url.scheme() != "https" && url.scheme() != "http" {
        return Err(Error::InvalidConfig(format!(
            "API URL must use http or https; got '{}://'",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(Error::InvalidConfig(format!(
            "API URL '{}' must include a host",
            raw
        )));
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
