//! WhoisXML API client and lookup operations.
//!
//! This module provides the [`WhoisApiClient`] that orchestrates query
//! building, transport invocation and response parsing for the two lookup
//! operations: [`data`](WhoisApiClient::data) (typed record) and
//! [`raw_data`](WhoisApiClient::raw_data) (raw bytes).

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use crate::error::WhoisApiError;
use crate::options::{LookupOptions, OutputFormat, PARAM_API_KEY, PARAM_DOMAIN_NAME, PARAM_OUTPUT_FORMAT};
use crate::response::{parse_envelope, ApiResponse};
use crate::types::WhoisRecord;
use crate::Result;

/// Default endpoint for current WHOIS lookups.
pub const DEFAULT_WHOIS_API_URL: &str = "https://www.whoisxmlapi.com/whoisserver/WhoisService";

/// Default endpoint for the vendor's historic-lookup product.
pub const DEFAULT_HISTORIC_API_URL: &str = "https://whois-history.whoisxmlapi.com/api/v1";

/// Environment variable holding the API key for [`WhoisApiClient::from_env`].
pub const ENV_API_KEY: &str = "WHOIS_API_KEY";

/// Environment variable overriding the current-lookup endpoint.
pub const ENV_WHOIS_API_URL: &str = "WHOIS_API_URL";

/// Environment variable overriding the historic-lookup endpoint.
pub const ENV_HISTORIC_API_URL: &str = "WHOIS_HISTORIC_API_URL";

/// Timeout applied to the default HTTP client when none is injected.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Async client for the WhoisXML API WHOIS lookup web service.
///
/// The client holds read-only configuration (API key, endpoints, HTTP
/// transport) fixed at construction. It is cheap to clone and safe to
/// share across tasks; concurrent calls are independent.
///
/// # Example
///
/// ```rust,no_run
/// use whois_api_lib::{LookupOptions, WhoisApiClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = WhoisApiClient::new("at_your_api_key")?;
///     let (record, _response) = client
///         .data("example.com", &LookupOptions::new())
///         .await?;
///
///     println!("registrar: {}", record.base.registrar_name);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WhoisApiClient {
    api_key: String,
    whois_base_url: Url,
    historic_base_url: Url,
    http: reqwest::Client,
}

impl WhoisApiClient {
    /// Create a client with default endpoints and a default HTTP transport.
    pub fn new<K: Into<String>>(api_key: K) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Start building a client with custom endpoints or transport.
    pub fn builder<K: Into<String>>(api_key: K) -> ClientBuilder {
        ClientBuilder {
            api_key: api_key.into(),
            whois_base_url: None,
            historic_base_url: None,
            http_client: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Create a client from the environment.
    ///
    /// Reads the API key from `WHOIS_API_KEY` (required) and endpoint
    /// overrides from `WHOIS_API_URL` / `WHOIS_HISTORIC_API_URL`.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var(ENV_API_KEY)
            .map_err(|_| WhoisApiError::config(format!("{} is not set", ENV_API_KEY)))?;

        let mut builder = Self::builder(api_key);
        if let Some(url) = url_from_env(ENV_WHOIS_API_URL)? {
            builder = builder.whois_base_url(url);
        }
        if let Some(url) = url_from_env(ENV_HISTORIC_API_URL)? {
            builder = builder.historic_base_url(url);
        }
        builder.build()
    }

    /// The configured endpoint for current lookups.
    pub fn whois_base_url(&self) -> &Url {
        &self.whois_base_url
    }

    /// The configured endpoint for the historic-lookup product.
    pub fn historic_base_url(&self) -> &Url {
        &self.historic_base_url
    }

    /// Look up a domain and return the parsed WHOIS record.
    ///
    /// The output format is pinned to JSON regardless of any caller-set
    /// [`LookupOptions::output_format`], since the parser works with JSON
    /// only.
    ///
    /// # Errors
    ///
    /// Returns [`WhoisApiError`] if:
    /// - `name` is empty (no request is made)
    /// - the request or the body read fails
    /// - the body is not a valid JSON envelope
    /// - the payload carries a vendor [`ErrorMessage`](crate::ErrorMessage),
    ///   even when the HTTP status is 200; the response is discarded on
    ///   this path
    ///
    /// The HTTP status code itself is not consulted: non-success statuses
    /// surface through the body being unparsable or through the embedded
    /// error object. Use [`raw_data`](Self::raw_data) for status-checked
    /// access.
    pub async fn data(&self, name: &str, opts: &LookupOptions) -> Result<(WhoisRecord, ApiResponse)> {
        let response = self.request(name, opts, Some(OutputFormat::Json)).await?;

        let envelope = parse_envelope(&response.body)?;
        if let Some(message) = envelope.error_message {
            return Err(WhoisApiError::Api(message));
        }

        match envelope.whois_record {
            Some(record) => Ok((record, response)),
            None => Err(WhoisApiError::parse("missing WhoisRecord object")),
        }
    }

    /// Look up a domain and return the raw API response.
    ///
    /// The output format is left as the caller set it (vendor default
    /// otherwise). The body is returned untouched; no JSON decoding is
    /// attempted, so even a malformed body comes back as-is.
    ///
    /// # Errors
    ///
    /// Returns [`WhoisApiError`] if:
    /// - `name` is empty (no request is made)
    /// - the request or the body read fails
    /// - the HTTP status is outside 200–299
    ///   (`API failed with status code: N`)
    pub async fn raw_data(&self, name: &str, opts: &LookupOptions) -> Result<ApiResponse> {
        let response = self.request(name, opts, None).await?;
        response.check_status()?;
        Ok(response)
    }

    /// Build the query, issue the GET and read the body in full.
    async fn request(
        &self,
        name: &str,
        opts: &LookupOptions,
        force_format: Option<OutputFormat>,
    ) -> Result<ApiResponse> {
        if name.is_empty() {
            return Err(WhoisApiError::invalid_argument("name", "cannot be empty"));
        }

        let mut params = BTreeMap::new();
        params.insert(PARAM_API_KEY, self.api_key.clone());
        params.insert(PARAM_DOMAIN_NAME, name.to_owned());
        opts.apply(&mut params);
        if let Some(format) = force_format {
            params.insert(PARAM_OUTPUT_FORMAT, format.as_str().to_owned());
        }

        debug!(domain = name, url = %self.whois_base_url, "sending WHOIS lookup");

        let response = self
            .http
            .get(self.whois_base_url.clone())
            .query(&params)
            .send()
            .await
            .map_err(WhoisApiError::from)?;

        let status = response.status();
        let headers = response.headers().clone();

        // Read the whole body no matter the status: error payloads must
        // stay parsable and the connection must be drained.
        let body = response
            .bytes()
            .await
            .map_err(|err| WhoisApiError::read_body(err.to_string()))?;

        debug!(
            domain = name,
            status = status.as_u16(),
            bytes = body.len(),
            "WHOIS lookup response"
        );

        Ok(ApiResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

/// Builder for [`WhoisApiClient`] with custom endpoints and transport.
///
/// # Example
///
/// ```rust,no_run
/// use std::time::Duration;
/// use whois_api_lib::WhoisApiClient;
///
/// let client = WhoisApiClient::builder("at_your_api_key")
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// ```
#[derive(Debug)]
pub struct ClientBuilder {
    api_key: String,
    whois_base_url: Option<Url>,
    historic_base_url: Option<Url>,
    http_client: Option<reqwest::Client>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Override the endpoint for current lookups.
    pub fn whois_base_url(mut self, url: Url) -> Self {
        self.whois_base_url = Some(url);
        self
    }

    /// Override the endpoint for historic lookups.
    pub fn historic_base_url(mut self, url: Url) -> Self {
        self.historic_base_url = Some(url);
        self
    }

    /// Inject a pre-configured HTTP client (proxy, TLS, timeouts). When
    /// set, the builder's [`timeout`](Self::timeout) is ignored.
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Request timeout for the default HTTP client. Cancellation surfaces
    /// as a transport error on the affected call only.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client, constructing a default HTTP transport if none was
    /// injected.
    pub fn build(self) -> Result<WhoisApiClient> {
        let http = match self.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(self.timeout)
                .build()
                .map_err(|err| {
                    WhoisApiError::config(format!("failed to create HTTP client: {}", err))
                })?,
        };

        Ok(WhoisApiClient {
            api_key: self.api_key,
            whois_base_url: self
                .whois_base_url
                .unwrap_or_else(|| default_url(DEFAULT_WHOIS_API_URL)),
            historic_base_url: self
                .historic_base_url
                .unwrap_or_else(|| default_url(DEFAULT_HISTORIC_API_URL)),
            http,
        })
    }
}

fn default_url(raw: &'static str) -> Url {
    // the default endpoints are known-valid literals
    Url::parse(raw).expect("default endpoint URL is valid")
}

fn url_from_env(var: &str) -> Result<Option<Url>> {
    match std::env::var(var) {
        Ok(raw) => {
            let url = Url::parse(&raw)
                .map_err(|err| WhoisApiError::config(format!("invalid {}: {}", var, err)))?;
            Ok(Some(url))
        }
        Err(_) => Ok(None),
    }
}
