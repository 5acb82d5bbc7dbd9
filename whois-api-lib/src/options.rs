//! Query options for WHOIS lookups.
//!
//! The vendor takes its knobs as integer-valued query parameters layered
//! onto the base request. [`LookupOptions`] is a builder over that
//! parameter set: each setter owns exactly one named parameter, and a
//! later call for the same parameter wins.

use std::collections::BTreeMap;
use std::fmt;

// Wire parameter names.
pub(crate) const PARAM_API_KEY: &str = "apiKey";
pub(crate) const PARAM_DOMAIN_NAME: &str = "domainName";
pub(crate) const PARAM_OUTPUT_FORMAT: &str = "outputFormat";
const PARAM_PREFER_FRESH: &str = "preferFresh";
const PARAM_DA: &str = "da";
const PARAM_IP: &str = "ip";
const PARAM_IP_WHOIS: &str = "ipWhois";
const PARAM_CHECK_PROXY_DATA: &str = "checkProxyData";
const PARAM_THIN_WHOIS: &str = "thinWhois";
const PARAM_IGNORE_RAW_TEXTS: &str = "ignoreRawTexts";

/// Response body format, sent uppercase on the wire.
///
/// The typed-record operation always pins this to JSON; the raw operation
/// honors the caller's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Xml,
}

impl OutputFormat {
    /// The wire spelling of this format.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Xml => "XML",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional parameters for a WHOIS lookup.
///
/// # Example
///
/// ```rust
/// use whois_api_lib::{LookupOptions, OutputFormat};
///
/// let opts = LookupOptions::new()
///     .output_format(OutputFormat::Json)
///     .domain_availability(2)
///     .resolve_ips(1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LookupOptions {
    output_format: Option<OutputFormat>,
    prefer_fresh: Option<u8>,
    domain_availability: Option<u8>,
    resolve_ips: Option<u8>,
    ip_whois: Option<u8>,
    check_proxy_data: Option<u8>,
    thin_whois: Option<u8>,
    ignore_raw_texts: Option<u8>,
}

impl LookupOptions {
    /// Create an empty option set; only `apiKey` and `domainName` will be
    /// sent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Response output format, `JSON` or `XML`.
    pub fn output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = Some(format);
        self
    }

    /// Return the latest WHOIS record even if it is incomplete.
    pub fn prefer_fresh(mut self, value: u8) -> Self {
        self.prefer_fresh = Some(value);
        self
    }

    /// Quick check on domain availability (`da`). The vendor accepts 0–2;
    /// 2 is the slower, more accurate check.
    pub fn domain_availability(mut self, value: u8) -> Self {
        self.domain_availability = Some(value);
        self
    }

    /// Return IP addresses for the domain name (`ip`).
    pub fn resolve_ips(mut self, value: u8) -> Self {
        self.resolve_ips = Some(value);
        self
    }

    /// Fall back to the WHOIS record for the hosting IP when the input
    /// domain's TLD is not supported.
    pub fn ip_whois(mut self, value: u8) -> Self {
        self.ip_whois = Some(value);
        self
    }

    /// Fetch proxy/WHOIS-guard data, if it exists.
    pub fn check_proxy_data(mut self, value: u8) -> Self {
        self.check_proxy_data = Some(value);
        self
    }

    /// Return WHOIS data from the registry only, without fetching data
    /// from the registrar.
    pub fn thin_whois(mut self, value: u8) -> Self {
        self.thin_whois = Some(value);
        self
    }

    /// Strip all raw text from the output.
    pub fn ignore_raw_texts(mut self, value: u8) -> Self {
        self.ignore_raw_texts = Some(value);
        self
    }

    /// Write the set parameters into the query map. Parameters share the
    /// map with `apiKey`/`domainName`, so writes here overwrite any earlier
    /// value under the same name.
    pub(crate) fn apply(&self, params: &mut BTreeMap<&'static str, String>) {
        if let Some(format) = self.output_format {
            params.insert(PARAM_OUTPUT_FORMAT, format.as_str().to_owned());
        }
        if let Some(value) = self.prefer_fresh {
            params.insert(PARAM_PREFER_FRESH, value.to_string());
        }
        if let Some(value) = self.domain_availability {
            params.insert(PARAM_DA, value.to_string());
        }
        if let Some(value) = self.resolve_ips {
            params.insert(PARAM_IP, value.to_string());
        }
        if let Some(value) = self.ip_whois {
            params.insert(PARAM_IP_WHOIS, value.to_string());
        }
        if let Some(value) = self.check_proxy_data {
            params.insert(PARAM_CHECK_PROXY_DATA, value.to_string());
        }
        if let Some(value) = self.thin_whois {
            params.insert(PARAM_THIN_WHOIS, value.to_string());
        }
        if let Some(value) = self.ignore_raw_texts {
            params.insert(PARAM_IGNORE_RAW_TEXTS, value.to_string());
        }
    }
}
