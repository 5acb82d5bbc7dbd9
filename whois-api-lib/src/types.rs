//! Data model for WhoisXML API responses.
//!
//! These types mirror the vendor's JSON contract. Every field carries a
//! serde default because the vendor omits whatever its parser could not
//! fill in; normalized timestamp fields can be empty even when the
//! corresponding raw string field is present.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wire format used by the vendor for timestamps, minus the zone token.
const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point in time in the vendor's own textual format.
///
/// The WhoisXML API encodes timestamps as `YYYY-MM-DD HH:MM:SS ZONE`
/// (e.g. `2022-04-07 07:42:54 UTC`), which matches no standard interchange
/// format. The zone token is kept verbatim so that decoding a valid string
/// and re-encoding it yields the identical text.
///
/// The empty string round-trips to and from [`WhoisTime::default`] rather
/// than failing: the vendor emits `""` for timestamps it could not
/// normalize.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WhoisTime(Option<ZonedStamp>);

#[derive(Debug, Clone, PartialEq, Eq)]
struct ZonedStamp {
    stamp: NaiveDateTime,
    zone: String,
}

impl WhoisTime {
    /// Build a timestamp from its civil time and a zone designator.
    pub fn new<Z: Into<String>>(stamp: NaiveDateTime, zone: Z) -> Self {
        Self(Some(ZonedStamp {
            stamp,
            zone: zone.into(),
        }))
    }

    /// Whether this is the empty sentinel (encoded as `""` on the wire).
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The civil date and time, if present.
    pub fn datetime(&self) -> Option<NaiveDateTime> {
        self.0.as_ref().map(|z| z.stamp)
    }

    /// The zone designator exactly as the vendor sent it, if present.
    pub fn zone(&self) -> Option<&str> {
        self.0.as_ref().map(|z| z.zone.as_str())
    }
}

/// Failure to decode a vendor timestamp string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhoisTimeError {
    /// The string has no ` ZONE` suffix after the civil time
    MissingZone,
    /// The civil-time part does not match `YYYY-MM-DD HH:MM:SS`
    Timestamp(chrono::ParseError),
}

impl fmt::Display for WhoisTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingZone => write!(f, "missing timezone designator"),
            Self::Timestamp(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for WhoisTimeError {}

impl FromStr for WhoisTime {
    type Err = WhoisTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::default());
        }

        // The zone is everything after the last space; the civil time in
        // front of it contains exactly one space itself.
        let (stamp_part, zone) = s.rsplit_once(' ').ok_or(WhoisTimeError::MissingZone)?;
        if zone.is_empty() {
            return Err(WhoisTimeError::MissingZone);
        }

        let stamp = NaiveDateTime::parse_from_str(stamp_part, TIME_FORMAT)
            .map_err(WhoisTimeError::Timestamp)?;

        Ok(Self::new(stamp, zone))
    }
}

impl fmt::Display for WhoisTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Some(zoned) => write!(f, "{} {}", zoned.stamp.format(TIME_FORMAT), zoned.zone),
            None => Ok(()),
        }
    }
}

impl Serialize for WhoisTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for WhoisTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The vendor sends `null` for empty lists; treat it like a missing field.
fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Dates when the record was added and updated in the vendor's database.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Audit {
    /// When this record was collected by the vendor
    pub created_date: WhoisTime,

    /// When this record was last updated by the vendor
    pub updated_date: WhoisTime,
}

/// A contact party on a WHOIS record (registrant, admin, technical, ...).
///
/// Free-form postal and contact data; `raw_text` is the vendor's raw
/// source text and `unparsable` holds whatever its parser could not
/// structure.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub organization: String,
    pub street1: String,
    pub street2: String,
    pub street3: String,
    pub street4: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    pub country_code: String,
    pub email: String,
    pub telephone: String,
    pub telephone_ext: String,
    pub fax: String,
    pub fax_ext: String,
    /// Complete raw text of the contact's data
    pub raw_text: String,
    /// Part of the raw text the vendor's parser could not structure
    pub unparsable: String,
}

/// Name servers for the domain name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NameServers {
    /// Complete raw text of the name servers' data
    pub raw_text: String,

    /// Name servers' hostnames
    #[serde(deserialize_with = "null_default")]
    pub host_names: Vec<String>,

    /// Name servers' IP addresses
    #[serde(deserialize_with = "null_default")]
    pub ips: Vec<String>,
}

/// Fields shared by registrar-level and registry-level WHOIS records.
///
/// The vendor nests a registry-level record inside the registrar-level
/// one; both carry this core. Raw date strings and their normalized
/// [`WhoisTime`] counterparts are independent: the vendor may return raw
/// text it failed to normalize.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RecordBase {
    pub domain_name: String,

    /// Normalized registration date
    pub created_date_normalized: WhoisTime,

    /// Normalized date of the last WHOIS data update
    pub updated_date_normalized: WhoisTime,

    /// Normalized expiration date
    pub expires_date_normalized: WhoisTime,

    /// Registration date as the registry/registrar formatted it
    pub created_date: String,

    /// Last-update date as the registry/registrar formatted it
    pub updated_date: String,

    /// Expiration date as the registry/registrar formatted it
    pub expires_date: String,

    /// When the vendor collected and refreshed this record
    pub audit: Audit,

    pub name_servers: NameServers,

    /// Organization managing the reservation of the domain name
    pub registrar_name: String,

    /// IANA ID of the registrar
    #[serde(rename = "registrarIANAID")]
    pub registrar_iana_id: String,

    /// Status codes for the domain name, space-separated
    pub status: String,

    /// Complete raw text of the WHOIS record
    pub raw_text: String,

    /// Bitmask indicating which fields the vendor's parser filled in
    pub parse_code: i64,

    /// Owner of the domain name
    pub registrant: Contact,

    pub administrative_contact: Contact,
    pub technical_contact: Contact,
    pub billing_contact: Contact,
    pub zone_contact: Contact,

    /// Raw text up until the first identifiable field
    pub header: String,

    /// Raw text after the last identifiable field
    pub footer: String,

    /// Raw text between header and footer; identifiable fields only
    pub stripped_text: String,
}

/// The WHOIS record from the domain name registry.
///
/// A domain name has up to two records, one from the registry and one
/// from the registrar; this is the registry-level one, embedded in
/// [`WhoisRecord::registry_data`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistryData {
    #[serde(flatten)]
    pub base: RecordBase,

    /// Name of the WHOIS server
    pub whois_server: String,

    /// Referral URL
    #[serde(rename = "referralURL")]
    pub referral_url: String,
}

/// A parsed WHOIS record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WhoisRecord {
    #[serde(flatten)]
    pub base: RecordBase,

    /// Registry-level record, when the vendor fetched one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registry_data: Option<RegistryData>,

    /// Contact email of the record
    pub contact_email: String,

    /// Result of the domain availability check (when requested)
    pub domain_availability: String,

    /// Domain name extension/suffix
    pub domain_name_ext: String,

    /// Estimated age of the domain in days
    pub estimated_domain_age: i64,

    /// IP addresses for the domain name (when requested)
    #[serde(deserialize_with = "null_default")]
    pub ips: Vec<String>,

    /// Name/value of the first custom field detected by the vendor's parser
    pub custom1_field_name: String,
    pub custom1_field_value: String,

    /// Name/value of the second custom field detected by the vendor's parser
    pub custom2_field_name: String,
    pub custom2_field_value: String,

    /// Name/value of the third custom field detected by the vendor's parser
    pub custom3_field_name: String,
    pub custom3_field_value: String,

    /// Data error text
    pub data_error: String,

    /// Sub-records nested under this record (strictly a tree)
    #[serde(deserialize_with = "null_default")]
    pub sub_records: Vec<WhoisRecord>,
}

/// Structured error object the service embeds in the JSON payload when
/// domain-level processing failed (e.g. invalid domain syntax). Can arrive
/// with HTTP status 200.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorMessage {
    /// Short vendor error code, e.g. `WHOIS_00`
    #[serde(rename = "errorCode")]
    pub error_code: String,

    /// Human-readable error text
    #[serde(rename = "msg")]
    pub message: String,
}

impl fmt::Display for ErrorMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error: [{}] {}", self.error_code, self.message)
    }
}

impl std::error::Error for ErrorMessage {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_round_trips_valid_strings() {
        for raw in ["2006-01-02 15:04:05 EST", "2006-01-02 12:04:05 UTC"] {
            let parsed: WhoisTime = raw.parse().unwrap();
            assert!(!parsed.is_empty());
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn time_empty_string_is_the_sentinel() {
        let parsed: WhoisTime = "".parse().unwrap();
        assert!(parsed.is_empty());
        assert_eq!(parsed, WhoisTime::default());
        assert_eq!(parsed.to_string(), "");
    }

    #[test]
    fn time_rejects_iso8601() {
        let err = "2006-01-02T15:04:05-07:00".parse::<WhoisTime>().unwrap_err();
        assert_eq!(err, WhoisTimeError::MissingZone);

        let err = "2006-01-02 15:04:05".parse::<WhoisTime>().unwrap_err();
        assert!(matches!(err, WhoisTimeError::Timestamp(_)));
    }

    #[test]
    fn time_json_round_trip() {
        for raw in [r#""2006-01-02 15:04:05 EST""#, r#""""#] {
            let parsed: WhoisTime = serde_json::from_str(raw).unwrap();
            assert_eq!(serde_json::to_string(&parsed).unwrap(), raw);
        }
    }

    #[test]
    fn time_accessors() {
        let parsed: WhoisTime = "2022-04-07 07:42:54 UTC".parse().unwrap();
        assert_eq!(parsed.zone(), Some("UTC"));
        assert_eq!(
            parsed.datetime().unwrap().format("%H:%M:%S").to_string(),
            "07:42:54"
        );
    }

    #[test]
    fn contact_decodes_all_fields() {
        let contact: Contact = serde_json::from_str(
            r#"{
                "name": "cont-name",
                "organization": "cont-org",
                "street1": "cont-street1",
                "city": "cont-city",
                "state": "cont-state",
                "postalCode": "cont-postalCode",
                "country": "cont-country",
                "countryCode": "cont-countryCode",
                "email": "cont-email",
                "telephone": "cont-telephone",
                "telephoneExt": "cont-telephoneExt",
                "fax": "cont-fax",
                "faxExt": "cont-faxExt",
                "rawText": "cont-rawText",
                "unparsable": "cont-unparsable"
            }"#,
        )
        .unwrap();

        assert_eq!(contact.name, "cont-name");
        assert_eq!(contact.postal_code, "cont-postalCode");
        assert_eq!(contact.country_code, "cont-countryCode");
        assert_eq!(contact.telephone_ext, "cont-telephoneExt");
        assert_eq!(contact.unparsable, "cont-unparsable");
        // omitted fields default to empty
        assert_eq!(contact.street2, "");
    }

    #[test]
    fn contact_decodes_empty_object() {
        let contact: Contact = serde_json::from_str("{}").unwrap();
        assert_eq!(contact, Contact::default());
    }

    #[test]
    fn name_servers_accept_null_lists() {
        let servers: NameServers =
            serde_json::from_str(r#"{"rawText":"","hostNames":null,"ips":null}"#).unwrap();
        assert!(servers.host_names.is_empty());
        assert!(servers.ips.is_empty());

        let servers: NameServers = serde_json::from_str(
            r#"{
                "rawText": "",
                "hostNames": ["CARL.NS.CLOUDFLARE.COM", "ELLE.NS.CLOUDFLARE.COM"],
                "ips": ["104.26.13.210", "172.67.71.123"]
            }"#,
        )
        .unwrap();
        assert_eq!(servers.host_names.len(), 2);
        assert_eq!(servers.ips[0], "104.26.13.210");
    }

    #[test]
    fn record_decodes_flattened_core() {
        let record: WhoisRecord = serde_json::from_str(
            r#"{
                "createdDate": "2009-03-19T21:47:17Z",
                "updatedDate": "2021-12-26T09:13:06Z",
                "expiresDate": "2027-03-19T21:47:17Z",
                "domainName": "whoisxmlapi.com",
                "status": "clientTransferProhibited",
                "parseCode": 3515,
                "audit": {
                    "createdDate": "2022-04-07 07:42:54 UTC",
                    "updatedDate": "2022-04-07 07:42:54 UTC"
                },
                "registrarName": "GoDaddy.com, LLC",
                "registrarIANAID": "146",
                "contactEmail": "abuse@godaddy.com",
                "domainNameExt": ".com",
                "estimatedDomainAge": 4766
            }"#,
        )
        .unwrap();

        assert_eq!(record.base.domain_name, "whoisxmlapi.com");
        assert_eq!(record.base.registrar_name, "GoDaddy.com, LLC");
        assert_eq!(record.base.registrar_iana_id, "146");
        assert_eq!(record.base.parse_code, 3515);
        assert_eq!(record.contact_email, "abuse@godaddy.com");
        assert_eq!(record.estimated_domain_age, 4766);

        // raw date strings survive untouched; the normalized fields were
        // absent and stay empty
        assert_eq!(record.base.created_date, "2009-03-19T21:47:17Z");
        assert!(record.base.created_date_normalized.is_empty());
        assert_eq!(record.base.audit.created_date.zone(), Some("UTC"));

        assert!(record.registry_data.is_none());
        assert!(record.sub_records.is_empty());
    }

    #[test]
    fn record_decodes_nested_registry_data_and_sub_records() {
        let record: WhoisRecord = serde_json::from_str(
            r#"{
                "domainName": "example.com",
                "registryData": {
                    "domainName": "example.com",
                    "whoisServer": "whois.verisign-grs.com",
                    "referralURL": "http://res-dom.iana.org",
                    "createdDateNormalized": "1995-08-14 04:00:00 UTC"
                },
                "subRecords": [
                    {"domainName": "sub.example.com"}
                ]
            }"#,
        )
        .unwrap();

        let registry = record.registry_data.as_ref().unwrap();
        assert_eq!(registry.whois_server, "whois.verisign-grs.com");
        assert_eq!(registry.referral_url, "http://res-dom.iana.org");
        assert_eq!(
            registry.base.created_date_normalized.to_string(),
            "1995-08-14 04:00:00 UTC"
        );

        assert_eq!(record.sub_records.len(), 1);
        assert_eq!(record.sub_records[0].base.domain_name, "sub.example.com");
    }

    #[test]
    fn error_message_display() {
        let message = ErrorMessage {
            error_code: "WHOIS_00".to_string(),
            message: "test error message".to_string(),
        };
        assert_eq!(message.to_string(), "API error: [WHOIS_00] test error message");
    }

    #[test]
    fn error_message_decodes_wire_keys() {
        let message: ErrorMessage =
            serde_json::from_str(r#"{"errorCode": "WHOIS_00", "msg": "test error message"}"#)
                .unwrap();
        assert_eq!(message.error_code, "WHOIS_00");
        assert_eq!(message.message, "test error message");
    }
}
