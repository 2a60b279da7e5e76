//! API models for the Ticketmaster Commerce API
//!
//! The remote document is loosely shaped: almost every field may be missing
//! or `null`. Each optional field is an `Option`, and collections that may be
//! absent deserialize to an empty `Vec`. Inside an offer a value of the wrong
//! shape is treated as missing rather than failing the whole document.

use crate::error::{Result, TicketmasterError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// Base URL used when none has been configured.
pub const DEFAULT_BASE_URL: &str = "https://www.ticketmaster.com/commerce/v2";

/// Treat an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Optional field; a value of the wrong shape counts as absent.
fn lenient<'de, D, T>(deserializer: D) -> std::result::Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

/// Field with a fallback; `null` or a value of the wrong shape yields the default.
fn lenient_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Free-text field: strings verbatim, any other non-null value in its JSON form.
fn text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        other => Some(other.to_string()),
    })
}

/// A display value the API sends either as a string or as a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => f.write_str(s),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Scalar::Text(value.to_string())
    }
}

/// One price tier of an offer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    /// Seating/price category; shown as "General" when absent
    #[serde(default, deserialize_with = "text")]
    pub price_zone: Option<String>,
    /// Face value
    #[serde(default, deserialize_with = "lenient")]
    pub value: Option<Scalar>,
    /// Total including fees
    #[serde(default, deserialize_with = "lenient")]
    pub total: Option<Scalar>,
}

/// Purchase quantity limits
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Limit {
    #[serde(default, deserialize_with = "lenient")]
    pub min: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient")]
    pub max: Option<Scalar>,
}

/// Descriptive attributes of an offer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferAttributes {
    #[serde(default, deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub offer_type: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub prices: Vec<Price>,
    #[serde(default, deserialize_with = "lenient")]
    pub limit: Option<Limit>,
    /// Start of the availability window
    #[serde(default, deserialize_with = "text")]
    pub start: Option<String>,
    /// End of the availability window
    #[serde(default, deserialize_with = "text")]
    pub end: Option<String>,
}

impl OfferAttributes {
    /// Whether any part of the availability window is known.
    pub fn has_availability(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }
}

/// A purchasable ticket package for an event
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(default, deserialize_with = "lenient")]
    pub id: Option<Scalar>,
    #[serde(default, deserialize_with = "lenient_default")]
    pub attributes: OfferAttributes,
}

/// An embedded collection, either a bare array or a `{ "data": [...] }` document.
///
/// Only the number of entries is ever consumed. Any other shape is kept as
/// [`EmbeddedCollection::Other`] and counts as empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EmbeddedCollection {
    Items(Vec<Value>),
    Document {
        #[serde(default, deserialize_with = "null_as_default")]
        data: Vec<Value>,
    },
    Other(Value),
}

impl EmbeddedCollection {
    pub fn len(&self) -> usize {
        match self {
            EmbeddedCollection::Items(items) => items.len(),
            EmbeddedCollection::Document { data } => data.len(),
            EmbeddedCollection::Other(_) => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Known kinds of embedded collection, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbeddedKind {
    PriceZones,
    Areas,
    Passwords,
}

impl EmbeddedKind {
    pub const ALL: [EmbeddedKind; 3] = [
        EmbeddedKind::PriceZones,
        EmbeddedKind::Areas,
        EmbeddedKind::Passwords,
    ];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            EmbeddedKind::PriceZones => "Price Zones",
            EmbeddedKind::Areas => "Areas",
            EmbeddedKind::Passwords => "Password Protected",
        }
    }
}

/// Supplementary data attached alongside the offer list.
///
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Embedded {
    #[serde(rename = "priceZones")]
    pub price_zones: Option<EmbeddedCollection>,
    pub areas: Option<EmbeddedCollection>,
    pub passwords: Option<EmbeddedCollection>,
}

impl Embedded {
    pub fn get(&self, kind: EmbeddedKind) -> Option<&EmbeddedCollection> {
        match kind {
            EmbeddedKind::PriceZones => self.price_zones.as_ref(),
            EmbeddedKind::Areas => self.areas.as_ref(),
            EmbeddedKind::Passwords => self.passwords.as_ref(),
        }
    }

    /// Counts of every known collection that is present and non-empty.
    pub fn counts(&self) -> Vec<(EmbeddedKind, usize)> {
        EmbeddedKind::ALL
            .iter()
            .filter_map(|&kind| {
                self.get(kind)
                    .map(EmbeddedCollection::len)
                    .filter(|&len| len > 0)
                    .map(|len| (kind, len))
            })
            .collect()
    }
}

/// Top-level result of an offers query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OffersResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub offers: Vec<Offer>,
    #[serde(rename = "_embedded", default, deserialize_with = "lenient")]
    pub embedded: Option<Embedded>,
}

impl OffersResponse {
    /// Interpret a raw response document.
    ///
    /// # Errors
    ///
    /// Returns [`TicketmasterError::Decode`] if the document or its offer list
    /// is not the expected shape. Fields inside an offer never fail the decode.
    pub fn from_value(value: &Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Self::default());
        }

        serde_json::from_value(value.clone()).map_err(|e| TicketmasterError::Decode(e.to_string()))
    }
}
