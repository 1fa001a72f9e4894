//! Decimal strings for big integers. Every number in the election record is written as a decimal
//! string so that no precision is lost in transit.
use crate::BigInt;
use crypto_bigint::{CheckedAdd, CheckedMul};
use std::fmt;
use thiserror::Error;

/// Number of decimal digits that always fit in one 64-bit word
const CHUNK_DIGITS: usize = 19;
const CHUNK: u64 = 10_000_000_000_000_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecimalError {
    #[error("empty string")]
    Empty,

    #[error("unexpected character {0:?}")]
    InvalidDigit(char),

    #[error("value does not fit in {} bits", BigInt::BITS)]
    Overflow,
}

/// Parse a string of ASCII digits. Signs, whitespace and separators are rejected.
pub fn parse(text: &str) -> Result<BigInt, DecimalError> {
    if text.is_empty() {
        return Err(DecimalError::Empty);
    }
    if let Some(bad) = text.chars().find(|c| !c.is_ascii_digit()) {
        return Err(DecimalError::InvalidDigit(bad));
    }

    // the leading chunk is short so that every following chunk is exactly CHUNK_DIGITS long
    let head = text.len() % CHUNK_DIGITS;
    let mut value = BigInt::ZERO;
    let mut start = 0;
    let mut end = if head == 0 { CHUNK_DIGITS } else { head };
    while start < text.len() {
        let digits = &text[start..end];
        let chunk: u64 = digits
            .parse()
            .map_err(|_| DecimalError::InvalidDigit(digits.chars().next().unwrap_or('?')))?;
        let scale = 10u64.pow((end - start) as u32);
        let scaled = Option::<BigInt>::from(value.checked_mul(&BigInt::from_u64(scale)))
            .ok_or(DecimalError::Overflow)?;
        value = Option::<BigInt>::from(scaled.checked_add(&BigInt::from_u64(chunk)))
            .ok_or(DecimalError::Overflow)?;
        start = end;
        end += CHUNK_DIGITS;
    }
    return Ok(value);
}

/// Render the value in base 10 without leading zeros
pub fn format(value: &BigInt) -> String {
    if *value == BigInt::ZERO {
        return "0".to_string();
    }
    let chunk = BigInt::from_u64(CHUNK);

    let mut chunks: Vec<u64> = vec![];
    let mut rest = *value;
    while rest != BigInt::ZERO {
        chunks.push(rest.wrapping_rem(&chunk).as_words()[0] as u64);
        rest = rest.wrapping_div(&chunk);
    }

    let mut text = String::with_capacity(chunks.len() * CHUNK_DIGITS);
    let mut iter = chunks.iter().rev();
    if let Some(first) = iter.next() {
        text.push_str(&first.to_string());
    }
    for chunk in iter {
        text.push_str(&format!("{chunk:019}"));
    }
    return text;
}

/// Serde adapter, use with `#[serde(with = "crate::decimal")]`
pub fn serialize<S>(value: &BigInt, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format(value))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<BigInt, D::Error>
where
    D: serde::Deserializer<'de>,
{
    deserializer.deserialize_any(DecimalVisitor)
}

/// Serde adapter for optional values, use with `#[serde(default, with = "crate::decimal::option")]`
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<BigInt>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&format(value)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<BigInt>, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let text: Option<serde_json::Value> = serde::Deserialize::deserialize(deserializer)?;
        match text {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(value) => super::deserialize(value)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

struct DecimalVisitor;

impl<'de> serde::de::Visitor<'de> for DecimalVisitor {
    type Value = BigInt;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a non-negative integer written as a decimal string")
    }

    fn visit_str<E: serde::de::Error>(self, text: &str) -> Result<BigInt, E> {
        parse(text).map_err(E::custom)
    }

    fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<BigInt, E> {
        Ok(BigInt::from_u64(value))
    }
}
