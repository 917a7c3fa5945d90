//! Ambient query parameters.
//!
//! [`QueryParams`] is an immutable, ordered multi-map. Every modification
//! returns a new map, so a caller's parameters are never changed in place.

use std::borrow::Cow;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

#[cfg(test)]
use mockall::automock;

use crate::errors::{AppError, AppResult};

/// Characters left as-is in form-encoded keys and values.
const FORM_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'.')
    .remove(b'-')
    .remove(b'~');

/// Ordered query parameters. A key may carry several values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a raw query string (without the leading `?`).
    ///
    /// Fails when a decoded key or value is not valid UTF-8.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.strip_prefix('?').unwrap_or(raw);
        let pairs = raw
            .split('&')
            .filter(|segment| !segment.is_empty())
            .map(|segment| -> AppResult<(String, String)> {
                let (key, value) = segment.split_once('=').unwrap_or((segment, ""));
                Ok((decode(key)?, decode(value)?))
            })
            .collect::<AppResult<Vec<_>>>()?;

        Ok(Self { pairs })
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copy with an extra value appended for `key`.
    pub fn appended(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut pairs = self.pairs.clone();
        pairs.push((key.into(), value.into()));
        Self { pairs }
    }

    /// Copy with `key` set to a single value.
    ///
    /// An existing key keeps its position; its other values are dropped.
    /// A new key goes last.
    pub fn with(&self, key: &str, value: impl Into<String>) -> Self {
        let value = value.into();
        let mut pairs = Vec::with_capacity(self.pairs.len() + 1);
        let mut placed = false;
        for (k, v) in &self.pairs {
            if k != key {
                pairs.push((k.clone(), v.clone()));
            } else if !placed {
                pairs.push((k.clone(), value.clone()));
                placed = true;
            }
        }
        if !placed {
            pairs.push((key.to_string(), value));
        }
        Self { pairs }
    }

    /// Copy with every value for `key` removed.
    pub fn without(&self, key: &str) -> Self {
        Self {
            pairs: self
                .pairs
                .iter()
                .filter(|(k, _)| k != key)
                .cloned()
                .collect(),
        }
    }

    /// Form-encode as `k=v` pairs joined by `&`, in insertion order.
    pub fn encode(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| format!("{}={}", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn encode(s: &str) -> String {
    // '%' is always escaped, so "%20" can only come from a space.
    utf8_percent_encode(s, FORM_ENCODE_SET)
        .to_string()
        .replace("%20", "+")
}

fn decode(s: &str) -> AppResult<String> {
    let plus_decoded: Cow<'_, str> = if s.contains('+') {
        Cow::Owned(s.replace('+', " "))
    } else {
        Cow::Borrowed(s)
    };

    percent_decode_str(&plus_decoded)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|e| AppError::query_unavailable(format!("{:?} is not valid UTF-8: {}", s, e)))
}

/// Source of the query parameters to preserve in generated links.
///
/// Returns an owned copy; reading the source may fail.
#[cfg_attr(test, automock)]
pub trait QuerySource: Send + Sync {
    fn query_params(&self) -> AppResult<QueryParams>;
}

impl QuerySource for QueryParams {
    fn query_params(&self) -> AppResult<QueryParams> {
        Ok(self.clone())
    }
}
