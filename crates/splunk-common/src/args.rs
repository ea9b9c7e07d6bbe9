use serde::Serialize;
use smol_str::{SmolStr, ToSmolStr};
use std::collections::BTreeMap;
use std::collections::btree_map;

use crate::error::EncodeResult;

/// A single argument value.
///
/// Enumerations are stored as [`ArgValue::Str`] holding their wire value, so
/// the map never carries a symbolic variant name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum ArgValue {
    /// Integer, rendered as decimal text
    Int(i64),
    /// Plain string, rendered as-is
    Str(SmolStr),
    /// Ordered list, rendered as one repeated parameter per element
    List(Vec<SmolStr>),
}

impl ArgValue {
    /// The query values this argument expands to, in order.
    pub fn query_values(&self) -> Vec<SmolStr> {
        match self {
            ArgValue::Int(n) => vec![n.to_smolstr()],
            ArgValue::Str(s) => vec![s.clone()],
            ArgValue::List(items) => items.clone(),
        }
    }

    /// Returns the integer, if this is an [`ArgValue::Int`].
    pub fn as_int(&self) -> Option<i64> {
        match self {
            ArgValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is an [`ArgValue::Str`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the list, if this is an [`ArgValue::List`].
    pub fn as_list(&self) -> Option<&[SmolStr]> {
        match self {
            ArgValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value.into())
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::Int(value.into())
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(SmolStr::new(value))
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value.into())
    }
}

impl From<SmolStr> for ArgValue {
    fn from(value: SmolStr) -> Self {
        ArgValue::Str(value)
    }
}

impl From<Vec<SmolStr>> for ArgValue {
    fn from(value: Vec<SmolStr>) -> Self {
        ArgValue::List(value)
    }
}

/// Arguments for a single REST call, keyed by their query parameter name.
///
/// Each key holds exactly one value; setting a key again replaces the old
/// value. Keys iterate in sorted order so the encoded query is stable.
///
/// Typed argument sets (see [`args_struct!`](crate::args_struct)) wrap an
/// `Args` and only hand out shared references to it, which keeps their keys
/// to the fixed set their setters define.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Args(BTreeMap<&'static str, ArgValue>);

impl Args {
    /// Create an empty argument map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value.
    pub fn set(&mut self, key: &'static str, value: impl Into<ArgValue>) -> &mut Self {
        self.0.insert(key, value.into());
        self
    }

    /// Look up the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&ArgValue> {
        self.0.get(key)
    }

    /// Whether `key` has been set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of keys set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no key has been set.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over every `(key, value)` entry in key order.
    pub fn iter(&self) -> btree_map::Iter<'_, &'static str, ArgValue> {
        self.0.iter()
    }

    /// Flatten into `(key, value)` query pairs.
    ///
    /// Lists turn into one pair per element under the same key, in list order.
    /// Keys that were never set don't appear at all.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, SmolStr)> {
        self.0
            .iter()
            .flat_map(|(key, value)| {
                value
                    .query_values()
                    .into_iter()
                    .map(move |v| (*key, v))
            })
            .collect()
    }

    /// Encode as `application/x-www-form-urlencoded`.
    ///
    /// An empty map encodes to an empty string.
    pub fn to_query_string(&self) -> EncodeResult<String> {
        Ok(serde_html_form::to_string(self.to_query_pairs())?)
    }
}

impl<'a> IntoIterator for &'a Args {
    type Item = (&'a &'static str, &'a ArgValue);
    type IntoIter = btree_map::Iter<'a, &'static str, ArgValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: Into<ArgValue>> FromIterator<(&'static str, V)> for Args {
    fn from_iter<T: IntoIterator<Item = (&'static str, V)>>(iter: T) -> Self {
        let mut args = Args::new();
        args.extend(iter);
        args
    }
}

impl<V: Into<ArgValue>> Extend<(&'static str, V)> for Args {
    fn extend<T: IntoIterator<Item = (&'static str, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}
