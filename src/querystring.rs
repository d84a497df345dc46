use crate::percent_encode::{decode_component, encode_component};

/// Decoded query string: an insertion-ordered map of unique keys.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryMap {
    params: Vec<(String, String)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Get the value for a key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Set a key, replacing the value in place if the key already exists.
    /// Returns the previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        if let Some((_, existing)) = self.params.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(existing, value));
        }
        self.params.push((key, value));
        None
    }

    /// Remove a key, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(index).1)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(_, v)| v.as_str())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for QueryMap {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl From<&str> for QueryMap {
    fn from(s: &str) -> Self {
        parse(s)
    }
}

/// The `query` component of a URL.
///
/// Left as raw text (including its leading `?`) unless query parsing was
/// requested, in which case it holds the decoded map. A custom parser may
/// produce either form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Raw(String),
    Parsed(QueryMap),
}

impl Query {
    /// Raw query text, if the query was not decoded
    pub fn as_raw(&self) -> Option<&str> {
        match self {
            Self::Raw(raw) => Some(raw),
            Self::Parsed(_) => None,
        }
    }

    /// Decoded map, if the query was decoded
    pub fn as_parsed(&self) -> Option<&QueryMap> {
        match self {
            Self::Raw(_) => None,
            Self::Parsed(map) => Some(map),
        }
    }

    /// Look up a key in a decoded query. Raw queries have no keys.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.as_parsed().and_then(|map| map.get(key))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Self::Raw(raw) => raw.is_empty(),
            Self::Parsed(map) => map.is_empty(),
        }
    }
}

impl Default for Query {
    fn default() -> Self {
        Self::Raw(String::new())
    }
}

impl From<QueryMap> for Query {
    fn from(map: QueryMap) -> Self {
        Self::Parsed(map)
    }
}

/// Turns raw query text (leading `?` included) into a [`Query`].
pub trait QueryParser {
    fn parse_query(&self, query: &str) -> Query;
}

impl<F: Fn(&str) -> Query> QueryParser for F {
    fn parse_query(&self, query: &str) -> Query {
        self(query)
    }
}

/// Turns a decoded [`QueryMap`] back into query text.
/// A leading `?` is added by the serializer when missing.
pub trait QueryStringifier {
    fn stringify_query(&self, query: &QueryMap) -> String;
}

impl<F: Fn(&QueryMap) -> String> QueryStringifier for F {
    fn stringify_query(&self, query: &QueryMap) -> String {
        self(query)
    }
}

/// The built-in query codec, backed by [`parse`] and [`stringify`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCodec;

impl QueryParser for DefaultCodec {
    fn parse_query(&self, query: &str) -> Query {
        Query::Parsed(parse(query))
    }
}

impl QueryStringifier for DefaultCodec {
    fn stringify_query(&self, query: &QueryMap) -> String {
        stringify(query)
    }
}

/// Parse a query string (with or without leading `?`) into a map.
///
/// Pairs are `key[=value]` separated by `&`; `?` and `#` never start a key.
/// `+` decodes to a space. Pairs with malformed percent-escapes are skipped
/// and the first occurrence of a key wins.
pub fn parse(query: &str) -> QueryMap {
    let bytes = query.as_bytes();
    let mut map = QueryMap::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let key_len = bytes[pos..]
            .iter()
            .position(|&b| matches!(b, b'=' | b'?' | b'#' | b'&'))
            .unwrap_or(bytes.len() - pos);
        if key_len == 0 {
            pos += 1;
            continue;
        }

        let key_end = pos + key_len;
        let value_start = if bytes.get(key_end) == Some(&b'=') {
            key_end + 1
        } else {
            key_end
        };
        let value_end = memchr::memchr(b'&', &bytes[value_start..])
            .map_or(bytes.len(), |offset| value_start + offset);

        let key = decode_pair_component(&query[pos..key_end]);
        let value = decode_pair_component(&query[value_start..value_end]);
        pos = value_end;

        let (Some(key), Some(value)) = (key, value) else {
            continue;
        };
        if !map.contains_key(&key) {
            map.insert(key, value);
        }
    }

    map
}

/// Serialize a map as `key=value` pairs joined by `&`, without prefix.
pub fn stringify(query: &QueryMap) -> String {
    stringify_with_prefix(query, "")
}

/// Serialize a map and prepend `prefix`. An empty map yields an empty string
/// without prefix.
pub fn stringify_with_prefix(query: &QueryMap, prefix: &str) -> String {
    if query.is_empty() {
        return String::new();
    }

    let mut result = String::from(prefix);
    for (i, (key, value)) in query.iter().enumerate() {
        if i > 0 {
            result.push('&');
        }
        result.push_str(&encode_component(key));
        result.push('=');
        result.push_str(&encode_component(value));
    }
    result
}

fn decode_pair_component(input: &str) -> Option<String> {
    if input.contains('+') {
        decode_component(&input.replace('+', " "))
    } else {
        decode_component(input)
    }
}
