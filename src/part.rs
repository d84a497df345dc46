use core::fmt;
use core::str::FromStr;

use crate::error::Error;
use crate::querystring::{QueryMap, QueryParser, stringify};

/// A settable part of a [`Url`](crate::Url).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Part {
    Protocol,
    Slashes,
    Auth,
    Username,
    Password,
    Host,
    Hostname,
    Port,
    Pathname,
    Query,
    Hash,
    /// Replaces the whole URL by parsing the value
    Href,
}

impl Part {
    /// The field name as used in the URL object model
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Protocol => "protocol",
            Self::Slashes => "slashes",
            Self::Auth => "auth",
            Self::Username => "username",
            Self::Password => "password",
            Self::Host => "host",
            Self::Hostname => "hostname",
            Self::Port => "port",
            Self::Pathname => "pathname",
            Self::Query => "query",
            Self::Hash => "hash",
            Self::Href => "href",
        }
    }
}

impl FromStr for Part {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let part = match name {
            "protocol" => Self::Protocol,
            "slashes" => Self::Slashes,
            "auth" => Self::Auth,
            "username" => Self::Username,
            "password" => Self::Password,
            "host" => Self::Host,
            "hostname" => Self::Hostname,
            "port" => Self::Port,
            "pathname" => Self::Pathname,
            "query" => Self::Query,
            "hash" => Self::Hash,
            "href" => Self::Href,
            _ => return Err(Error::UnknownPart),
        };
        Ok(part)
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A value assigned to a URL part.
///
/// Text parts accept any variant; non-text values are converted the way a
/// browser would coerce them (`8080` becomes `"8080"`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    Number(i64),
    Bool(bool),
    Query(QueryMap),
}

impl Value {
    /// Text form of the value. A query map is serialized without prefix.
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
            Self::Bool(flag) => flag.to_string(),
            Self::Query(map) => stringify(&map),
        }
    }

    /// Truthiness of the value, used for boolean parts
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Text(text) => !text.is_empty(),
            Self::Number(number) => *number != 0,
            Self::Bool(flag) => *flag,
            Self::Query(_) => true,
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Value {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&String> for Value {
    fn from(text: &String) -> Self {
        Self::Text(text.clone())
    }
}

impl From<bool> for Value {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i32> for Value {
    fn from(number: i32) -> Self {
        Self::Number(i64::from(number))
    }
}

impl From<i64> for Value {
    fn from(number: i64) -> Self {
        Self::Number(number)
    }
}

impl From<u16> for Value {
    fn from(number: u16) -> Self {
        Self::Number(i64::from(number))
    }
}

impl From<u32> for Value {
    fn from(number: u32) -> Self {
        Self::Number(i64::from(number))
    }
}

impl From<QueryMap> for Value {
    fn from(map: QueryMap) -> Self {
        Self::Query(map)
    }
}

/// Extra argument of [`Url::set_with`](crate::Url::set_with).
#[derive(Clone, Copy)]
pub enum SetArg<'a> {
    /// For [`Part::Protocol`]: whether the new protocol is followed by `//`.
    ///
    /// `Slashes(true)` turns slashes on and `Slashes(false)` turns them off.
    /// This is the inverse of url-parse, where a truthy third argument to
    /// `set('protocol', ..)` clears `slashes`.
    Slashes(bool),
    /// For [`Part::Query`]: parser for text values
    Parser(&'a dyn QueryParser),
}

impl fmt::Debug for SetArg<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slashes(slashes) => f.debug_tuple("Slashes").field(slashes).finish(),
            Self::Parser(_) => f.write_str("Parser(..)"),
        }
    }
}
