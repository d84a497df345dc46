use core::fmt;

use crate::location::{Base, Location, LocationProvider};
use crate::querystring::QueryParser;
use crate::url::Url;

/// How the query string of a parsed address is stored.
#[derive(Clone, Copy, Default)]
pub enum QueryMode<'a> {
    /// Keep the raw text, leading `?` included
    #[default]
    Raw,
    /// Decode with the built-in codec
    Decode,
    /// Hand the raw text (leading `?` included) to a custom parser
    Custom(&'a dyn QueryParser),
}

impl fmt::Debug for QueryMode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw => f.write_str("Raw"),
            Self::Decode => f.write_str("Decode"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl From<bool> for QueryMode<'_> {
    fn from(decode: bool) -> Self {
        if decode { Self::Decode } else { Self::Raw }
    }
}

/// Options for [`Url::parse_with`].
///
/// Every shape the parser accepts converts into this type, so both
/// `parse_with(address, true)` and `parse_with(address, base)` work, and the
/// builder methods cover the three-argument form:
///
/// ```
/// use laxurl::{ParseOptions, QueryMode, Url};
///
/// let url = Url::parse_with(
///     "/search?q=rust",
///     ParseOptions::from("https://example.com/docs/").query(QueryMode::Decode),
/// );
/// assert_eq!(url.href(), "https://example.com/search?q=rust");
/// assert_eq!(url.query().get("q"), Some("rust"));
/// ```
#[derive(Clone, Copy, Default)]
pub struct ParseOptions<'a> {
    pub base: Base<'a>,
    pub query: QueryMode<'a>,
    /// Consulted when `base` is [`Base::Ambient`]
    pub location: Option<&'a dyn LocationProvider>,
}

impl<'a> ParseOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn base(mut self, base: impl Into<Base<'a>>) -> Self {
        self.base = base.into();
        self
    }

    #[must_use]
    pub fn query(mut self, query: impl Into<QueryMode<'a>>) -> Self {
        self.query = query.into();
        self
    }

    #[must_use]
    pub fn location(mut self, provider: &'a dyn LocationProvider) -> Self {
        self.location = Some(provider);
        self
    }
}

impl fmt::Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("base", &self.base)
            .field("query", &self.query)
            .field("location", &self.location.map(|_| ".."))
            .finish()
    }
}

impl<'a> From<&'a str> for Base<'a> {
    fn from(href: &'a str) -> Self {
        Self::Href(href)
    }
}

impl<'a> From<&'a Url> for Base<'a> {
    fn from(url: &'a Url) -> Self {
        Self::Url(url)
    }
}

impl<'a> From<&'a Location> for Base<'a> {
    fn from(location: &'a Location) -> Self {
        Self::Location(location)
    }
}

impl<'a> From<Base<'a>> for ParseOptions<'a> {
    fn from(base: Base<'a>) -> Self {
        Self::new().base(base)
    }
}

impl<'a> From<&'a str> for ParseOptions<'a> {
    fn from(href: &'a str) -> Self {
        Self::new().base(href)
    }
}

impl<'a> From<&'a Url> for ParseOptions<'a> {
    fn from(url: &'a Url) -> Self {
        Self::new().base(url)
    }
}

impl<'a> From<&'a Location> for ParseOptions<'a> {
    fn from(location: &'a Location) -> Self {
        Self::new().base(location)
    }
}

impl From<bool> for ParseOptions<'_> {
    fn from(decode: bool) -> Self {
        Self::new().query(decode)
    }
}

impl<'a> From<QueryMode<'a>> for ParseOptions<'a> {
    fn from(query: QueryMode<'a>) -> Self {
        Self::new().query(query)
    }
}
