use crate::checkers::{has_scheme_slashes, split_port};
use crate::percent_encode::unescape;
use crate::url::Url;

/// A base location for resolving relative addresses.
///
/// Only the fields a relative address can inherit are kept: credentials,
/// query and hash of a base never leak into the resolved URL. Empty strings
/// stand for missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub protocol: String,
    /// `None` when unknown; derived from `href` when the location is used
    pub slashes: Option<bool>,
    pub host: String,
    pub hostname: String,
    pub port: String,
    pub pathname: String,
    pub href: String,
}

impl Location {
    /// Whether the location's scheme was followed by `//`
    pub fn slashes(&self) -> bool {
        self.slashes.unwrap_or(false)
    }
}

impl From<&Url> for Location {
    fn from(url: &Url) -> Self {
        Self {
            protocol: url.protocol().to_string(),
            slashes: Some(url.slashes()),
            host: url.host().to_string(),
            hostname: url.hostname().to_string(),
            port: url.port().to_string(),
            pathname: url.pathname().to_string(),
            href: url.href().to_string(),
        }
    }
}

impl From<Url> for Location {
    fn from(url: Url) -> Self {
        Self::from(&url)
    }
}

/// Source of the "current location" used when no explicit base is given.
///
/// Embedders that have a notion of a current document (a browser page, a
/// worker script) implement this; the parser never looks one up on its own.
pub trait LocationProvider {
    fn current_location(&self) -> Option<Location>;
}

impl<F: Fn() -> Option<Location>> LocationProvider for F {
    fn current_location(&self) -> Option<Location> {
        self()
    }
}

/// The base an address is resolved against.
#[derive(Debug, Clone, Copy, Default)]
pub enum Base<'a> {
    /// Ask the configured [`LocationProvider`]; no base if there is none
    #[default]
    Ambient,
    /// Explicitly no base
    Empty,
    /// A base address, parsed without a base of its own
    Href(&'a str),
    /// A previously parsed URL
    Url(&'a Url),
    /// A location object
    Location(&'a Location),
}

/// Normalize a base into a [`Location`].
///
/// Hostname and port are filled in from `host` when only `host` is known.
/// A `blob:` location carries the real origin in its pathname; that inner
/// address is parsed and used instead of the blob wrapper.
pub fn derive_location(base: Base<'_>, provider: Option<&dyn LocationProvider>) -> Location {
    match base {
        Base::Ambient => provider
            .and_then(|provider| provider.current_location())
            .map(|location| from_location(&location))
            .unwrap_or_default(),
        Base::Empty => Location::default(),
        Base::Href(href) => Location::from(Url::parse_with(href, Base::Empty)),
        Base::Url(url) if url.protocol() == "blob:" => unwrap_blob(url.pathname()),
        Base::Url(url) => Location::from(url),
        Base::Location(location) => from_location(location),
    }
}

fn from_location(location: &Location) -> Location {
    if location.protocol == "blob:" {
        return unwrap_blob(&location.pathname);
    }

    let mut derived = location.clone();
    if derived.slashes.is_none() {
        derived.slashes = Some(has_scheme_slashes(&derived.href));
    }
    if derived.hostname.is_empty() && !derived.host.is_empty() {
        let (hostname, port) = split_port(&derived.host);
        derived.hostname = hostname.to_string();
        if derived.port.is_empty() {
            derived.port = port.unwrap_or_default().to_string();
        }
    }
    derived
}

fn unwrap_blob(pathname: &str) -> Location {
    let inner = unescape(pathname);
    tracing::debug!("unwrapping blob location: {}", inner);
    Location::from(Url::parse_with(&inner, Base::Empty))
}
