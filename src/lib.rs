//! Permissive, browser-style URL parsing and mutation.
//!
//! Addresses are split into the components a browser URL bar would show,
//! tolerating backslashes, stray `@` signs, repeated `?` and embedded
//! whitespace. Parsing never fails.
//!
//! ```
//! use laxurl::{Part, Url};
//!
//! let mut url = Url::parse_with("//example.com\\docs?lang=en", "https://old.org/");
//! assert_eq!(url.href(), "https://example.com/docs?lang=en");
//!
//! url.set(Part::Pathname, "guide")?;
//! assert_eq!(url.href(), "https://example.com/guide?lang=en");
//! # Ok::<(), laxurl::Error>(())
//! ```

// Internal modules (not public API)
mod character_sets;
mod checkers;
mod error;
mod helpers;
mod location;
mod parser;
mod part;
mod path;
mod percent_encode;
mod protocol;
mod scheme;
mod types;
mod url;

pub mod querystring;

// Public API
pub use error::{Error, Result};
pub use location::{Base, Location, LocationProvider, derive_location};
pub use parser::{ParseOptions, QueryMode, parse};
pub use part::{Part, SetArg, Value};
pub use path::resolve_pathname;
pub use protocol::{Extracted, extract_protocol};
pub use querystring::{DefaultCodec, Query, QueryMap, QueryParser, QueryStringifier};
pub use crate::url::Url;
