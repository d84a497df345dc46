/// Fixture loader
///
/// Address decomposition and path resolution cases stored as JSON next to
/// this file. Strings in the arrays are comments, as in the WPT data format.
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum UrlCase {
    /// Expected components of `input` parsed against `base` (no base if null)
    Case {
        input: String,
        #[serde(default)]
        base: Option<String>,
        #[serde(default)]
        href: Option<String>,
        #[serde(default)]
        protocol: Option<String>,
        #[serde(default)]
        slashes: Option<bool>,
        #[serde(default)]
        auth: Option<String>,
        #[serde(default)]
        username: Option<String>,
        #[serde(default)]
        password: Option<String>,
        #[serde(default)]
        host: Option<String>,
        #[serde(default)]
        hostname: Option<String>,
        #[serde(default)]
        port: Option<String>,
        #[serde(default)]
        pathname: Option<String>,
        #[serde(default)]
        query: Option<String>,
        #[serde(default)]
        hash: Option<String>,
        #[serde(default)]
        origin: Option<String>,
    },
    #[allow(dead_code)]
    Comment(String),
}

/// `[relative, base, expected pathname]`
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum ResolveCase {
    Case(String, String, String),
    #[allow(dead_code)]
    Comment(String),
}

#[derive(Debug, Clone)]
pub struct FixtureFailure {
    pub input: String,
    pub base: Option<String>,
    pub field: &'static str,
    pub expected: String,
    pub actual: String,
}

impl std::fmt::Display for FixtureFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} (base {:?}): {} expected {:?}, got {:?}",
            self.input, self.base, self.field, self.expected, self.actual
        )
    }
}

pub fn load_url_cases() -> Vec<UrlCase> {
    serde_json::from_str(include_str!("urls.json")).expect("Failed to parse urls.json")
}

pub fn load_resolve_cases() -> Vec<ResolveCase> {
    serde_json::from_str(include_str!("resolve.json")).expect("Failed to parse resolve.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_load() {
        let urls = load_url_cases();
        assert!(urls.iter().any(|case| matches!(case, UrlCase::Case { .. })));
        let resolve = load_resolve_cases();
        assert!(resolve.iter().any(|case| matches!(case, ResolveCase::Case(..))));
    }
}
