/// URL scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SchemeType {
    Http,
    Https,
    Ws,
    Wss,
    Ftp,
    Gopher,
    File,
    #[default]
    NotSpecial,
}

impl SchemeType {
    /// Check if this is a special scheme (`//` implied, pathname always absolute)
    pub fn is_special(self) -> bool {
        self != Self::NotSpecial
    }

    /// Get the default port for this scheme
    pub fn default_port(self) -> Option<u16> {
        match self {
            Self::Http | Self::Ws => Some(80),
            Self::Https | Self::Wss => Some(443),
            Self::Ftp => Some(21),
            Self::Gopher => Some(70),
            Self::File | Self::NotSpecial => None,
        }
    }

    /// Whether URLs of this scheme carry a tuple origin.
    /// `file:` URLs are special but always have an opaque (`"null"`) origin.
    pub fn has_origin(self) -> bool {
        self.is_special() && self != Self::File
    }
}
