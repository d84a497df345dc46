#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Generated component combinations
///
/// Builds addresses from known components with a deterministic xorshift
/// generator and checks that parsing hands every component back unchanged
/// and that reparsing `href` is stable.
use laxurl::{Base, DefaultCodec, Url};

const PROTOCOLS: &[&str] = &["http:", "https:", "ws:", "wss:", "ftp:", "gopher:", "foo:"];
const AUTHS: &[&str] = &["", "user", "user:pass", "us%20er:p%40ss"];
const HOSTNAMES: &[&str] = &[
    "",
    "example.com",
    "sub.example.org",
    "[::1]",
    "127.0.0.1",
    "a-b.c",
];
const PORTS: &[&str] = &["", "1", "8080", "65535"];
const PATHNAMES: &[&str] = &["/", "/a", "/a/b/c.html", "/%20x", "/a@b", "/x;y,z"];
const QUERIES: &[&str] = &["", "?a=b", "?a=b&c=d", "?x?y", "???"];
const HASHES: &[&str] = &["", "#x", "#a/b", "#?q", "##"];

struct XorShift(u64);

impl XorShift {
    fn next(&mut self) -> u64 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 7;
        self.0 ^= self.0 << 17;
        self.0
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        let len = items.len() as u64;
        items[(self.next() % len) as usize]
    }
}

#[derive(Debug)]
struct Parts {
    protocol: &'static str,
    auth: &'static str,
    hostname: &'static str,
    port: &'static str,
    pathname: &'static str,
    query: &'static str,
    hash: &'static str,
}

impl Parts {
    fn generate(rng: &mut XorShift) -> Self {
        Self {
            protocol: rng.pick(PROTOCOLS),
            auth: rng.pick(AUTHS),
            hostname: rng.pick(HOSTNAMES),
            port: rng.pick(PORTS),
            pathname: rng.pick(PATHNAMES),
            query: rng.pick(QUERIES),
            hash: rng.pick(HASHES),
        }
    }

    fn address(&self) -> String {
        let mut address = format!("{}//", self.protocol);
        if !self.auth.is_empty() {
            address.push_str(self.auth);
            address.push('@');
        }
        address.push_str(self.hostname);
        if !self.port.is_empty() {
            address.push(':');
            address.push_str(self.port);
        }
        address.push_str(self.pathname);
        address.push_str(self.query);
        address.push_str(self.hash);
        address
    }

    fn host(&self) -> String {
        if self.port.is_empty() {
            self.hostname.to_string()
        } else {
            format!("{}:{}", self.hostname, self.port)
        }
    }
}

#[test]
fn test_generated_urls_decompose_into_their_components() {
    let mut rng = XorShift(0x2545_f491_4f6c_dd1d);

    for _ in 0..1000 {
        let parts = Parts::generate(&mut rng);
        let address = parts.address();
        let url = Url::parse_with(&address, Base::Empty);
        let reparsed = Url::parse_with(url.href(), Base::Empty);
        assert_eq!(reparsed.href(), url.href(), "{parts:?}");
        assert_eq!(reparsed.host(), url.host(), "{parts:?}");

        // Without a hostname the path may be read as the authority
        if parts.hostname.is_empty() {
            continue;
        }

        assert_eq!(url.href(), address, "{parts:?}");
        assert_eq!(url.protocol(), parts.protocol, "{parts:?}");
        assert!(url.slashes(), "{parts:?}");
        assert_eq!(url.auth(), parts.auth, "{parts:?}");
        assert_eq!(url.hostname(), parts.hostname, "{parts:?}");
        assert_eq!(url.port(), parts.port, "{parts:?}");
        assert_eq!(url.host(), parts.host(), "{parts:?}");
        assert_eq!(url.pathname(), parts.pathname, "{parts:?}");
        assert_eq!(url.query().as_raw(), Some(parts.query), "{parts:?}");
        assert_eq!(url.hash(), parts.hash, "{parts:?}");

        let expected_origin = if parts.protocol == "foo:" {
            "null".to_string()
        } else {
            format!("{}//{}", parts.protocol, parts.host())
        };
        assert_eq!(url.origin(), expected_origin, "{parts:?}");
    }
}

#[test]
fn test_arbitrary_input_never_panics() {
    const ALPHABET: &[&str] = &[
        "http:", "file:", "a:", "/", "\\", "//", "@", ":", "?", "#", "&", "=", "%", "%4", "%41",
        "[", "]", ".", "..", "a", "B", "1", "80", " ", "\t", "\u{0}", "\u{2028}", "é", "🦀",
    ];
    let mut rng = XorShift(0x9e37_79b9_7f4a_7c15);

    for _ in 0..2000 {
        let len = rng.next() % 12;
        let address: String = (0..len).map(|_| rng.pick(ALPHABET)).collect();
        let base: String = (0..rng.next() % 6).map(|_| rng.pick(ALPHABET)).collect();

        let url = laxurl::parse(&address, base.as_str());
        assert_eq!(url.href(), url.to_string_with(&DefaultCodec), "{address:?}");

        let decoded = Url::parse_with(&address, true);
        assert_eq!(decoded.href(), decoded.to_string(), "{address:?}");
    }
}
