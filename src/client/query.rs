//! Order-preserving query strings and endpoints.

use std::fmt;
use url::form_urlencoded::byte_serialize;

/// Key whose value is replaced in [`Endpoint::redacted`].
const SECRET_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Part {
    /// Bare key, e.g. `ignore_db`.
    Flag(String),
    /// `key=value`; an empty value still renders the `=`.
    Pair(String, String),
}

/// A query string that renders its parts in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    parts: Vec<Part>,
}

fn encode(s: &str) -> String {
    byte_serialize(s.as_bytes()).collect()
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn flag(mut self, key: &str) -> Self {
        self.parts.push(Part::Flag(key.to_string()));
        self
    }

    pub fn pair(mut self, key: &str, value: &str) -> Self {
        self.parts.push(Part::Pair(key.to_string(), value.to_string()));
        self
    }

    /// Value of the first `key=value` pair with this key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parts.iter().find_map(|p| match p {
            Part::Pair(k, v) if k == key => Some(v.as_str()),
            _ => None,
        })
    }

    /// Whether a bare flag or a pair with this key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.parts.iter().any(|p| match p {
            Part::Flag(k) | Part::Pair(k, _) => k == key,
        })
    }

    fn render(&self, redact: bool) -> String {
        self.parts
            .iter()
            .map(|p| match p {
                Part::Flag(k) => encode(k),
                Part::Pair(k, _) if redact && k == SECRET_KEY => format!("{}=***", encode(k)),
                Part::Pair(k, v) => format!("{}={}", encode(k), encode(v)),
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(false))
    }
}

/// A path segment plus query, relative to the API root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub query: Query,
}

impl Endpoint {
    pub fn new(path: &'static str, query: Query) -> Self {
        Self { path, query }
    }

    /// Rendering with the token masked, for logs.
    pub fn redacted(&self) -> String {
        format!("{}/?{}", self.path, self.query.render(true))
    }

    /// Absolute URL under `root` (which must end in `/`).
    pub fn url(&self, root: &str) -> String {
        format!("{root}{self}")
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/?{}", self.path, self.query)
    }
}
