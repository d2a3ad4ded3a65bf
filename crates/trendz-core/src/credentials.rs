//! Bearer token lookup from an injected credential store.

use std::collections::HashMap;
use std::fmt;

/// Cookie key under which the storefront keeps its JWT.
pub const JWT_COOKIE: &str = "jwt_token";

/// Source of credentials keyed by name.
///
/// The page never reaches into ambient state for its token; callers pass a
/// store in so tests can supply fixed values.
pub trait CredentialStore: Send + Sync {
    /// Look up a credential by key.
    fn get(&self, key: &str) -> Option<String>;

    /// Resolve the bearer token stored under `key`.
    ///
    /// A missing entry yields an empty token rather than an error; the
    /// request still goes out and the API answers 401.
    fn bearer_token(&self, key: &str) -> BearerToken {
        match self.get(key) {
            Some(value) => BearerToken::new(value),
            None => BearerToken::missing(),
        }
    }
}

/// Opaque bearer credential. `Debug` never prints the raw value.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a raw token string.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The empty token sent when no credential is stored.
    pub fn missing() -> Self {
        Self(String::new())
    }

    /// Whether a non-empty token is present.
    pub fn is_present(&self) -> bool {
        !self.0.is_empty()
    }

    /// Raw value for the `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Masked form safe for logs: first four characters plus the length.
    pub fn fingerprint(&self) -> String {
        if self.0.is_empty() {
            return "<none>".to_string();
        }
        let prefix: String = self.0.chars().take(4).collect();
        format!("{}***({} chars)", prefix, self.0.chars().count())
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BearerToken({})", self.fingerprint())
    }
}

/// Cookies parsed from a `Cookie` request header.
#[derive(Debug, Clone, Default)]
pub struct CookieJar {
    cookies: HashMap<String, String>,
}

impl CookieJar {
    /// Create an empty jar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a `Cookie` header value (`a=1; b=2`).
    ///
    /// Pairs without `=` or with an empty name are skipped. Later duplicates
    /// win.
    pub fn parse(header: &str) -> Self {
        let cookies = header
            .split(';')
            .filter_map(|pair| {
                let (name, value) = pair.trim().split_once('=')?;
                let name = name.trim();
                if name.is_empty() {
                    return None;
                }
                let value = value.trim().trim_matches('"');
                Some((name.to_string(), value.to_string()))
            })
            .collect();
        Self { cookies }
    }

    /// Insert or replace a cookie.
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Number of cookies in the jar.
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Whether the jar is empty.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CredentialStore for CookieJar {
    fn get(&self, key: &str) -> Option<String> {
        self.cookies.get(key).cloned()
    }
}

/// Fixed in-memory credentials.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    values: HashMap<String, String>,
}

impl StaticCredentials {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with a single JWT under [`JWT_COOKIE`].
    pub fn jwt(token: impl Into<String>) -> Self {
        Self::new().with(JWT_COOKIE, token)
    }

    /// Add a credential.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl CredentialStore for StaticCredentials {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }
}
