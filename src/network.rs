//! Network service URIs: STUN, TURN, WebSocket and SOCKS.
//!
//! Each type fills in the default port of its scheme when the input omits
//! one, so the canonical form always names a port.

use once_cell::sync::Lazy;

use crate::constants::{
    SOCKS_PORT, STUN_PORT, STUNS_PORT, WS_DEFAULT_RESOURCE, WS_PORT, WSS_PORT,
};
use crate::error::ValidationError;
use crate::grammar::{HOSTPORT, PATH_ABEMPTY, USERHOSTPORT};
use crate::params::Parameters;
use crate::pattern::{Fields, Pattern};
use crate::typed::{TypedString, typed_string_impls};
use crate::uri::{UriGrammar, UriRecord};

fn port_or_default(fields: &mut Fields, default: &str, input: &str) -> String {
    fields.take("port").unwrap_or_else(|| {
        tracing::trace!(input, port = default, "applying default port");
        default.to_string()
    })
}

static STUN_URI: Lazy<Pattern> = Lazy::new(|| {
    UriGrammar::new()
        .scheme("stuns?")
        .authority(None)
        .path(Some(HOSTPORT))
        .query(None)
        .fragment(None)
        .build()
        .expect("STUN URI grammar compiles")
});

/// A STUN server URI (RFC 7064), e.g. `stun:example.com:3478`.
///
/// # Examples
///
/// ```
/// use typed_strings::{StunUri, TypedString};
///
/// let uri = StunUri::parse("stuns:example.com").unwrap();
/// assert!(uri.is_secure());
/// assert_eq!(uri.port(), "5349");
/// assert_eq!(uri.as_str(), "stuns:example.com:5349");
/// ```
#[derive(Debug, Clone)]
pub struct StunUri {
    uri: UriRecord,
    host: String,
    port: String,
    normalized: String,
}

impl StunUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// Server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server port, defaulted from the scheme when absent.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// True for `stuns`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.uri.scheme_str() == "stuns"
    }
}

impl TypedString for StunUri {
    fn pattern() -> &'static Pattern {
        &STUN_URI
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        let host = fields.require("host", input)?;
        let default = if uri.scheme_str() == "stuns" {
            STUNS_PORT
        } else {
            STUN_PORT
        };
        let port = port_or_default(&mut fields, default, input);
        let normalized = format!("{}:{host}:{port}", uri.scheme_str());
        Ok(Self {
            uri,
            host,
            port,
            normalized,
        })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(StunUri);

static TURN_URI: Lazy<Pattern> = Lazy::new(|| {
    UriGrammar::new()
        .scheme("turns?")
        .authority(None)
        .path(Some(HOSTPORT))
        .fragment(None)
        .build()
        .expect("TURN URI grammar compiles")
});

/// A TURN server URI (RFC 7065), e.g. `turn:example.com?transport=udp`.
///
/// The only query parameter allowed is `transport`.
///
/// # Examples
///
/// ```
/// use typed_strings::{TurnUri, TypedString};
///
/// let uri = TurnUri::parse("turn:example.com?Transport=tcp").unwrap();
/// assert_eq!(uri.transport(), Some("tcp"));
/// assert_eq!(uri.as_str(), "turn:example.com:3478?transport=tcp");
///
/// assert!(TurnUri::parse("turn:example.com?ttl=1").unwrap_err().is_content());
/// ```
#[derive(Debug, Clone)]
pub struct TurnUri {
    uri: UriRecord,
    host: String,
    port: String,
    transport: Option<String>,
    normalized: String,
}

impl TurnUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// Server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server port, defaulted from the scheme when absent.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// Transport requested in the query, if any.
    #[must_use]
    pub fn transport(&self) -> Option<&str> {
        self.transport.as_deref()
    }

    /// True for `turns`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.uri.scheme_str() == "turns"
    }

    fn transport_from(input: &str, query: &str) -> Result<String, ValidationError> {
        let params = Parameters::parse(query, '&')
            .map_err(|e| ValidationError::content(input).with_detail(e.to_string()))?;
        if query.split('&').any(str::is_empty) {
            return Err(ValidationError::content(input).with_detail("empty query parameter"));
        }
        match params.get("transport") {
            Some("") => Err(ValidationError::content(input).with_detail("empty 'transport'")),
            Some(transport) if params.len() == 1 => Ok(transport.to_string()),
            _ => Err(ValidationError::content(input)
                .with_detail("no param other than 'transport' is allowed")),
        }
    }
}

impl TypedString for TurnUri {
    fn pattern() -> &'static Pattern {
        &TURN_URI
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        let host = fields.require("host", input)?;
        let default = if uri.scheme_str() == "turns" {
            STUNS_PORT
        } else {
            STUN_PORT
        };
        let port = port_or_default(&mut fields, default, input);
        let transport = uri
            .query
            .as_deref()
            .map(|query| Self::transport_from(input, query))
            .transpose()?;

        let mut normalized = format!("{}:{host}:{port}", uri.scheme_str());
        if let Some(transport) = &transport {
            normalized.push_str("?transport=");
            normalized.push_str(transport);
        }
        Ok(Self {
            uri,
            host,
            port,
            transport,
            normalized,
        })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(TurnUri);

static WEBSOCKET_URI: Lazy<Pattern> = Lazy::new(|| {
    UriGrammar::new()
        .scheme("wss?")
        .authority(Some(HOSTPORT))
        .path(Some(PATH_ABEMPTY))
        .fragment(None)
        .build()
        .expect("WebSocket URI grammar compiles")
});

/// A WebSocket URI (RFC 6455), e.g. `wss://example.com/chat`.
///
/// Fragments are not allowed.
///
/// # Examples
///
/// ```
/// use typed_strings::{TypedString, WebSocketUri};
///
/// let ws = WebSocketUri::parse("ws://host/path?query").unwrap();
/// assert_eq!(ws.host(), "host");
/// assert_eq!(ws.port(), "80");
/// assert_eq!(ws.resource(), "/path?query");
/// assert_eq!(ws.as_str(), "ws://host:80/path?query");
/// ```
#[derive(Debug, Clone)]
pub struct WebSocketUri {
    uri: UriRecord,
    host: String,
    port: String,
    normalized: String,
}

impl WebSocketUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// Server host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Server port, defaulted from the scheme when absent.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// True for `wss`.
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.uri.scheme_str() == "wss"
    }

    /// Path and query, as sent in the opening handshake.
    ///
    /// An empty path becomes `/`; an empty query is dropped.
    #[must_use]
    pub fn resource(&self) -> String {
        let mut resource = if self.uri.path.is_empty() {
            WS_DEFAULT_RESOURCE.to_string()
        } else {
            self.uri.path.clone()
        };
        if let Some(query) = self.uri.query.as_deref().filter(|q| !q.is_empty()) {
            resource.push('?');
            resource.push_str(query);
        }
        resource
    }
}

impl TypedString for WebSocketUri {
    fn pattern() -> &'static Pattern {
        &WEBSOCKET_URI
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        let host = fields.require("host", input)?;
        let default = if uri.scheme_str() == "wss" {
            WSS_PORT
        } else {
            WS_PORT
        };
        let port = port_or_default(&mut fields, default, input);
        let mut value = Self {
            uri,
            host,
            port,
            normalized: String::new(),
        };
        value.normalized = format!(
            "{}://{}:{}{}",
            value.uri.scheme_str(),
            value.host,
            value.port,
            value.resource()
        );
        Ok(value)
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(WebSocketUri);

static SOCKS_URI: Lazy<Pattern> = Lazy::new(|| {
    UriGrammar::new()
        .scheme("socks(?:4a?|5h?)")
        .authority(Some(USERHOSTPORT))
        .path(Some(PATH_ABEMPTY))
        .query(None)
        .fragment(None)
        .build()
        .expect("SOCKS URI grammar compiles")
});

/// A SOCKS proxy URI, e.g. `socks5h://user@proxy:1080`.
///
/// # Examples
///
/// ```
/// use typed_strings::{SocksUri, TypedString};
///
/// let proxy = SocksUri::parse("SOCKS5H://alice@proxy").unwrap();
/// assert!(proxy.remote_dns_resolution());
/// assert_eq!(proxy.user(), Some("alice"));
/// assert_eq!(proxy.as_str(), "socks5h://alice@proxy:1080");
/// ```
#[derive(Debug, Clone)]
pub struct SocksUri {
    uri: UriRecord,
    user: Option<String>,
    host: String,
    port: String,
    normalized: String,
}

impl SocksUri {
    /// Returns the component record.
    #[must_use]
    pub const fn record(&self) -> &UriRecord {
        &self.uri
    }

    /// User name, if given.
    #[must_use]
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Proxy host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Proxy port, 1080 when absent.
    #[must_use]
    pub fn port(&self) -> &str {
        &self.port
    }

    /// True if the proxy resolves host names (`socks4a`, `socks5h`).
    #[must_use]
    pub fn remote_dns_resolution(&self) -> bool {
        matches!(self.uri.scheme_str(), "socks4a" | "socks5h")
    }
}

impl TypedString for SocksUri {
    fn pattern() -> &'static Pattern {
        &SOCKS_URI
    }

    fn from_fields(input: &str, mut fields: Fields) -> Result<Self, ValidationError> {
        let uri = UriRecord::take_from(&mut fields);
        let user = fields.take("user");
        let host = fields.require("host", input)?;
        let port = port_or_default(&mut fields, SOCKS_PORT, input);

        let userinfo = user.as_deref().map(|u| format!("{u}@")).unwrap_or_default();
        let normalized = format!(
            "{}://{userinfo}{host}:{port}{}",
            uri.scheme_str(),
            uri.path
        );
        Ok(Self {
            uri,
            user,
            host,
            port,
            normalized,
        })
    }

    fn as_str(&self) -> &str {
        &self.normalized
    }
}

typed_string_impls!(SocksUri);
