//! Constants shared by the concrete grammars.

/// Default STUN/TURN port over UDP/TCP (RFC 7064, RFC 7065).
pub const STUN_PORT: &str = "3478";

/// Default STUN/TURN port over TLS.
pub const STUNS_PORT: &str = "5349";

/// Default WebSocket port.
pub const WS_PORT: &str = "80";

/// Default secure WebSocket port.
pub const WSS_PORT: &str = "443";

/// Default SOCKS proxy port.
pub const SOCKS_PORT: &str = "1080";

/// Default and only coordinate reference system accepted by geo URIs.
pub const GEO_DEFAULT_CRS: &str = "wsg84";

/// Default resource of a WebSocket URI with an empty path.
pub const WS_DEFAULT_RESOURCE: &str = "/";

/// Resolver base for ISSN URNs.
pub const ISSN_RESOLVER: &str = "https://urn.issn.org/";

/// Resolver base for handle URNs.
pub const HANDLE_RESOLVER: &str = "http://hdl.handle.net/";

/// Resolver base for DOIs.
pub const DOI_RESOLVER: &str = "https://doi.org/";
