//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use typed_strings::prelude::*;
//!
//! let uri = WebSocketUri::parse("wss://example.com/chat").unwrap();
//! assert_eq!(uri.port(), "443");
//! ```
//!
//! Grammar fragments, constants and the algorithm implementations are left
//! out; import them from their modules.

pub use crate::{
    // Capability
    TypedString, PatternString, Pattern, Fields, StringSchema,
    // URIs
    AnyUri, SqliteUri, UriGrammar, UriRecord, GeoUri, Point, StunUri, TurnUri, WebSocketUri,
    SocksUri, AnyUrn, IssnUrn, HandleUrn, DoiUri,
    // Other grammars
    ContentType, MediaType, CnPostalCode, Parameters,
    // Identifiers
    Algorithm, Identifier, IdentifierType,
    // Errors
    AlgorithmError, ErrorKind, IdentifierError, ParameterError, ValidationError,
};
