//! Grammar-backed typed strings.
//!
//! A typed string is a string that has been matched against a grammar of
//! named capture groups, so it is at once a validated string and a record
//! of its parts. This crate provides the machinery for defining such types
//! and a catalogue of ready-made ones.
//!
//! # Overview
//!
//! Every type follows the same pipeline:
//!
//! ```text
//! raw input -> Pattern::captures -> Fields -> TypedString::from_fields -> value
//! ```
//!
//! The grammar decides the shape, `from_fields` applies defaults and
//! semantic checks, and the value renders back to a canonical string that
//! parses to an equal value.
//!
//! # Quick Start
//!
//! ```rust
//! use typed_strings::{GeoUri, StunUri, TypedString};
//!
//! let stun: StunUri = "STUN:stun.example.org".parse().unwrap();
//! assert_eq!(stun.port(), "3478");
//! assert_eq!(stun.to_string(), "stun:stun.example.org:3478");
//!
//! let geo = GeoUri::parse("geo:48.2010,16.3695,183").unwrap();
//! assert_eq!(geo.crs(), "wsg84");
//! ```
//!
//! # Catalogue
//!
//! | Type | Example |
//! |------|---------|
//! | [`AnyUri`] | `https://example.com/a?b#c` |
//! | [`SqliteUri`] | `sqlite:///var/db/app.sqlite` |
//! | [`GeoUri`] | `geo:48.2010,16.3695;u=40` |
//! | [`StunUri`] | `stuns:example.com` |
//! | [`TurnUri`] | `turn:example.com?transport=udp` |
//! | [`WebSocketUri`] | `wss://example.com/chat` |
//! | [`SocksUri`] | `socks5h://proxy:1080` |
//! | [`AnyUrn`] | `urn:ietf:rfc2141` |
//! | [`IssnUrn`] | `urn:issn:0167-6423` |
//! | [`HandleUrn`] | `urn:hdl:10.1000/182` |
//! | [`DoiUri`] | `doi:10.1000/182` |
//! | [`MediaType`] | `application/ld+json` |
//! | [`ContentType`] | `text/html;charset=utf-8` |
//! | [`CnPostalCode`] | `100871` |
//!
//! Checksum-backed identifiers (ISBN, ISSN, IMEI, MAC addresses) live in
//! [`identifier`], validated by the algorithms in [`algorithms`].
//!
//! # Custom grammars
//!
//! [`PatternString`] parses against a [`Pattern`] supplied at runtime, and
//! [`UriGrammar`] builds URI grammars with per-component sub-patterns.
//!
//! # Features
//!
//! - `serde`: `Serialize`/`Deserialize` as plain strings for every typed
//!   string, and `Serialize` for [`StringSchema`] and [`Point`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algorithms;
pub mod constants;
mod error;
mod geo;
pub mod grammar;
pub mod identifier;
mod mime;
mod network;
mod params;
mod pattern;
mod postal_code;
pub mod prelude;
mod schema;
mod typed;
mod uri;
mod urn;

pub use error::{
    AlgorithmError, ErrorKind, IdentifierError, ParameterError, ValidationError, reraise,
};
pub use geo::{GeoUri, Point};
pub use identifier::{Algorithm, Identifier, IdentifierType};
pub use mime::{ContentType, MEDIA_SUFFIXES, MEDIA_TYPES, MediaType};
pub use network::{SocksUri, StunUri, TurnUri, WebSocketUri};
pub use params::Parameters;
pub use pattern::{Fields, Pattern, unname_groups};
pub use postal_code::CnPostalCode;
pub use schema::StringSchema;
pub use typed::{PatternString, TypedString};
pub use uri::{AnyUri, COMPONENTS, SqliteUri, UriGrammar, UriRecord};
pub use urn::{AnyUrn, DoiUri, HandleUrn, IssnUrn};
