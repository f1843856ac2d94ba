//! Reusable pattern fragments.
//!
//! Fragments are plain pattern text meant to be interpolated with
//! `format!` into larger grammars. Character-class fragments (`ALPHANUM`,
//! `HEXDIG`, `MARK`) are class bodies and must be wrapped in `[...]`.

/// Alphanumeric class body.
pub const ALPHANUM: &str = "0-9a-zA-Z";

/// Hexadecimal digit class body.
pub const HEXDIG: &str = "0-9a-fA-F";

/// Positive decimal number.
pub const PNUM: &str = r"\d+(\.\d+)?";

/// Signed decimal number.
pub const NUM: &str = r"-?\d+(\.\d+)?";

/// Unreserved marks of RFC 5870 section 3.3, as a class body.
pub const MARK: &str = r"\-_.!~*'/()";

/// A percent-encoded octet.
pub const PCT_ENCODED: &str = "%[0-9a-fA-F][0-9a-fA-F]";

/// `host[:port]`, capturing `host` and `port`.
pub const HOSTPORT: &str = r"(?P<host>[^/?#:]+)(?::(?P<port>\d+))?";

/// `[user@]host[:port]`, capturing `user`, `host` and `port`.
///
/// An IP literal host keeps its brackets: `[::1]:1080` yields host `[::1]`.
pub const USERHOSTPORT: &str =
    r"(?:(?P<user>[^@/?#]*)@)?(?P<host>\[[^\]/?#]+\]|[^\[\]@:/?#]+)(?::(?P<port>\d+))?";

/// Path following an authority: empty or starting with `/` (RFC 3986
/// `path-abempty`).
pub const PATH_ABEMPTY: &str = "(?:/[^?#]*)?";
