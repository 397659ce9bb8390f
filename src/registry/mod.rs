// Registry URL model: parsing, normalization and the set of connected registries

pub mod connected;
pub mod uri;

pub use connected::ConnectedRegistries;
pub use uri::{
    redact_password, redact_password_str, ParsedUri, StandardUriParser, UriParseError, UriParser,
};
