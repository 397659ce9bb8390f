use std::fmt;

use tracing::trace;
use url::Url;

/// Result of parsing user input as a registry URL.
///
/// Scheme-less references (e.g. `/just/a/path`) are accepted by the parser but
/// have neither a scheme nor an authority, so they are kept apart from
/// absolute URLs instead of being rejected outright.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedUri {
    /// An absolute URL with a scheme (e.g. `https://registry.example.com`)
    Absolute(Url),
    /// A reference without a scheme, stored as typed
    Relative(String),
}

impl ParsedUri {
    pub fn scheme(&self) -> &str {
        match self {
            ParsedUri::Absolute(url) => url.scheme(),
            ParsedUri::Relative(_) => "",
        }
    }

    /// Authority component (`user:pass@host:port`), empty when missing
    pub fn authority(&self) -> &str {
        match self {
            ParsedUri::Absolute(url) => url.authority(),
            ParsedUri::Relative(_) => "",
        }
    }

    /// Whether both scheme and authority are present
    pub fn is_complete(&self) -> bool {
        !self.scheme().is_empty() && !self.authority().is_empty()
    }

    /// Canonical string form, lower-cased. Used for duplicate detection.
    pub fn normalized(&self) -> String {
        self.to_string().to_lowercase()
    }

    /// Convert into a [`Url`], only if the URL is complete
    pub fn into_complete_url(self) -> Option<Url> {
        if !self.is_complete() {
            return None;
        }
        match self {
            ParsedUri::Absolute(url) => Some(url),
            ParsedUri::Relative(_) => None,
        }
    }
}

impl fmt::Display for ParsedUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedUri::Absolute(url) => write!(f, "{}", url),
            ParsedUri::Relative(reference) => write!(f, "{}", reference),
        }
    }
}

impl From<Url> for ParsedUri {
    fn from(url: Url) -> Self {
        ParsedUri::Absolute(url)
    }
}

/// Copy of `url` without the password, for logs and terminal output
pub fn redact_password(url: &Url) -> Url {
    let mut redacted = url.clone();
    if redacted.password().is_some() {
        // Only fails for URLs without a host, which cannot carry a password
        let _ = redacted.set_password(None);
    }
    redacted
}

/// Like [`redact_password`] for a stored registry string.
/// Strings that do not parse as URLs are returned unchanged.
pub fn redact_password_str(registry: &str) -> String {
    match Url::parse(registry) {
        Ok(url) if url.password().is_some() => redact_password(&url).to_string(),
        _ => registry.to_string(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum UriParseError {
    #[error("Malformed URL '{input}': {source}")]
    Malformed {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

/// URL parser used by the registry wizard
pub trait UriParser: Send + Sync {
    fn parse(&self, input: &str) -> Result<ParsedUri, UriParseError>;
}

/// Default parser backed by the `url` crate (WHATWG URL rules)
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardUriParser;

impl UriParser for StandardUriParser {
    fn parse(&self, input: &str) -> Result<ParsedUri, UriParseError> {
        match Url::parse(input) {
            Ok(url) => Ok(ParsedUri::Absolute(url)),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                trace!("'{}' has no scheme, treating as relative reference", input);
                Ok(ParsedUri::Relative(input.to_string()))
            }
            Err(source) => Err(UriParseError::Malformed {
                input: input.to_string(),
                source,
            }),
        }
    }
}
