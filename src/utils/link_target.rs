//! Link target sanitization for tool websites.
//!
//! Websites arrive with tracking query strings attached (`?ref=...`,
//! `?utm_source=...`). The table links to the bare page instead.

use url::Url;

/// Errors that can occur while turning a website into a link target.
#[derive(Debug, thiserror::Error)]
pub enum LinkTargetError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,
}

/// Parses a website URL and removes its query string and fragment.
///
/// # Rules
///
/// 1. **Protocol**: Only HTTP and HTTPS are allowed
/// 2. **Query**: Removed
/// 3. **Fragment**: Removed
/// 4. **Host, port, path**: Preserved as parsed
///
/// # Errors
///
/// Returns [`LinkTargetError::InvalidFormat`] for malformed URLs.
/// Returns [`LinkTargetError::UnsupportedProtocol`] for non-HTTP(S) schemes.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(
///     parse_link_target("https://tool.dev/app?ref=catalog").unwrap(),
///     "https://tool.dev/app"
/// );
/// ```
pub fn parse_link_target(input: &str) -> Result<String, LinkTargetError> {
    let mut url = Url::parse(input).map_err(|e| LinkTargetError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(LinkTargetError::UnsupportedProtocol),
    }

    url.set_query(None);
    url.set_fragment(None);

    Ok(url.to_string())
}

/// Lenient variant of [`parse_link_target`].
///
/// Scheme-less values that fail to parse (`tool.dev/app?ref=x`) are cut at
/// the first `?` or `#` instead of being rejected. Anything carrying a scheme
/// other than HTTP(S) yields `None` and is never used as a link.
pub fn strip_query(input: &str) -> Option<String> {
    match parse_link_target(input) {
        Ok(target) => Some(target),
        Err(LinkTargetError::UnsupportedProtocol) => None,
        Err(LinkTargetError::InvalidFormat(_)) if has_scheme(input) => None,
        Err(LinkTargetError::InvalidFormat(_)) => input
            .split(['?', '#'])
            .next()
            .map(str::trim)
            .filter(|bare| !bare.is_empty())
            .map(str::to_string),
    }
}

/// True if `input` starts with an RFC 3986 scheme followed by `:`.
fn has_scheme(input: &str) -> bool {
    let Some((scheme, _)) = input.trim_start().split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
