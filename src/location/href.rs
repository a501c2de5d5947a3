//! Pure helpers over href strings.
//!
//! All functions take the transport whitelist explicitly, so they can be
//! used without a subject.

/// Separator between transport and the rest of an href.
pub const TRANSPORT_SEPARATOR: &str = "://";

/// Returns `true` if `href` starts with any of `transports`, ignoring ASCII case.
///
/// # Example
/// ```
/// use waypost::location::href::has_transport;
///
/// let transports = ["http://", "https://"];
/// assert!(has_transport("HTTP://", &transports));
/// assert!(!has_transport("://", &transports));
/// assert!(!has_transport("foo", &transports));
/// ```
pub fn has_transport<S: AsRef<str>>(href: &str, transports: &[S]) -> bool {
    transports.iter().any(|t| {
        let t = t.as_ref();
        !t.is_empty()
            && href
                .get(..t.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(t))
    })
}

/// An href containing `://` must start with a whitelisted transport; hrefs
/// without `://` are relative paths and always valid.
pub fn is_valid_href<S: AsRef<str>>(href: &str, transports: &[S]) -> bool {
    !href.contains(TRANSPORT_SEPARATOR) || has_transport(href, transports)
}

/// Extracts the final path segment of `href`.
///
/// Trailing slashes are stripped first. For an href with a whitelisted
/// transport and no path after the host, the trimmed href itself is returned.
/// A bare transport such as `"http://"` loses its slashes, no longer matches
/// the whitelist and comes back as `"http:"`.
///
/// # Example
/// ```
/// use waypost::location::href::last_part;
///
/// let transports = ["http://", "https://"];
/// assert_eq!(last_part("foo//bar", &transports), "bar");
/// assert_eq!(last_part("http://localhost/", &transports), "http://localhost");
/// assert_eq!(last_part("https://host/a/b/", &transports), "b");
/// ```
pub fn last_part<'a, S: AsRef<str>>(href: &'a str, transports: &[S]) -> &'a str {
    let trimmed = href.trim_end_matches('/');

    if !has_transport(trimmed, transports) {
        return final_segment(trimmed);
    }

    match trimmed.split_once(TRANSPORT_SEPARATOR) {
        // host only
        Some((_, rest)) if !rest.contains('/') => trimmed,
        Some((_, rest)) => final_segment(rest),
        None => trimmed,
    }
}

fn final_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}
