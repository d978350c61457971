//! Hostname extraction and subdomain counting.
//!
//! The host is read lexically from the authority, exactly as typed: no IDNA
//! mapping, no percent-decoding, no port validation. A phishing host that a
//! browser would refuse is still a host worth scoring.

/// Returns the authority of `url`: the text between `://` and the first
/// `/`, `?` or `#`. `None` when there is no `://`.
fn authority(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    Some(&rest[..end])
}

/// Returns the hostname of `url`, lowercased.
///
/// Userinfo up to the last `@` is dropped, as is a `:port` suffix; a
/// bracketed IPv6 host is returned without its brackets. Returns `None` for
/// a missing or empty host, or for an authority with unbalanced brackets.
pub fn extract_domain(url: &str) -> Option<String> {
    // Tabs and line breaks inside a URL are ignored by browsers.
    let cleaned: String = url.chars().filter(|c| !matches!(c, '\t' | '\r' | '\n')).collect();
    let authority = authority(&cleaned)?;
    if authority.contains('[') != authority.contains(']') {
        return None;
    }

    let host_port = authority.rsplit_once('@').map_or(authority, |(_, h)| h);
    let host = match host_port.split_once('[') {
        Some((_, bracketed)) => bracketed.split_once(']').map_or(bracketed, |(h, _)| h),
        None => host_port.split_once(':').map_or(host_port, |(h, _)| h),
    };
    if host.is_empty() {
        return None;
    }
    Some(host.to_lowercase())
}

/// Number of labels beyond `domain.tld`: `max(0, labels - 2)`.
///
/// A single trailing dot is ignored. Two-label public suffixes such as
/// `co.uk` count as a subdomain level.
pub fn count_subdomains(host: Option<&str>) -> usize {
    let host = match host {
        Some(h) if !h.is_empty() => h,
        _ => return 0,
    };
    let host = host.strip_suffix('.').unwrap_or(host);
    host.split('.').count().saturating_sub(2)
}
