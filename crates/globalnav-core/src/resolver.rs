//! Referrer-based link matching
//!
//! Decides which configured link represents the page the visitor came
//! from, so the rendered bar can highlight it.
//!
//! Two tiers of match:
//! - **host match**: the link URL's host equals the referrer's host
//!   (exact string equality, no scheme or port normalization)
//! - **best match**: a host match whose path also equals the referrer's
//!   path after stripping a single trailing `/` from each
//!
//! The scan always runs over the whole collection with unconditional
//! reassignment, so when several links qualify at the same tier the last
//! one in collection order wins. Do not replace this with an early-exit
//! search: that changes the observable tie-break.

use url::Url;

use crate::models::Link;

/// Resolve the visitor's current link from the referrer URL
///
/// An absent or unparsable referrer behaves as a URL with no host and no
/// path, which matches nothing unless a link entry is itself malformed
/// enough to have no host. Links whose URLs fail to parse are skipped
/// rather than failing the whole resolution.
pub fn resolve_current_link<'a>(links: &'a [Link], referrer: Option<&str>) -> Option<&'a Link> {
    let (referrer_host, referrer_path) = referrer
        .and_then(host_and_path)
        .unwrap_or((None, String::new()));
    let referrer_path = strip_trailing_slash(&referrer_path).to_string();

    let mut best_match = None;
    let mut host_match = None;

    for link in links {
        let Some((host, path)) = host_and_path(&link.url) else {
            continue;
        };
        if host == referrer_host {
            host_match = Some(link);
            if strip_trailing_slash(&path) == referrer_path {
                best_match = Some(link);
            }
        }
    }

    best_match.or(host_match)
}

/// Split a URL into its host (with explicit port, when present) and path
///
/// Returns `None` when the input is not an absolute URL.
fn host_and_path(raw: &str) -> Option<(Option<String>, String)> {
    let url = Url::parse(raw).ok()?;
    let host = url.host_str().map(|host| match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    });
    Some((host, url.path().to_string()))
}

/// Strip at most one trailing `/`
fn strip_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}
