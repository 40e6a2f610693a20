//! Spotify URL validation and embed conversion.
//!
//! A raw share URL is accepted only when it points at spotify.com and carries
//! a `/{track|playlist|album}/{id}` path pair; everything else is rejected
//! before any item is created. The stored content is always the embeddable
//! player URL, never the share URL.

use crate::error::{BoardError, BoardResult};

/// Path segments that identify an embeddable resource.
const EMBED_KINDS: &[&str] = &["track", "playlist", "album"];

/// Convert a Spotify share URL into an embeddable player URL.
///
/// `https://open.spotify.com/track/abc123?si=xyz` becomes
/// `https://open.spotify.com/embed/track/abc123`. Query strings are dropped.
pub fn to_spotify_embed_url(raw: &str) -> BoardResult<String> {
    if !raw.contains("spotify.com") {
        return Err(BoardError::Validation(
            "Invalid Spotify URL. Please use a link from spotify.com".to_string(),
        ));
    }

    let parts: Vec<&str> = raw.split('/').collect();
    let kind_index = parts
        .iter()
        .position(|part| EMBED_KINDS.contains(part))
        .ok_or_else(|| {
            BoardError::Validation(
                "Invalid Spotify URL. Please use a link from spotify.com".to_string(),
            )
        })?;

    let id = parts
        .get(kind_index + 1)
        .and_then(|segment| segment.split('?').next())
        .filter(|id| !id.is_empty())
        .ok_or_else(|| {
            BoardError::Validation(
                "Invalid Spotify URL. Please use a link from spotify.com".to_string(),
            )
        })?;

    Ok(format!(
        "https://open.spotify.com/embed/{}/{}",
        parts[kind_index], id
    ))
}

/// Whether a URL is already in the embeddable player form.
pub fn is_embed_url(url: &str) -> bool {
    url.starts_with("https://open.spotify.com/embed/")
}
