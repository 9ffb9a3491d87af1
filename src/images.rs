// SPDX-License-Identifier: PMPL-1.0-or-later

//! Image URL resolution.
//!
//! The visual guide hosts one image per record, keyed by the record's
//! short id under a per-resource path segment. Resolution is pure
//! string work — no request is made and the resulting URL is not
//! checked for reachability.

/// Base URL of the external image host.
pub const IMAGE_BASE_URL: &str = "https://starwars-visualguide.com/assets/img";

// API resource token → image host path segment. The hosts disagree on
// the people/characters name; everything else matches.
const SEGMENTS: &[(&str, &str)] = &[
    ("people", "characters"),
    ("planets", "planets"),
    ("films", "films"),
    ("starships", "starships"),
    ("vehicles", "vehicles"),
    ("species", "species"),
];

/// Resolve the image URL for a resource token and record id.
///
/// Unmapped resource tokens fall back to the host's placeholder image.
///
/// # Examples
///
/// ```
/// use holocron::images::resolve_image;
/// assert!(resolve_image("people", "5").ends_with("/characters/5.jpg"));
/// assert!(resolve_image("droids", "5").ends_with("/placeholder.jpg"));
/// ```
pub fn resolve_image(resource: &str, id: &str) -> String {
    match SEGMENTS.iter().find(|(token, _)| *token == resource) {
        Some((_, segment)) => format!("{IMAGE_BASE_URL}/{segment}/{id}.jpg"),
        None => format!("{IMAGE_BASE_URL}/placeholder.jpg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceType;

    #[test]
    fn people_map_to_the_characters_segment() {
        assert_eq!(
            resolve_image("people", "5"),
            "https://starwars-visualguide.com/assets/img/characters/5.jpg"
        );
    }

    #[test]
    fn unmapped_resource_uses_the_placeholder() {
        assert!(resolve_image("unknown-type", "5").ends_with("/placeholder.jpg"));
        assert!(resolve_image("", "5").ends_with("/placeholder.jpg"));
    }

    #[test]
    fn every_resource_type_has_a_segment() {
        for resource in ResourceType::all() {
            let url = resolve_image(resource.token(), "1");
            assert!(
                !url.ends_with("/placeholder.jpg"),
                "{} should have a mapped segment",
                resource.token()
            );
            assert!(url.ends_with("/1.jpg"));
        }
    }
}
