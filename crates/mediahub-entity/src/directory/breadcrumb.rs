//! Breadcrumb derivation.
//!
//! Breadcrumbs are a pure derivation from the current path string, not a
//! stored structure: split on `/`, discard empty segments, and build the
//! trail by cumulative concatenation.

use serde::{Deserialize, Serialize};

use crate::directory::model::ROOT_PATH;

/// One entry in the navigation trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Display name of the segment.
    pub name: String,
    /// Absolute path the segment navigates to.
    pub path: String,
}

/// Derive the breadcrumb trail for a directory path.
///
/// Always starts with `Root` at `/`; the last entry's path equals the
/// input path (for non-root inputs). Length is `1 + number of non-empty
/// segments`.
pub fn breadcrumbs(path: &str) -> Vec<Breadcrumb> {
    let mut trail = vec![Breadcrumb {
        name: "Root".to_string(),
        path: ROOT_PATH.to_string(),
    }];

    let mut cumulative = String::new();
    for segment in path.split('/').filter(|s| !s.is_empty()) {
        cumulative.push('/');
        cumulative.push_str(segment);
        trail.push(Breadcrumb {
            name: segment.to_string(),
            path: cumulative.clone(),
        });
    }

    trail
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_yields_single_entry() {
        let trail = breadcrumbs("/");
        assert_eq!(trail.len(), 1);
        assert_eq!(trail[0].name, "Root");
        assert_eq!(trail[0].path, "/");
    }

    #[test]
    fn trail_starts_at_root_and_ends_at_input() {
        let trail = breadcrumbs("/photos/events/2026");
        assert_eq!(trail.len(), 4);
        assert_eq!(trail[0].path, "/");
        assert_eq!(trail[1], Breadcrumb { name: "photos".into(), path: "/photos".into() });
        assert_eq!(trail[2], Breadcrumb { name: "events".into(), path: "/photos/events".into() });
        assert_eq!(trail[3], Breadcrumb { name: "2026".into(), path: "/photos/events/2026".into() });
    }

    #[test]
    fn length_is_one_plus_segment_count() {
        for (path, segments) in [("/", 0), ("/a", 1), ("/a/b", 2), ("//a//b/", 2)] {
            assert_eq!(breadcrumbs(path).len(), 1 + segments, "path {path}");
        }
    }

    #[test]
    fn empty_segments_are_discarded() {
        let trail = breadcrumbs("//docs//drafts/");
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[2].path, "/docs/drafts");
    }
}
