//! The listing display pipeline.
//!
//! A pure function from `(fetched listing, view state)` to the displayed
//! file list. No network, no side effects; the browser memoizes it on its
//! inputs.

use mediahub_core::types::sorting::{SortKey, SortOrder};
use mediahub_entity::file::model::StoredFile;

use crate::view::ViewState;

/// Apply filter, search, and sort to a fetched listing.
///
/// Files equal on the primary sort key keep a deterministic order by
/// sorting ascending on their identifier, regardless of direction.
pub fn display_list(files: &[StoredFile], view: &ViewState) -> Vec<StoredFile> {
    let query = view.search_query.trim().to_lowercase();

    let mut shown: Vec<StoredFile> = files
        .iter()
        .filter(|f| view.filter_kind.map_or(true, |kind| f.kind() == kind))
        .filter(|f| query.is_empty() || f.original_name.to_lowercase().contains(&query))
        .cloned()
        .collect();

    shown.sort_by(|a, b| {
        let primary = match view.sort_by {
            SortKey::Name => a
                .original_name
                .to_lowercase()
                .cmp(&b.original_name.to_lowercase()),
            SortKey::Date => a.created_at.cmp(&b.created_at),
            SortKey::Size => a.size_bytes.cmp(&b.size_bytes),
            SortKey::Type => a.kind().label().cmp(b.kind().label()),
        };
        let directed = match view.sort_order {
            SortOrder::Asc => primary,
            SortOrder::Desc => primary.reverse(),
        };
        directed.then_with(|| a.id.cmp(&b.id))
    });

    shown
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use mediahub_entity::file::kind::FileKind;
    use uuid::Uuid;

    fn file(name: &str, size: i64, age_minutes: i64) -> StoredFile {
        StoredFile {
            id: Uuid::new_v4(),
            original_name: name.to_string(),
            size_bytes: size,
            url: String::new(),
            directory: "/docs".to_string(),
            storage_path: String::new(),
            created_at: Utc::now() - Duration::minutes(age_minutes),
            updated_at: Utc::now(),
        }
    }

    fn names(files: &[StoredFile]) -> Vec<&str> {
        files.iter().map(|f| f.original_name.as_str()).collect()
    }

    #[test]
    fn kind_filter_keeps_only_matching_files() {
        let listing = vec![file("a.pdf", 100, 0), file("b.png", 50, 0)];
        let view = ViewState {
            filter_kind: Some(FileKind::Image),
            ..ViewState::default()
        };

        let shown = display_list(&listing, &view);
        assert_eq!(names(&shown), ["b.png"]);
        assert!(shown.iter().all(|f| f.kind() == FileKind::Image));
    }

    #[test]
    fn empty_search_is_identity() {
        let listing = vec![file("a.txt", 1, 0), file("b.txt", 2, 0)];
        let view = ViewState::default();

        assert_eq!(display_list(&listing, &view).len(), listing.len());
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let listing = vec![
            file("Holiday-Photo.JPG", 1, 0),
            file("invoice.pdf", 1, 0),
            file("photo-booth.png", 1, 0),
        ];
        let view = ViewState {
            search_query: "PHOTO".to_string(),
            ..ViewState::default()
        };

        let shown = display_list(&listing, &view);
        assert_eq!(names(&shown), ["Holiday-Photo.JPG", "photo-booth.png"]);
        for f in &shown {
            assert!(f.original_name.to_lowercase().contains("photo"));
        }
    }

    #[test]
    fn name_sort_ignores_case() {
        let listing = vec![file("banana.txt", 1, 0), file("Apple.txt", 1, 0)];
        let view = ViewState::default();

        assert_eq!(names(&display_list(&listing, &view)), ["Apple.txt", "banana.txt"]);
    }

    #[test]
    fn size_sort_double_reversal_returns_original_order() {
        let listing = vec![file("a", 300, 0), file("b", 100, 0), file("c", 200, 0)];

        let asc = display_list(
            &listing,
            &ViewState {
                sort_by: SortKey::Size,
                sort_order: SortOrder::Asc,
                ..ViewState::default()
            },
        );
        let desc = display_list(
            &listing,
            &ViewState {
                sort_by: SortKey::Size,
                sort_order: SortOrder::Desc,
                ..ViewState::default()
            },
        );

        let mut reversed = desc.clone();
        reversed.reverse();
        assert_eq!(names(&asc), names(&reversed));
    }

    #[test]
    fn equal_primary_keys_tie_break_by_id() {
        let a = file("same-size-1", 100, 0);
        let b = file("same-size-2", 100, 0);
        let (first, second) = if a.id < b.id { (&a, &b) } else { (&b, &a) };

        for order in [SortOrder::Asc, SortOrder::Desc] {
            let view = ViewState {
                sort_by: SortKey::Size,
                sort_order: order,
                ..ViewState::default()
            };
            let shown = display_list(&[a.clone(), b.clone()], &view);
            assert_eq!(shown[0].id, first.id, "order {order:?}");
            assert_eq!(shown[1].id, second.id, "order {order:?}");
        }
    }

    #[test]
    fn date_sort_orders_by_creation_time() {
        let listing = vec![file("old", 1, 60), file("new", 1, 0), file("mid", 1, 30)];
        let view = ViewState {
            sort_by: SortKey::Date,
            sort_order: SortOrder::Desc,
            ..ViewState::default()
        };

        assert_eq!(names(&display_list(&listing, &view)), ["new", "mid", "old"]);
    }

    #[test]
    fn type_sort_groups_by_kind_label() {
        let listing = vec![file("z.png", 1, 0), file("a.zip", 1, 0), file("m.mp3", 1, 0)];
        let view = ViewState {
            sort_by: SortKey::Type,
            ..ViewState::default()
        };

        // archive < audio < image on the kind label.
        assert_eq!(names(&display_list(&listing, &view)), ["a.zip", "m.mp3", "z.png"]);
    }
}
