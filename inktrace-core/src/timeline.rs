//! The central `Timeline` struct: owns the in-memory collection and the
//! active filter, and mirrors every mutation back through the store.

use crate::config::Config;
use crate::entry::Entry;
use crate::ids::generate_id;
use crate::parse_input::{parse_tags, sanitize_text};
use crate::paths::store_path;
use crate::store::{LoadResult, Store, StoreError};
use crate::timestamps::{now_iso, parse_iso};
use std::cmp::Reverse;
use std::collections::HashMap;

/// The active view restriction. Text and tag filters replace each other,
/// so the two can never be active at once.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Filter {
    #[default]
    None,
    Text(String),
    Tag(String),
}

#[derive(Debug)]
pub enum CreateOutcome {
    Created(Entry),
    /// The sanitized text came out empty; nothing was changed.
    EmptyText,
}

#[derive(Debug)]
pub enum UpdateOutcome {
    Updated(Entry),
    /// No entry had the requested id, so the input was saved as a new
    /// entry instead.
    CreatedNew(Entry),
    EmptyText,
}

#[derive(Debug, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Cancelled,
    NotFound,
}

#[derive(Debug, PartialEq, Eq)]
pub enum ClearOutcome {
    Cleared,
    Cancelled,
}

/// Holds the authoritative in-memory collection for the session.
///
/// Every mutation persists the full collection before returning; a failed
/// write keeps the in-memory change and surfaces the error so the caller
/// can report that the save did not take effect.
pub struct Timeline {
    store: Store,
    entries: Vec<Entry>,
    filter: Filter,
}

impl Timeline {
    /// Opens the timeline for the configured data directory. Load
    /// problems come back alongside the timeline; the timeline itself
    /// always starts usable, falling back to an empty collection.
    pub fn open(config: &Config) -> (Self, Vec<StoreError>) {
        Self::with_store(Store::new(store_path(&config.data_dir)))
    }

    pub fn with_store(store: Store) -> (Self, Vec<StoreError>) {
        let LoadResult { mut entries, errors } = store.load();
        sort_newest_first(&mut entries);
        (
            Self {
                store,
                entries,
                filter: Filter::None,
            },
            errors,
        )
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn find(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Sanitizes and saves a new entry at the head of the collection.
    pub fn create_entry(
        &mut self,
        raw_text: &str,
        raw_tags: &str,
    ) -> Result<CreateOutcome, StoreError> {
        let text = sanitize_text(raw_text);
        if text.is_empty() {
            return Ok(CreateOutcome::EmptyText);
        }
        let entry = Entry {
            id: generate_id(),
            text,
            tags: parse_tags(raw_tags),
            created_at: now_iso(),
            updated_at: None,
        };
        self.entries.insert(0, entry.clone());
        self.persist()?;
        Ok(CreateOutcome::Created(entry))
    }

    /// Rewrites an existing entry's text and tags, stamping `updated_at`.
    /// An id that no longer exists falls through to creating a new entry;
    /// the outcome tells the caller which of the two happened.
    pub fn update_entry(
        &mut self,
        id: &str,
        raw_text: &str,
        raw_tags: &str,
    ) -> Result<UpdateOutcome, StoreError> {
        let text = sanitize_text(raw_text);
        if text.is_empty() {
            return Ok(UpdateOutcome::EmptyText);
        }
        let tags = parse_tags(raw_tags);
        match self.entries.iter_mut().find(|e| e.id == id) {
            Some(entry) => {
                entry.text = text;
                entry.tags = tags;
                entry.updated_at = Some(now_iso());
                let updated = entry.clone();
                self.persist()?;
                Ok(UpdateOutcome::Updated(updated))
            }
            None => {
                let entry = Entry {
                    id: generate_id(),
                    text,
                    tags,
                    created_at: now_iso(),
                    updated_at: None,
                };
                self.entries.insert(0, entry.clone());
                self.persist()?;
                Ok(UpdateOutcome::CreatedNew(entry))
            }
        }
    }

    /// Removes the entry with the given id after the caller's blocking
    /// confirmation. An unknown id is a no-op and never prompts.
    pub fn delete_entry(
        &mut self,
        id: &str,
        confirm: impl FnOnce() -> bool,
    ) -> Result<DeleteOutcome, StoreError> {
        if !self.entries.iter().any(|e| e.id == id) {
            return Ok(DeleteOutcome::NotFound);
        }
        if !confirm() {
            return Ok(DeleteOutcome::Cancelled);
        }
        self.entries.retain(|e| e.id != id);
        self.persist()?;
        Ok(DeleteOutcome::Deleted)
    }

    /// Empties the persisted blob and the in-memory collection, after the
    /// caller's blocking confirmation.
    pub fn clear_all(
        &mut self,
        confirm: impl FnOnce() -> bool,
    ) -> Result<ClearOutcome, StoreError> {
        if !confirm() {
            return Ok(ClearOutcome::Cancelled);
        }
        self.store.clear()?;
        self.entries.clear();
        Ok(ClearOutcome::Cleared)
    }

    /// Setting a text filter clears any tag filter. Blank input clears
    /// the filter entirely: an empty search means "show everything".
    pub fn set_text_filter(&mut self, term: &str) {
        let term = term.trim();
        self.filter = if term.is_empty() {
            Filter::None
        } else {
            Filter::Text(term.to_string())
        };
    }

    pub fn set_tag_filter(&mut self, tag: &str) {
        let tag = tag.trim().to_lowercase();
        self.filter = if tag.is_empty() {
            Filter::None
        } else {
            Filter::Tag(tag)
        };
    }

    pub fn clear_filter(&mut self) {
        self.filter = Filter::None;
    }

    /// Entries newest first, restricted by the active filter. The order
    /// is recomputed here on every call rather than trusted from storage.
    pub fn filtered_view(&self) -> Vec<&Entry> {
        let mut view: Vec<&Entry> = self
            .entries
            .iter()
            .filter(|e| self.matches(e))
            .collect();
        view.sort_by_key(|e| Reverse(created_millis(e)));
        view
    }

    fn matches(&self, entry: &Entry) -> bool {
        match &self.filter {
            Filter::None => true,
            Filter::Tag(tag) => entry.tags.iter().any(|t| t == tag),
            Filter::Text(term) => {
                let needle = term.to_lowercase();
                if entry.text.to_lowercase().contains(&needle) {
                    return true;
                }
                // A leading `#` is not part of any stored tag.
                let tag_needle = needle.strip_prefix('#').unwrap_or(&needle);
                entry.tags.iter().any(|t| t.contains(tag_needle))
            }
        }
    }

    /// Occurrence counts of each tag across all entries, unordered.
    pub fn tag_frequency(&self) -> HashMap<String, usize> {
        let mut map = HashMap::new();
        for entry in &self.entries {
            for tag in &entry.tags {
                *map.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        map
    }

    /// Tag frequency ordered for presentation: highest count first, ties
    /// alphabetical.
    pub fn tag_cloud(&self) -> Vec<(String, usize)> {
        let mut cloud: Vec<(String, usize)> = self.tag_frequency().into_iter().collect();
        cloud.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        cloud
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.store.save(&self.entries)
    }
}

fn created_millis(entry: &Entry) -> Option<i64> {
    parse_iso(&entry.created_at).map(|dt| dt.timestamp_millis())
}

// Stable sort; entries whose timestamp does not parse end up last.
fn sort_newest_first(entries: &mut [Entry]) {
    entries.sort_by_key(|e| Reverse(created_millis(e)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use std::fs;
    use tempfile::tempdir;

    fn mk_timeline() -> (Timeline, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let store = Store::new(tmp.path().join("inktrace").join("entries.v1.json"));
        let (timeline, errors) = Timeline::with_store(store);
        assert!(errors.is_empty());
        (timeline, tmp)
    }

    fn push_entry(timeline: &mut Timeline, id: &str, text: &str, tags: &[&str], created_at: &str) {
        timeline.entries.push(Entry {
            id: id.to_string(),
            text: text.to_string(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            created_at: created_at.to_string(),
            updated_at: None,
        });
    }

    #[test]
    fn open_uses_the_configured_data_dir() {
        let tmp = tempdir().unwrap();
        let config = mk_config(tmp.path().join("inktrace"));
        let (mut timeline, errors) = Timeline::open(&config);
        assert!(errors.is_empty());

        timeline.create_entry("First note", "").unwrap();
        assert!(store_path(&config.data_dir).exists());
    }

    #[test]
    fn create_inserts_at_head_and_persists() {
        let (mut timeline, _tmp) = mk_timeline();
        timeline.create_entry("First note", "work").unwrap();
        timeline.create_entry("Second note", "").unwrap();

        assert_eq!(timeline.entries().len(), 2);
        assert_eq!(timeline.entries()[0].text, "Second note");

        // A fresh timeline over the same store sees both entries.
        let (reloaded, errors) = Timeline::with_store(timeline.store().clone());
        assert!(errors.is_empty());
        assert_eq!(reloaded.entries().len(), 2);
    }

    #[test]
    fn create_sanitizes_text_and_parses_tags() {
        let (mut timeline, _tmp) = mk_timeline();
        let outcome = timeline
            .create_entry(" Standup notes\u{0} ", "Work, ,Personal, work")
            .unwrap();

        let CreateOutcome::Created(entry) = outcome else {
            panic!("expected a created entry");
        };
        assert_eq!(entry.text, "Standup notes");
        assert_eq!(entry.tags, vec!["work", "personal", "work"]);
        assert!(entry.updated_at.is_none());
    }

    #[test]
    fn empty_text_is_rejected_without_touching_state() {
        let (mut timeline, _tmp) = mk_timeline();
        let outcome = timeline.create_entry("  \u{7f} \t", "work").unwrap();

        assert!(matches!(outcome, CreateOutcome::EmptyText));
        assert!(timeline.entries().is_empty());
        // Nothing was persisted either.
        assert!(!timeline.store().path().exists());
    }

    #[test]
    fn view_is_newest_first_regardless_of_insertion_order() {
        let (mut timeline, _tmp) = mk_timeline();
        push_entry(&mut timeline, "a", "oldest", &[], "2025-08-13T10:00:00.000Z");
        push_entry(&mut timeline, "b", "newest", &[], "2025-08-15T10:00:00.000Z");
        push_entry(&mut timeline, "c", "middle", &[], "2025-08-14T10:00:00.000Z");

        let view = timeline.filtered_view();
        let texts: Vec<&str> = view.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, vec!["newest", "middle", "oldest"]);
    }

    #[test]
    fn unparseable_timestamps_sort_after_valid_ones() {
        let (mut timeline, _tmp) = mk_timeline();
        push_entry(&mut timeline, "a", "broken", &[], "not a timestamp");
        push_entry(&mut timeline, "b", "valid", &[], "2025-08-15T10:00:00.000Z");

        let view = timeline.filtered_view();
        assert_eq!(view[0].text, "valid");
        assert_eq!(view[1].text, "broken");
    }

    #[test]
    fn update_rewrites_text_and_tags_and_stamps_updated_at() {
        let (mut timeline, _tmp) = mk_timeline();
        timeline.create_entry("Original", "work").unwrap();
        let id = timeline.entries()[0].id.clone();
        let created_at = timeline.entries()[0].created_at.clone();

        let outcome = timeline.update_entry(&id, "Revised", "life").unwrap();
        let UpdateOutcome::Updated(entry) = outcome else {
            panic!("expected an update");
        };
        assert_eq!(entry.text, "Revised");
        assert_eq!(entry.tags, vec!["life"]);
        assert!(entry.updated_at.is_some());
        assert_eq!(entry.created_at, created_at);
        assert_eq!(timeline.entries().len(), 1);
    }

    #[test]
    fn update_of_missing_id_creates_a_new_entry() {
        let (mut timeline, _tmp) = mk_timeline();
        timeline.create_entry("Existing", "").unwrap();

        let outcome = timeline
            .update_entry("no-such-id", "Brand new", "work")
            .unwrap();
        let UpdateOutcome::CreatedNew(entry) = outcome else {
            panic!("expected fall-through to create");
        };
        assert_ne!(entry.id, "no-such-id");
        assert!(entry.updated_at.is_none());
        assert_eq!(timeline.entries().len(), 2);
    }

    #[test]
    fn delete_requires_confirmation() {
        let (mut timeline, _tmp) = mk_timeline();
        timeline.create_entry("Keep or delete", "").unwrap();
        let id = timeline.entries()[0].id.clone();

        let cancelled = timeline.delete_entry(&id, || false).unwrap();
        assert_eq!(cancelled, DeleteOutcome::Cancelled);
        assert_eq!(timeline.entries().len(), 1);

        let deleted = timeline.delete_entry(&id, || true).unwrap();
        assert_eq!(deleted, DeleteOutcome::Deleted);
        assert!(timeline.entries().is_empty());
    }

    #[test]
    fn delete_of_unknown_id_is_a_no_op_and_never_prompts() {
        let (mut timeline, _tmp) = mk_timeline();
        timeline.create_entry("Only entry", "").unwrap();

        let outcome = timeline
            .delete_entry("no-such-id", || panic!("unknown ids must not prompt"))
            .unwrap();
        assert_eq!(outcome, DeleteOutcome::NotFound);
        assert_eq!(timeline.entries().len(), 1);
    }

    #[test]
    fn clear_all_empties_memory_and_store() {
        let (mut timeline, _tmp) = mk_timeline();
        timeline.create_entry("One", "").unwrap();
        timeline.create_entry("Two", "").unwrap();

        let cancelled = timeline.clear_all(|| false).unwrap();
        assert_eq!(cancelled, ClearOutcome::Cancelled);
        assert_eq!(timeline.entries().len(), 2);

        let cleared = timeline.clear_all(|| true).unwrap();
        assert_eq!(cleared, ClearOutcome::Cleared);
        assert!(timeline.entries().is_empty());
        assert!(!timeline.store().path().exists());
    }

    #[test]
    fn tag_filter_matches_exactly() {
        let (mut timeline, _tmp) = mk_timeline();
        push_entry(&mut timeline, "a", "tagged work", &["work"], "2025-08-15T10:00:00.000Z");
        push_entry(&mut timeline, "b", "tagged workout", &["workout"], "2025-08-15T11:00:00.000Z");
        push_entry(&mut timeline, "c", "untagged", &[], "2025-08-15T12:00:00.000Z");

        timeline.set_tag_filter("work");
        let view = timeline.filtered_view();
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "a");
    }

    #[test]
    fn text_filter_searches_text_and_tag_substrings() {
        let (mut timeline, _tmp) = mk_timeline();
        push_entry(&mut timeline, "a", "Worked on the parser", &[], "2025-08-15T10:00:00.000Z");
        push_entry(&mut timeline, "b", "quiet day", &["workout"], "2025-08-15T11:00:00.000Z");
        push_entry(&mut timeline, "c", "nothing here", &["life"], "2025-08-15T12:00:00.000Z");

        // Case-insensitive over text, substring over tags.
        timeline.set_text_filter("work");
        let ids: Vec<&str> = timeline.filtered_view().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);

        // A leading `#` only ever targets tags by substring.
        timeline.set_text_filter("#work");
        let ids: Vec<&str> = timeline.filtered_view().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
    }

    #[test]
    fn filters_are_mutually_exclusive_and_blank_clears() {
        let (mut timeline, _tmp) = mk_timeline();
        timeline.set_tag_filter("work");
        assert_eq!(timeline.filter(), &Filter::Tag("work".to_string()));

        timeline.set_text_filter("coffee");
        assert_eq!(timeline.filter(), &Filter::Text("coffee".to_string()));

        timeline.set_tag_filter("life");
        assert_eq!(timeline.filter(), &Filter::Tag("life".to_string()));

        timeline.set_text_filter("   ");
        assert_eq!(timeline.filter(), &Filter::None);
    }

    #[test]
    fn tag_frequency_counts_across_entries() {
        let (mut timeline, _tmp) = mk_timeline();
        push_entry(&mut timeline, "1", "x", &["a", "b"], "2025-08-15T10:00:00.000Z");
        push_entry(&mut timeline, "2", "y", &["a"], "2025-08-15T11:00:00.000Z");

        let freq = timeline.tag_frequency();
        assert_eq!(freq.get("a"), Some(&2));
        assert_eq!(freq.get("b"), Some(&1));
        assert_eq!(freq.len(), 2);

        assert_eq!(
            timeline.tag_cloud(),
            vec![("a".to_string(), 2), ("b".to_string(), 1)]
        );
    }

    #[test]
    fn failed_save_keeps_the_in_memory_change_and_reports() {
        let tmp = tempdir().unwrap();
        // The store's parent "directory" is a plain file, so saving fails.
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "x").unwrap();
        let (mut timeline, errors) =
            Timeline::with_store(Store::new(blocker.join("entries.v1.json")));
        assert!(errors.is_empty());

        let err = timeline.create_entry("Doomed entry", "").unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert_eq!(timeline.entries().len(), 1);
    }
}
