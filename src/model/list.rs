use chrono::Utc;

use crate::model::item::Item;

/// In-memory list state: the item collection plus the UI-adjacent flags.
///
/// Transitions here are pure over the state — persistence is wired in one
/// level up (see `store::ListStore`). Every mutation builds a complete new
/// `Vec<Item>` and swaps it in; a snapshot handed out before the mutation is
/// never modified in place.
#[derive(Debug, Clone, Default)]
pub struct TodoList {
    /// Insertion order = display order; keys pairwise distinct
    items: Vec<Item>,
    /// Set only by `toggle_all_complete` — individual toggles do NOT
    /// reconcile this flag, so it can drift from the true aggregate.
    /// Matches the shipped behavior; pinned by tests.
    all_complete: bool,
    /// Pending new-item input text (transient, not persisted)
    pub value: String,
    /// True from startup until the initial load resolves
    loading: bool,
}

impl TodoList {
    /// Empty list, waiting on the initial load
    pub fn new() -> Self {
        TodoList {
            items: Vec::new(),
            all_complete: false,
            value: String::new(),
            loading: true,
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn all_complete(&self) -> bool {
        self.all_complete
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    /// Replace the collection with the result of the initial load
    /// (`None` = nothing persisted or parse failure) and clear `loading`.
    pub fn load(&mut self, items: Option<Vec<Item>>) {
        if let Some(items) = items {
            self.items = items;
        }
        self.loading = false;
    }

    /// Append a new item with the given text. Blank text is a no-op.
    /// Clears the pending input value. Returns true if an item was added.
    pub fn add_item(&mut self, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        let item = Item::new(self.next_key(), trimmed.to_string());
        let mut items = self.items.clone();
        items.push(item);
        self.items = items;
        self.value.clear();
        true
    }

    /// Remove the item with the given key. Absent key is a silent no-op.
    /// Returns true if an item was removed.
    pub fn remove_item(&mut self, key: i64) -> bool {
        let before = self.items.len();
        let items: Vec<Item> = self
            .items
            .iter()
            .filter(|item| item.key != key)
            .cloned()
            .collect();
        let removed = items.len() != before;
        self.items = items;
        removed
    }

    /// Set `complete` on the matching item only. Absent key is a no-op.
    /// Does not touch `all_complete`. Returns true if an item changed.
    pub fn toggle_complete(&mut self, key: i64, complete: bool) -> bool {
        let mut changed = false;
        let items: Vec<Item> = self
            .items
            .iter()
            .map(|item| {
                if item.key != key {
                    return item.clone();
                }
                changed = true;
                Item {
                    complete,
                    ..item.clone()
                }
            })
            .collect();
        self.items = items;
        changed
    }

    /// Flip the aggregate flag and assign it to every item
    pub fn toggle_all_complete(&mut self) {
        let complete = !self.all_complete;
        let items: Vec<Item> = self
            .items
            .iter()
            .map(|item| Item {
                complete,
                ..item.clone()
            })
            .collect();
        self.items = items;
        self.all_complete = complete;
    }

    /// Next creation key: the current millisecond timestamp, bumped past the
    /// last allocated key so same-millisecond adds stay distinct.
    fn next_key(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.items.last() {
            Some(last) if last.key >= now => last.key + 1,
            _ => now,
        }
    }
}
