use std::sync::Arc;

use crate::io::gateway::ItemGateway;
use crate::model::{Item, TodoList};

/// The list state store: authoritative in-memory state plus the injected
/// persistence capability.
///
/// Every transition that changes the item collection mirrors the new
/// snapshot to the gateway before returning. `load` is the one exception —
/// replaying the initial read back into storage would be a pointless write
/// (and on a parse failure would clobber whatever is on disk with nothing).
pub struct ListStore {
    list: TodoList,
    gateway: Arc<dyn ItemGateway>,
}

impl ListStore {
    /// Empty store in the loading state
    pub fn new(gateway: Arc<dyn ItemGateway>) -> Self {
        ListStore {
            list: TodoList::new(),
            gateway,
        }
    }

    pub fn items(&self) -> &[Item] {
        self.list.items()
    }

    pub fn all_complete(&self) -> bool {
        self.list.all_complete()
    }

    pub fn loading(&self) -> bool {
        self.list.loading()
    }

    /// Pending new-item input text
    pub fn value(&self) -> &str {
        &self.list.value
    }

    pub fn set_value(&mut self, value: String) {
        self.list.value = value;
    }

    pub fn failed_saves(&self) -> usize {
        self.gateway.failed_saves()
    }

    /// Apply the result of the initial load. Does not save.
    pub fn load(&mut self, items: Option<Vec<Item>>) {
        self.list.load(items);
    }

    /// Append a new item (blank text is a no-op) and persist
    pub fn add_item(&mut self, text: &str) {
        if self.list.add_item(text) {
            self.gateway.save(self.list.items());
        }
    }

    /// Submit the pending input as a new item
    pub fn submit_value(&mut self) {
        let text = self.list.value.clone();
        self.add_item(&text);
    }

    /// Remove by key (absent key is a no-op) and persist
    pub fn remove_item(&mut self, key: i64) {
        if self.list.remove_item(key) {
            self.gateway.save(self.list.items());
        }
    }

    /// Set one item's completion flag (absent key is a no-op) and persist
    pub fn toggle_complete(&mut self, key: i64, complete: bool) {
        if self.list.toggle_complete(key, complete) {
            self.gateway.save(self.list.items());
        }
    }

    /// Flip the aggregate flag onto every item and persist
    pub fn toggle_all_complete(&mut self) {
        self.list.toggle_all_complete();
        self.gateway.save(self.list.items());
    }
}
