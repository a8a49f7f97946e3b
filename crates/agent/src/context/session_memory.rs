//! Session memory — small key/value facts carried between assembly calls.
//!
//! Entries keep insertion order; updating an existing key replaces its value
//! in place. Rendering packs `key:value` pairs joined by `;` into the memory
//! section's (very small) character budget.

use ragwindow_core::sentinel::{MEMORY_FULL, NO_SESSION_MEMORY};
use serde::{Deserialize, Serialize};

/// A single remembered fact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryItem {
    pub key: String,
    pub value: String,
}

impl MemoryItem {
    /// `key:value`
    pub fn render(&self) -> String {
        format!("{}:{}", self.key, self.value)
    }
}

/// Insertion-ordered session facts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionMemory {
    items: Vec<MemoryItem>,
}

impl SessionMemory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `value` under `key`.
    ///
    /// A key that already exists keeps its position.
    pub fn update(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.items.iter_mut().find(|item| item.key == key) {
            Some(item) => item.value = value,
            None => self.items.push(MemoryItem { key, value }),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|item| item.key == key)
            .map(|item| item.value.as_str())
    }

    pub fn items(&self) -> &[MemoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Render as many leading entries as fit in `limit` characters.
    ///
    /// Each included pair reserves one character for its `;` separator, and
    /// the scan stops at the first pair that does not fit.
    pub fn render(&self, limit: usize) -> String {
        if self.items.is_empty() {
            return NO_SESSION_MEMORY.to_string();
        }

        let mut rendered = Vec::new();
        let mut used = 0;

        for item in &self.items {
            let pair = item.render();
            let pair_len = pair.chars().count();
            if used + pair_len + 1 > limit {
                break;
            }
            used += pair_len + 1;
            rendered.push(pair);
        }

        if rendered.is_empty() {
            MEMORY_FULL.to_string()
        } else {
            rendered.join(";")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_memory_sentinel() {
        assert_eq!(SessionMemory::new().render(55), "[No session memory]");
    }

    #[test]
    fn pairs_joined_in_insertion_order() {
        let mut memory = SessionMemory::new();
        memory.update("user_pref", "CLI");
        memory.update("last_action", "restart");
        assert_eq!(memory.render(55), "user_pref:CLI;last_action:restart");
    }

    #[test]
    fn update_keeps_position() {
        let mut memory = SessionMemory::new();
        memory.update("a", "1");
        memory.update("b", "2");
        memory.update("a", "3");
        assert_eq!(memory.len(), 2);
        assert_eq!(memory.get("a"), Some("3"));
        assert_eq!(memory.render(55), "a:3;b:2");
    }

    #[test]
    fn stops_at_first_pair_that_does_not_fit() {
        let mut memory = SessionMemory::new();
        memory.update("first", "x".repeat(20)); // 26 chars + separator
        memory.update("second", "y".repeat(30)); // 37 chars, does not fit
        memory.update("c", "z"); // would fit, but the scan already stopped
        assert_eq!(memory.render(55), format!("first:{}", "x".repeat(20)));
    }

    #[test]
    fn first_pair_too_long_is_memory_full() {
        let mut memory = SessionMemory::new();
        memory.update("notes", "n".repeat(60));
        assert_eq!(memory.render(55), "[Memory full]");
    }

    #[test]
    fn pair_needs_room_for_separator() {
        let mut memory = SessionMemory::new();
        // "k:" + 52 = 54 chars, plus separator = 55.
        memory.update("k", "v".repeat(52));
        assert_eq!(memory.render(55).chars().count(), 54);

        let mut memory = SessionMemory::new();
        memory.update("k", "v".repeat(53));
        assert_eq!(memory.render(55), "[Memory full]");
    }

    #[test]
    fn rendered_memory_never_exceeds_limit() {
        let mut memory = SessionMemory::new();
        for i in 0..20 {
            memory.update(format!("key{i}"), format!("value{i}"));
        }
        assert!(memory.render(55).chars().count() <= 55);
    }

    #[test]
    fn clear_resets_to_sentinel() {
        let mut memory = SessionMemory::new();
        memory.update("a", "1");
        memory.clear();
        assert!(memory.is_empty());
        assert_eq!(memory.render(55), "[No session memory]");
    }
}
