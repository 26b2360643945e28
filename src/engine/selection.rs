use crate::{repository::Charger, shared::Identifiable};

/// How many chargers can be compared side by side.
pub const SELECTION_CAPACITY: usize = 2;

/// The chargers picked for comparison, oldest first. Never holds more than
/// [`SELECTION_CAPACITY`] entries; going over drops the oldest one.
#[derive(Debug, Clone)]
pub struct Selection<T = Charger> {
    entries: Vec<T>,
}

impl<T> Default for Selection<T> {
    fn default() -> Self {
        Self {
            entries: Vec::with_capacity(SELECTION_CAPACITY + 1),
        }
    }
}

impl<T: Identifiable> Selection<T> {
    pub fn new() -> Self {
        Default::default()
    }

    /// Removes the entry with the same id if there is one, otherwise appends
    /// it and evicts from the front until the capacity holds.
    pub fn toggle(mut self, entry: T) -> Self {
        if let Some(position) = self.position(entry.id()) {
            self.entries.remove(position);
            return self;
        }
        self.entries.push(entry);
        while self.entries.len() > SELECTION_CAPACITY {
            self.entries.remove(0);
        }
        self
    }

    pub fn contains(&self, id: &str) -> bool {
        self.position(id).is_some()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.id()).collect()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }
}

impl<T> Selection<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[derive(Debug, Clone, PartialEq)]
struct Pin(&'static str);

#[cfg(test)]
impl Identifiable for Pin {
    fn id(&self) -> &str {
        self.0
    }

    fn name(&self) -> &str {
        self.0
    }

    fn normalized_name(&self) -> &str {
        self.0
    }
}

#[test]
fn toggle_evicts_oldest_test() {
    let selection = Selection::new()
        .toggle(Pin("a"))
        .toggle(Pin("b"))
        .toggle(Pin("c"));
    assert_eq!(selection.ids(), vec!["b", "c"]);
}

#[test]
fn toggle_twice_restores_test() {
    let selection = Selection::new().toggle(Pin("a"));
    let selection = selection.toggle(Pin("b")).toggle(Pin("b"));
    assert_eq!(selection.ids(), vec!["a"]);
}

#[test]
fn toggle_removes_by_id_test() {
    let selection = Selection::new()
        .toggle(Pin("a"))
        .toggle(Pin("b"))
        .toggle(Pin("a"));
    assert_eq!(selection.ids(), vec!["b"]);
}
