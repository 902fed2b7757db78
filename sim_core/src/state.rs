use indexmap::IndexMap;
use sim_input::MenuKey;

use crate::range::RangeValue;

/// Current values of one kind of widget, keyed by widget identifier.
///
/// A value is inserted the first time its identifier is seen and is only ever
/// overwritten afterwards, never removed.
#[derive(Debug, Clone)]
pub struct WidgetTable<T> {
    values: IndexMap<String, T>,
}

impl<T> Default for WidgetTable<T> {
    fn default() -> Self {
        Self {
            values: IndexMap::new(),
        }
    }
}

impl<T> WidgetTable<T> {
    pub fn get(&self, id: &str) -> Option<&T> {
        self.values.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.values.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Identifiers and values in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.values.iter().map(|(id, value)| (id.as_str(), value))
    }

    /// Returns the value for `id`, inserting `init()` if it has never been seen.
    pub fn get_or_insert_with(&mut self, id: &str, init: impl FnOnce() -> T) -> &mut T {
        // Avoid allocating the key on every frame once the widget exists.
        match self.values.get_index_of(id) {
            Some(index) => &mut self.values[index],
            None => self.values.entry(id.to_string()).or_insert_with(init),
        }
    }

    pub(crate) fn set(&mut self, id: &str, value: T) {
        match self.values.get_mut(id) {
            Some(slot) => *slot = value,
            None => {
                self.values.insert(id.to_string(), value);
            }
        }
    }
}

impl<T: Copy> WidgetTable<T> {
    pub fn get_or_insert(&mut self, id: &str, initial: T) -> T {
        *self.get_or_insert_with(id, || initial)
    }
}

/// One table per widget kind. Kinds don't share identifiers, so a switch and a
/// slider can both be called "speed".
#[derive(Debug, Clone, Default)]
pub struct WidgetStates {
    pub switches: WidgetTable<bool>,
    pub sliders: WidgetTable<f32>,
    pub dropdowns: WidgetTable<usize>,
    pub ranges: WidgetTable<RangeValue>,
    pub texts: WidgetTable<String>,
    pub numbers: WidgetTable<f32>,
    pub keybinds: WidgetTable<MenuKey>,
}
