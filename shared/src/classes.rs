//! A small model of a DOM class list.
//!
//! Styling steps are described as [`ClassEdit`]s so the same data can be
//! applied to a real `DOMTokenList` in the browser or to a [`ClassSet`] in
//! native tests.

/// Classes to remove, then classes to add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassEdit {
    pub remove: &'static [&'static str],
    pub add: &'static [&'static str],
}

impl ClassEdit {
    pub const fn new(remove: &'static [&'static str], add: &'static [&'static str]) -> Self {
        Self { remove, add }
    }

    /// The edit that undoes this one.
    pub const fn inverse(&self) -> Self {
        Self {
            remove: self.add,
            add: self.remove,
        }
    }
}

/// Ordered set of class names, mirroring `Element.classList` semantics.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    classes: Vec<String>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a `class` attribute value.
    pub fn parse(value: &str) -> Self {
        let mut set = Self::new();
        for class in value.split_whitespace() {
            set.add(class);
        }
        set
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn contains_any(&self, classes: &[&str]) -> bool {
        classes.iter().any(|c| self.contains(c))
    }

    pub fn add(&mut self, class: &str) {
        if !self.contains(class) {
            self.classes.push(class.to_string());
        }
    }

    pub fn remove(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    pub fn apply(&mut self, edit: &ClassEdit) {
        for class in edit.remove {
            self.remove(class);
        }
        for class in edit.add {
            self.add(class);
        }
    }
}
