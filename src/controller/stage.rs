//! Per-slide class sets
//!
//! The stage stands in for the slide containers of the host: one class set
//! per slide, addressed by 1-based position. The controller only ever adds
//! and removes the configured active/previous classes; the renderer reads
//! them back to decide what to draw.

use std::collections::BTreeSet;

#[derive(Debug, Clone)]
pub struct Stage {
    classes: Vec<BTreeSet<String>>,
}

impl Stage {
    pub fn new(slides: usize) -> Self {
        Self {
            classes: vec![BTreeSet::new(); slides],
        }
    }

    /// Add a class to slide `n`; false when there is no such slide
    pub fn add_class(&mut self, n: usize, class: &str) -> bool {
        match n.checked_sub(1).and_then(|i| self.classes.get_mut(i)) {
            Some(set) => {
                set.insert(class.to_string());
                true
            }
            None => false,
        }
    }

    /// Remove the given classes from every slide
    pub fn remove_all(&mut self, classes: &[&str]) {
        for set in &mut self.classes {
            for class in classes {
                set.remove(*class);
            }
        }
    }

    #[cfg(test)]
    pub fn has_class(&self, n: usize, class: &str) -> bool {
        n.checked_sub(1)
            .and_then(|i| self.classes.get(i))
            .is_some_and(|set| set.contains(class))
    }

    /// First slide carrying `class`
    pub fn find(&self, class: &str) -> Option<usize> {
        self.classes
            .iter()
            .position(|set| set.contains(class))
            .map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_and_remove_classes() {
        let mut stage = Stage::new(3);
        assert!(stage.add_class(2, "active"));
        assert!(stage.add_class(1, "prev"));
        assert!(!stage.add_class(4, "active"));
        assert!(!stage.add_class(0, "active"));
        assert_eq!(stage.find("active"), Some(2));

        stage.remove_all(&["active", "prev"]);
        assert_eq!(stage.find("active"), None);
        assert!(!stage.has_class(1, "prev"));
    }
}
