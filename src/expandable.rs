/// "Show first N" toggle for long tag lists. Starts collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpandableList {
    threshold: usize,
    expanded: bool,
}

impl ExpandableList {
    pub fn new(threshold: usize) -> Self {
        Self {
            threshold,
            expanded: false,
        }
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn toggled(mut self) -> Self {
        self.toggle();
        self
    }

    pub fn has_control(&self, total: usize) -> bool {
        total > self.threshold
    }

    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        if self.has_control(items.len()) && !self.expanded {
            &items[..self.threshold]
        } else {
            items
        }
    }

    /// Label for the toggle control, or `None` when the list is short enough to show whole.
    pub fn control_label(&self, total: usize) -> Option<String> {
        if !self.has_control(total) {
            return None;
        }

        if self.expanded {
            Some("Show Less".to_string())
        } else {
            Some(format!("Show {} More", total - self.threshold))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_list_collapses_and_expands() {
        let skills: Vec<String> = (1..=10).map(|index| format!("skill-{index}")).collect();
        let mut list = ExpandableList::new(8);

        assert_eq!(list.visible(&skills).len(), 8);
        assert_eq!(list.control_label(skills.len()).as_deref(), Some("Show 2 More"));

        list.toggle();
        assert_eq!(list.visible(&skills).len(), 10);
        assert_eq!(list.control_label(skills.len()).as_deref(), Some("Show Less"));

        list.toggle();
        assert_eq!(list.visible(&skills), &skills[..8]);
        assert_eq!(list.control_label(skills.len()).as_deref(), Some("Show 2 More"));
    }

    #[test]
    fn short_list_has_no_control() {
        let skills = ["a", "b", "c", "d", "e", "f", "g", "h"];
        let list = ExpandableList::new(8);

        assert_eq!(list.visible(&skills).len(), 8);
        assert_eq!(list.control_label(skills.len()), None);
        assert_eq!(list.toggled().visible(&skills).len(), 8);
    }
}
