//! Screen-space UI state: hover labels and the detail panel.
//!
//! Nothing here draws; a host reads visibility and text each frame.

use glam::Vec3;

use crate::scene::Category;

/// A floating text label tied to one object category.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    /// Category whose hover reveals this label.
    pub category: Category,
    /// Label text.
    pub text: String,
    /// World-space anchor.
    pub anchor: Vec3,
    /// Whether the label is currently shown.
    pub visible: bool,
}

/// Hover labels. At most one is visible at a time.
#[derive(Debug, Clone, Default)]
pub struct HoverLabels {
    labels: Vec<Label>,
}

impl HoverLabels {
    /// Empty label set.
    #[must_use]
    pub fn new() -> Self {
        Self { labels: Vec::new() }
    }

    /// Register a hidden label for `category`.
    pub fn add(
        &mut self,
        category: Category,
        text: impl Into<String>,
        anchor: Vec3,
    ) {
        self.labels.push(Label {
            category,
            text: text.into(),
            anchor,
            visible: false,
        });
    }

    /// Show the label for `category` (if any) and hide all others.
    /// `None` hides everything.
    pub fn show_only(&mut self, category: Option<Category>) {
        let mut shown = false;
        for label in &mut self.labels {
            label.visible = !shown && Some(label.category) == category;
            shown |= label.visible;
        }
    }

    /// The visible label, if any.
    #[must_use]
    pub fn visible(&self) -> Option<&Label> {
        self.labels.iter().find(|l| l.visible)
    }

    /// All labels in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter()
    }
}

/// Text surface describing the selected object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailPanel {
    text: String,
    visible: bool,
}

impl DetailPanel {
    /// Show `text`.
    pub fn show(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.visible = true;
    }

    /// Hide the panel and drop its text.
    pub fn hide(&mut self) {
        self.text.clear();
        self.visible = false;
    }

    /// Whether the panel is shown.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Current text (empty when hidden).
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels() -> HoverLabels {
        let mut labels = HoverLabels::new();
        labels.add(Category::Building, "Hotel", Vec3::ZERO);
        labels.add(Category::Pool, "Pool", Vec3::ZERO);
        labels
    }

    #[test]
    fn show_only_is_exclusive() {
        let mut labels = labels();
        labels.show_only(Some(Category::Pool));
        assert_eq!(labels.iter().filter(|l| l.visible).count(), 1);
        assert_eq!(labels.visible().map(|l| l.text.as_str()), Some("Pool"));

        labels.show_only(Some(Category::Building));
        assert_eq!(labels.iter().filter(|l| l.visible).count(), 1);
        assert_eq!(labels.visible().map(|l| l.category), Some(Category::Building));
    }

    #[test]
    fn unlabelled_category_hides_everything() {
        let mut labels = labels();
        labels.show_only(Some(Category::Pool));
        labels.show_only(Some(Category::Decor));
        assert!(labels.visible().is_none());
    }

    #[test]
    fn panel_hide_clears_text() {
        let mut panel = DetailPanel::default();
        panel.show("Pool");
        assert!(panel.is_visible());
        panel.hide();
        assert!(!panel.is_visible());
        assert_eq!(panel.text(), "");
    }
}
