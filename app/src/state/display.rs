use std::time::Duration;

use crate::catalog::{Category, Project};

/// How long the collapsed grid keeps the expanded layout while the
/// viewport scrolls back to the toggle control.
pub const COLLAPSE_DELAY: Duration = Duration::from_millis(300);

/// Scroll offset that puts the section heading a bit below the sticky
/// header instead of flush against the viewport top.
pub const SCROLL_OFFSET_PX: f64 = 120.0;

/// Active portfolio filter. Only meaningful while the full catalog is
/// shown; the featured subset ignores it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Only(Category),
}

impl Filter {
    pub fn label(self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Only(category) => category.label(),
        }
    }

    fn matches(self, category: Category) -> bool {
        match self {
            Filter::All => true,
            Filter::Only(wanted) => wanted == category,
        }
    }
}

/// Which side effect the view has to drive after a successful toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    /// The full catalog just became visible; scroll to the section once
    /// the expanded grid has been laid out, then call [`ProjectDisplay::settle`].
    Expanded,
    /// The collapse has been requested; scroll the toggle control into
    /// view and call [`ProjectDisplay::commit_collapse`] after
    /// [`COLLAPSE_DELAY`].
    Collapsing,
}

/// Presentation state for the project grid: featured subset vs. the full,
/// filterable catalog, plus the bounded transition window around a mode
/// switch.
#[derive(Clone, Debug)]
pub struct ProjectDisplay {
    catalog: &'static [Project],
    show_all: bool,
    filter: Filter,
    transitioning: bool,
}

impl ProjectDisplay {
    pub fn new(catalog: &'static [Project]) -> Self {
        Self {
            catalog,
            show_all: false,
            filter: Filter::default(),
            transitioning: false,
        }
    }

    pub fn show_all(&self) -> bool {
        self.show_all
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn is_transitioning(&self) -> bool {
        self.transitioning
    }

    /// Flips between the featured subset and the full catalog. Returns
    /// `None` while a transition is already in flight, so that repeated
    /// clicks cannot overlap two scroll animations.
    pub fn toggle(&mut self) -> Option<Toggle> {
        if self.transitioning {
            return None;
        }
        self.transitioning = true;
        if self.show_all {
            // The grid stays expanded until the collapse commits, so the
            // scroll back to the toggle control has stable geometry.
            Some(Toggle::Collapsing)
        } else {
            self.show_all = true;
            self.filter = Filter::All;
            Some(Toggle::Expanded)
        }
    }

    /// Ends the expansion transition once the scroll target has been
    /// computed from settled layout.
    pub fn settle(&mut self) {
        self.transitioning = false;
    }

    /// Commits a pending collapse back to the featured subset.
    pub fn commit_collapse(&mut self) {
        self.show_all = false;
        self.filter = Filter::All;
        self.transitioning = false;
    }

    /// Replaces the active filter. Only valid while the full catalog is
    /// shown and no transition is in flight; returns whether the filter
    /// was applied.
    pub fn set_filter(&mut self, filter: Filter) -> bool {
        if !self.show_all || self.transitioning {
            return false;
        }
        self.filter = filter;
        true
    }

    /// The projects to render, in catalog order: the featured subset by
    /// default, the (filtered) full catalog while expanded. A filter that
    /// matches nothing yields an empty set.
    pub fn visible(&self) -> Vec<&'static Project> {
        if !self.show_all {
            return self.catalog.iter().filter(|p| p.featured).collect();
        }
        self.catalog
            .iter()
            .filter(|p| self.filter.matches(p.category))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::PROJECTS;

    fn display() -> ProjectDisplay {
        ProjectDisplay::new(PROJECTS)
    }

    #[test]
    fn starts_on_the_featured_subset() {
        let display = display();
        assert!(!display.show_all());
        assert_eq!(Filter::All, display.filter());
        let names: Vec<&str> = display.visible().iter().map(|p| p.name).collect();
        assert_eq!(
            vec!["Classic Team Realty", "Fromm Scratch", "Mitch Harris"],
            names,
        );
    }

    #[test]
    fn featured_subset_ignores_the_filter() {
        let mut display = display();
        // force a stale filter through the full-catalog mode, then collapse
        display.toggle();
        display.settle();
        display.set_filter(Filter::Only(Category::UiUxDesign));
        display.toggle();
        display.commit_collapse();
        assert_eq!(3, display.visible().len());
        assert_eq!(Filter::All, display.filter());
    }

    #[test]
    fn expanding_shows_the_whole_catalog_in_order() {
        let mut display = display();
        assert_eq!(Some(Toggle::Expanded), display.toggle());
        display.settle();
        let visible = display.visible();
        assert_eq!(PROJECTS.len(), visible.len());
        for (shown, expected) in visible.iter().zip(PROJECTS.iter()) {
            assert_eq!(expected.name, shown.name);
        }
    }

    #[test]
    fn category_filter_preserves_catalog_order() {
        let mut display = display();
        display.toggle();
        display.settle();
        assert!(display.set_filter(Filter::Only(Category::WebDevelopment)));
        let names: Vec<&str> = display.visible().iter().map(|p| p.name).collect();
        let expected: Vec<&str> = PROJECTS
            .iter()
            .filter(|p| p.category == Category::WebDevelopment)
            .map(|p| p.name)
            .collect();
        assert_eq!(expected, names);
    }

    #[test]
    fn filter_with_no_matches_yields_an_empty_set() {
        const WEB_ONLY: &[crate::catalog::Project] = &[Project {
            name: "only one",
            link: "https://example.com",
            image: "/images/one.png",
            description: "",
            tags: &[],
            category: Category::WebDevelopment,
            featured: true,
        }];
        let mut display = ProjectDisplay::new(WEB_ONLY);
        display.toggle();
        display.settle();
        assert!(display.set_filter(Filter::Only(Category::AppDevelopment)));
        assert!(display.visible().is_empty());
    }

    #[test]
    fn filter_is_rejected_outside_the_expanded_view() {
        let mut display = display();
        assert!(!display.set_filter(Filter::Only(Category::WebDevelopment)));
        assert_eq!(Filter::All, display.filter());
    }

    #[test]
    fn filter_is_rejected_mid_transition() {
        let mut display = display();
        display.toggle();
        assert!(display.is_transitioning());
        assert!(!display.set_filter(Filter::Only(Category::WebDevelopment)));
        display.settle();
        assert!(display.set_filter(Filter::Only(Category::WebDevelopment)));
    }

    #[test]
    fn toggle_is_a_no_op_while_transitioning() {
        let mut display = display();
        assert_eq!(Some(Toggle::Expanded), display.toggle());
        assert_eq!(None, display.toggle());
        assert_eq!(None, display.toggle());
        assert!(display.show_all());
        display.settle();
        assert!(!display.is_transitioning());
        assert_eq!(Some(Toggle::Collapsing), display.toggle());
        assert_eq!(None, display.toggle());
        display.commit_collapse();
        assert!(!display.is_transitioning());
        assert!(!display.show_all());
    }

    #[test]
    fn transitions_always_resolve() {
        let mut display = display();
        for _ in 0..4 {
            match display.toggle() {
                Some(Toggle::Expanded) => display.settle(),
                Some(Toggle::Collapsing) => display.commit_collapse(),
                None => unreachable!("toggle after a resolved transition"),
            }
            assert!(!display.is_transitioning());
        }
        assert!(!display.show_all());
    }
}
