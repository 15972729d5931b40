//! Scroll-derived page state: progress bar fill and the highlighted section.

/// Page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Landing,
    About,
    Internships,
    Skills,
    Projects,
    UiDesigns,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 7] = [
        Self::Landing,
        Self::About,
        Self::Internships,
        Self::Skills,
        Self::Projects,
        Self::UiDesigns,
        Self::Contact,
    ];

    /// Sections that get a navigation button; the landing hero is reached via the brand.
    pub const NAVIGABLE: [SectionId; 6] = [
        Self::About,
        Self::Internships,
        Self::Skills,
        Self::Projects,
        Self::UiDesigns,
        Self::Contact,
    ];

    /// DOM id of the section element.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Landing => "landing",
            Self::About => "about",
            Self::Internships => "internships",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::UiDesigns => "ui-designs",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::About => "About",
            Self::Internships => "Internships",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::UiDesigns => "UI/UX Designs",
            Self::Contact => "Contact",
        }
    }
}

/// Raw document measurements taken on a scroll event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_height: f64,
    pub client_height: f64,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Fraction of the scrollable distance covered, in `[0, 1]`.
    pub progress: f64,
    pub active: Option<SectionId>,
    /// True once the page has scrolled far enough to condense the navigation bar.
    pub elevated: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollTracker {
    lookahead: f64,
    elevation_threshold: f64,
}

impl ScrollTracker {
    pub fn new(lookahead_px: u32, elevation_px: u32) -> Self {
        Self {
            lookahead: f64::from(lookahead_px),
            elevation_threshold: f64::from(elevation_px),
        }
    }

    /// `offset_of` returns a section's top offset, or `None` when it is not rendered.
    pub fn update<F>(&self, metrics: ScrollMetrics, offset_of: F) -> ScrollState
    where
        F: Fn(SectionId) -> Option<f64>,
    {
        ScrollState {
            progress: scroll_progress(metrics),
            active: active_section(metrics.scroll_top, self.lookahead, offset_of),
            elevated: metrics.scroll_top > self.elevation_threshold,
        }
    }
}

pub fn scroll_progress(metrics: ScrollMetrics) -> f64 {
    let scrollable = metrics.scroll_height - metrics.client_height;
    if !scrollable.is_finite() || scrollable <= 0.0 {
        return 0.0;
    }

    let progress = metrics.scroll_top / scrollable;
    if progress.is_nan() {
        return 0.0;
    }

    progress.clamp(0.0, 1.0)
}

/// Lowest section whose top is at or above `scroll_top + lookahead`.
pub fn active_section<F>(scroll_top: f64, lookahead: f64, offset_of: F) -> Option<SectionId>
where
    F: Fn(SectionId) -> Option<f64>,
{
    let position = scroll_top + lookahead;

    SectionId::ALL
        .iter()
        .rev()
        .copied()
        .find(|section| offset_of(*section).is_some_and(|offset| position >= offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_sections(section: SectionId) -> Option<f64> {
        match section {
            SectionId::Landing => Some(0.0),
            SectionId::About => Some(800.0),
            SectionId::Skills => Some(1_600.0),
            _ => None,
        }
    }

    #[test]
    fn about_becomes_active_within_lookahead() {
        assert_eq!(active_section(699.0, 100.0, three_sections), Some(SectionId::Landing));
        assert_eq!(active_section(700.0, 100.0, three_sections), Some(SectionId::About));
        assert_eq!(active_section(750.0, 100.0, three_sections), Some(SectionId::About));
    }

    #[test]
    fn lowest_passed_section_wins() {
        assert_eq!(active_section(1_500.0, 100.0, three_sections), Some(SectionId::Skills));
        assert_eq!(active_section(90_000.0, 100.0, three_sections), Some(SectionId::Skills));
    }

    #[test]
    fn no_match_leaves_nothing_active() {
        let offsets = |section: SectionId| match section {
            SectionId::About => Some(800.0),
            _ => None,
        };

        assert_eq!(active_section(0.0, 100.0, offsets), None);
        assert_eq!(active_section(0.0, 100.0, |_| None), None);
    }

    #[test]
    fn progress_is_fraction_of_scrollable_distance() {
        let metrics = ScrollMetrics {
            scroll_top: 250.0,
            scroll_height: 1_800.0,
            client_height: 800.0,
        };

        assert!((scroll_progress(metrics) - 0.25).abs() < f64::EPSILON);
    }

    #[test]
    fn progress_guards_content_that_fits_the_viewport() {
        let metrics = ScrollMetrics {
            scroll_top: 0.0,
            scroll_height: 800.0,
            client_height: 800.0,
        };

        assert_eq!(scroll_progress(metrics), 0.0);
    }

    #[test]
    fn progress_is_clamped_during_overscroll() {
        let past_end = ScrollMetrics {
            scroll_top: 1_200.0,
            scroll_height: 1_800.0,
            client_height: 800.0,
        };
        let before_start = ScrollMetrics {
            scroll_top: -40.0,
            ..past_end
        };

        assert_eq!(scroll_progress(past_end), 1.0);
        assert_eq!(scroll_progress(before_start), 0.0);
    }

    #[test]
    fn tracker_combines_progress_active_and_elevation() {
        let tracker = ScrollTracker::new(100, 50);
        let metrics = ScrollMetrics {
            scroll_top: 800.0,
            scroll_height: 2_400.0,
            client_height: 800.0,
        };

        let state = tracker.update(metrics, three_sections);

        assert!((state.progress - 0.5).abs() < f64::EPSILON);
        assert_eq!(state.active, Some(SectionId::About));
        assert!(state.elevated);

        let top = tracker.update(ScrollMetrics { scroll_top: 50.0, ..metrics }, three_sections);
        assert!(!top.elevated);
        assert_eq!(top.active, Some(SectionId::Landing));
    }

    #[test]
    fn section_ids_match_dom_ids_in_order() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|section| section.as_str()).collect();

        assert_eq!(
            ids,
            ["landing", "about", "internships", "skills", "projects", "ui-designs", "contact"]
        );
        assert!(!SectionId::NAVIGABLE.contains(&SectionId::Landing));
    }
}
