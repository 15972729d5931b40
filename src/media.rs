//! Per-card image status and the design detail overlay.

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageStatus {
    #[default]
    Loading,
    Loaded,
    Errored,
}

impl ImageStatus {
    pub fn on_load(self) -> Self {
        match self {
            Self::Loading => Self::Loaded,
            other => other,
        }
    }

    /// Errors win over an earlier load and are never retried.
    pub fn on_error(self) -> Self {
        Self::Errored
    }

    pub fn shows_skeleton(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn shows_fallback(self) -> bool {
        matches!(self, Self::Errored)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Loading => "loading",
            Self::Loaded => "loaded",
            Self::Errored => "errored",
        }
    }
}

/// Which design, if any, is open in the enlarged view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DesignOverlay {
    selected: Option<usize>,
}

impl DesignOverlay {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Out-of-range indices leave the overlay untouched.
    pub fn open(self, index: usize, len: usize) -> Self {
        if index < len {
            Self {
                selected: Some(index),
            }
        } else {
            self
        }
    }

    pub fn close(self) -> Self {
        Self { selected: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_loads_or_fails() {
        let status = ImageStatus::default();
        assert!(status.shows_skeleton());

        let loaded = status.on_load();
        assert_eq!(loaded, ImageStatus::Loaded);
        assert!(!loaded.shows_skeleton() && !loaded.shows_fallback());

        let failed = status.on_error();
        assert!(failed.shows_fallback());
    }

    #[test]
    fn errors_are_sticky() {
        let failed = ImageStatus::Loaded.on_error();

        assert_eq!(failed.on_load(), ImageStatus::Errored);
    }

    #[test]
    fn overlay_opens_valid_indices_only() {
        let overlay = DesignOverlay::default();
        assert!(!overlay.is_open());

        let opened = overlay.open(2, 4);
        assert_eq!(opened.selected(), Some(2));
        assert_eq!(opened.open(9, 4).selected(), Some(2));
        assert_eq!(opened.close().selected(), None);
        assert_eq!(overlay.open(4, 4).selected(), None);
    }
}
