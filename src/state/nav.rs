//! Section navigation state.
//!
//! DESIGN
//! ======
//! One `active` id is the only source of truth. A control button carries
//! `active-btn` when its target equals that id, and a section carries
//! `active` when its own id equals it, so the two can never disagree and at
//! most one of each is marked.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Result of selecting a section id.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Selection {
    /// A section with the id exists and is now visible.
    Shown,
    /// The control is marked but no section has that id, so nothing is
    /// visible.
    Unresolved,
}

#[derive(Clone, Debug, Default)]
pub struct NavState {
    sections: Vec<String>,
    active: Option<String>,
}

impl NavState {
    /// Navigation over the given section ids with nothing selected.
    #[must_use]
    pub fn new<I, T>(sections: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self { sections: sections.into_iter().map(Into::into).collect(), active: None }
    }

    /// Same as [`NavState::new`] but with `initial` already selected.
    #[must_use]
    pub fn starting_at<I, T>(sections: I, initial: &str) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut nav = Self::new(sections);
        nav.select(initial);
        nav
    }

    /// Select the section targeted by a clicked control's `data-id`.
    ///
    /// Clears every previous mark first. An id with no matching section
    /// still marks the control that carries it.
    pub fn select(&mut self, id: &str) -> Selection {
        self.active = Some(id.to_owned());
        if self.has_section(id) {
            Selection::Shown
        } else {
            log::warn!("no section with id {id}");
            Selection::Unresolved
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Whether the control targeting `target` carries `active-btn`.
    #[must_use]
    pub fn is_control_active(&self, target: &str) -> bool {
        self.active() == Some(target)
    }

    /// Whether the section with `id` carries `active`.
    #[must_use]
    pub fn is_section_active(&self, id: &str) -> bool {
        self.visible_section() == Some(id)
    }

    /// The section currently shown, if any.
    #[must_use]
    pub fn visible_section(&self) -> Option<&str> {
        self.active.as_deref().filter(|id| self.has_section(id))
    }

    #[must_use]
    pub fn has_section(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }
}
