//! Portfolio gallery category filter.
//!
//! DESIGN
//! ======
//! Each item runs a small show/hide machine so CSS transitions get to play
//! before (reveal) or after (hide) the `display` switch:
//!
//! ```text
//! Hidden --apply--> Revealing --10ms--> Visible
//! Visible --apply--> Hiding --300ms--> Hidden
//! ```
//!
//! Every [`FilterState::apply`] starts a new pass. The settle calls take the
//! pass number and do nothing for an older pass, so a fast second click
//! cannot have its items flipped by the first click's timers.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

/// Filter value that matches every category.
pub const ALL: &str = "all";
pub const REVEAL_DELAY_MS: u32 = 10;
pub const HIDE_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ItemPhase {
    Visible,
    /// Displayed, transition to full opacity and scale pending.
    Revealing,
    /// Faded out, `display: none` pending.
    Hiding,
    Hidden,
}

impl ItemPhase {
    #[must_use]
    pub fn style(self) -> &'static str {
        match self {
            Self::Visible => "display: block; opacity: 1; transform: scale(1)",
            Self::Revealing | Self::Hiding => "display: block; opacity: 0; transform: scale(0.8)",
            Self::Hidden => "display: none; opacity: 0; transform: scale(0.8)",
        }
    }
}

/// Whether an item in `category` is shown under `filter`.
#[must_use]
pub fn matches(filter: &str, category: &str) -> bool {
    filter == ALL || filter == category
}

#[derive(Clone, Debug)]
pub struct FilterState {
    active: String,
    items: Vec<(String, ItemPhase)>,
    pass: u64,
}

impl FilterState {
    /// Gallery of items with the given categories, all shown.
    #[must_use]
    pub fn new<I, T>(categories: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let items = categories.into_iter().map(|c| (c.into(), ItemPhase::Visible)).collect();
        Self { active: ALL.to_owned(), items, pass: 0 }
    }

    /// Whether the filter button carrying `filter` is marked `active`.
    #[must_use]
    pub fn is_button_active(&self, filter: &str) -> bool {
        self.active == filter
    }

    #[must_use]
    pub fn pass(&self) -> u64 {
        self.pass
    }

    #[must_use]
    pub fn phase(&self, index: usize) -> Option<ItemPhase> {
        self.items.get(index).map(|(_, phase)| *phase)
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn has_pending_reveal(&self) -> bool {
        self.items.iter().any(|(_, p)| *p == ItemPhase::Revealing)
    }

    #[must_use]
    pub fn has_pending_hide(&self) -> bool {
        self.items.iter().any(|(_, p)| *p == ItemPhase::Hiding)
    }

    /// Select `filter` and start moving items toward their new visibility.
    /// Returns the new pass number.
    pub fn apply(&mut self, filter: &str) -> u64 {
        self.active = filter.to_owned();
        self.pass += 1;
        for (category, phase) in &mut self.items {
            *phase = match (matches(filter, category), *phase) {
                (true, ItemPhase::Hidden | ItemPhase::Hiding) => ItemPhase::Revealing,
                (false, ItemPhase::Visible | ItemPhase::Revealing) => ItemPhase::Hiding,
                (_, unchanged) => unchanged,
            };
        }
        log::debug!("portfolio filter '{filter}' pass {}", self.pass);
        self.pass
    }

    /// Finish reveals started by `pass`.
    pub fn settle_reveal(&mut self, pass: u64) -> bool {
        self.settle(pass, ItemPhase::Revealing, ItemPhase::Visible)
    }

    /// Finish hides started by `pass`.
    pub fn settle_hide(&mut self, pass: u64) -> bool {
        self.settle(pass, ItemPhase::Hiding, ItemPhase::Hidden)
    }

    fn settle(&mut self, pass: u64, from: ItemPhase, to: ItemPhase) -> bool {
        if pass != self.pass {
            return false;
        }
        for (_, phase) in &mut self.items {
            if *phase == from {
                *phase = to;
            }
        }
        true
    }
}
