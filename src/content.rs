//! Static page content: sections, navigation icons, portfolio gallery.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use crate::state::filter::ALL;

#[derive(Clone, Copy, Debug)]
pub struct SectionDef {
    pub id: &'static str,
    pub title: &'static str,
    pub icon: &'static str,
}

pub const SECTIONS: &[SectionDef] = &[
    SectionDef { id: "home", title: "Home", icon: "fas fa-home" },
    SectionDef { id: "about", title: "About me", icon: "fas fa-user" },
    SectionDef { id: "portfolio", title: "My Portfolio", icon: "fas fa-briefcase" },
    SectionDef { id: "blogs", title: "My Blogs", icon: "far fa-newspaper" },
    SectionDef { id: "contact", title: "Contact me", icon: "far fa-envelope-open" },
];

#[derive(Clone, Copy, Debug)]
pub struct FilterDef {
    pub value: &'static str,
    pub label: &'static str,
}

pub const FILTERS: &[FilterDef] = &[
    FilterDef { value: ALL, label: "All" },
    FilterDef { value: "web", label: "Web" },
    FilterDef { value: "mobile", label: "Mobile" },
    FilterDef { value: "design", label: "Design" },
];

#[derive(Clone, Copy, Debug)]
pub struct PortfolioItem {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const PORTFOLIO_ITEMS: &[PortfolioItem] = &[
    PortfolioItem { title: "Task Board", category: "web", image: "img/port1.jpg", link: "#" },
    PortfolioItem { title: "Weather Pocket", category: "mobile", image: "img/port2.jpg", link: "#" },
    PortfolioItem { title: "Brand Refresh", category: "design", image: "img/port3.jpg", link: "#" },
    PortfolioItem { title: "Recipe Finder", category: "web", image: "img/port4.jpg", link: "#" },
    PortfolioItem { title: "Habit Tracker", category: "mobile", image: "img/port5.jpg", link: "#" },
    PortfolioItem { title: "Poster Series", category: "design", image: "img/port6.jpg", link: "#" },
];

pub fn section_ids() -> impl Iterator<Item = &'static str> {
    SECTIONS.iter().map(|s| s.id)
}

pub fn portfolio_categories() -> impl Iterator<Item = &'static str> {
    PORTFOLIO_ITEMS.iter().map(|item| item.category)
}

/// The filter bar is only wired when there is something to filter.
#[must_use]
pub fn has_portfolio_filter() -> bool {
    !FILTERS.is_empty() && !PORTFOLIO_ITEMS.is_empty()
}
