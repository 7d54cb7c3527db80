//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the portfolio page and read/write shared state from
//! Leptos context providers. Every state-driven class (`active`,
//! `active-btn`, `bright-mode`, `loading`) is derived from those signals.

pub mod contact_form;
pub mod controls;
pub mod form_message;
pub mod hash_link;
pub mod portfolio;
pub mod sections;
