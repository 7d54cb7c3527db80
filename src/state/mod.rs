//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by feature (`theme`, `nav`, `form`, `feedback`, `filter`)
//! so each component depends on one small model. Components hold these in
//! `RwSignal`s provided via context and derive every DOM class from them.

pub mod feedback;
pub mod filter;
pub mod form;
pub mod nav;
pub mod theme;
