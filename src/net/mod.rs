//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `email` is the only outbound call the site makes: a single contact-form
//! delivery to EmailJS.

pub mod email;
