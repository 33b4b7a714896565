//! Command handlers

pub mod config;
pub mod link;
pub mod pref;
pub mod resolve;
pub mod status;
