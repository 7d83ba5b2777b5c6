//! CLI library components for the CETS to mmCIF converter.

pub mod logging;
pub mod settings;
