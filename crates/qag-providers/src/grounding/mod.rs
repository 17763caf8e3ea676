//! Selector Grounding
//!
//! Builds the inventory of interactive elements a generated script may
//! reference from page markup.

pub mod html;

pub use html::HtmlGroundingExtractor;
