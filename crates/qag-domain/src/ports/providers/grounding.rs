use crate::entities::ElementInventory;

/// Selector Grounding Interface
///
/// Parses markup into the inventory of interactive elements that generated
/// automation code is allowed to reference. Malformed markup is parsed
/// leniently; extraction never fails.
pub trait GroundingExtractor: Send + Sync {
    /// Extract inputs and buttons from markup
    fn extract(&self, markup: &str) -> ElementInventory;
}
