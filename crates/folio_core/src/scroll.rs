use folio_logging::folio_debug;

use crate::{NavSection, ScrollBehavior};

/// Scrolling half of the rendering collaborator.
pub trait Viewport {
    /// Whether an element with this identity is currently in the markup.
    fn contains_anchor(&self, id: &str) -> bool;
    /// Brings the element's top edge into view.
    fn scroll_element_into_view(&mut self, id: &str, behavior: ScrollBehavior);
    /// Moves the viewport to the page origin.
    fn scroll_to_origin(&mut self, behavior: ScrollBehavior);
}

/// Turns navigation targets into viewport motion.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrollCoordinator {
    behavior: ScrollBehavior,
}

impl ScrollCoordinator {
    pub fn new(behavior: ScrollBehavior) -> Self {
        Self { behavior }
    }

    /// Silent no-op when the anchor is not mounted.
    pub fn scroll_to_anchor<V: Viewport + ?Sized>(&self, viewport: &mut V, section: NavSection) {
        let id = section.anchor_id();
        if viewport.contains_anchor(id) {
            viewport.scroll_element_into_view(id, self.behavior);
        } else {
            folio_debug!("No element #{} to scroll to; ignoring", id);
        }
    }

    pub fn scroll_to_top<V: Viewport + ?Sized>(&self, viewport: &mut V) {
        viewport.scroll_to_origin(self.behavior);
    }
}
