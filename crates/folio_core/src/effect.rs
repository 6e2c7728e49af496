use std::time::Duration;

use crate::state::{NavSection, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    ScrollToTop,
    ScrollToAnchor(NavSection),
    ApplyTheme(Theme),
    /// Feed `msg` back into `update` after `delay`. Never cancelled.
    Defer { delay: Duration, msg: crate::Msg },
}
