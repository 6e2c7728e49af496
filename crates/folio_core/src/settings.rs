use std::time::Duration;

/// Delay the legacy page waited between leaving an article and scrolling
/// the landing page. Kept only for the `FixedDelay` compatibility policy.
pub const LEGACY_SECTION_DEFERRAL: Duration = Duration::from_millis(100);

/// How a cross-view navigation waits for the landing page before applying
/// the section highlight and scroll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeferralPolicy {
    /// Wait for `Msg::LandingMounted` from the renderer.
    #[default]
    LayoutReady,
    /// Fire a continuation after a fixed delay. Continuations are never
    /// cancelled, so a stale one can overwrite a newer navigation.
    FixedDelay(Duration),
}

impl DeferralPolicy {
    pub fn legacy() -> Self {
        Self::FixedDelay(LEGACY_SECTION_DEFERRAL)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    #[default]
    Smooth,
    Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ControllerSettings {
    pub deferral: DeferralPolicy,
    pub scroll_behavior: ScrollBehavior,
}
