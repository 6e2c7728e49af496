use crate::Theme;

/// Document-wide flag that switches the dark presentation on.
pub const DARK_MODE_FLAG: &str = "dark";

/// Presentation half of the rendering collaborator.
pub trait PresentationSurface {
    fn set_mode_flag(&mut self, flag: &str, enabled: bool);
}

/// Stateless: the theme itself lives in `ViewState`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThemeManager;

impl ThemeManager {
    pub fn apply<S: PresentationSurface + ?Sized>(&self, surface: &mut S, theme: Theme) {
        surface.set_mode_flag(DARK_MODE_FLAG, theme == Theme::Dark);
    }
}
