use crate::catalog::PostId;
use crate::state::NavSection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Msg {
    /// User clicked a post title or its "read more" link.
    OpenArticle(PostId),
    /// User clicked one of the "back" links.
    CloseArticle,
    /// User clicked a navigation label or an in-page call to action.
    NavigateToSection(NavSection),
    /// User clicked the brand logo.
    LogoClicked,
    /// User clicked the mobile menu button.
    ToggleMenu,
    /// User clicked the sun/moon toggle.
    ToggleTheme,
    /// User submitted the contact form. Submission is a stub.
    ContactSubmitted,
    /// Renderer confirmed the landing surface is mounted.
    LandingMounted,
    /// Fixed-delay continuation of a cross-view navigation.
    SectionDeferralElapsed(NavSection),
}
