use std::sync::Arc;

use crate::catalog::{BlogPost, Catalog, PostId};
use crate::settings::ControllerSettings;
use crate::view_model::PageViewModel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum NavSection {
    #[default]
    Home,
    About,
    Blog,
    Contact,
}

impl NavSection {
    /// Sections in navigation-bar order.
    pub const ALL: [NavSection; 4] = [
        NavSection::Home,
        NavSection::About,
        NavSection::Blog,
        NavSection::Contact,
    ];

    /// Identity of the landing-page element this section scrolls to.
    pub fn anchor_id(self) -> &'static str {
        match self {
            NavSection::Home => "home",
            NavSection::About => "about",
            NavSection::Blog => "blog",
            NavSection::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NavSection::Home => "Home",
            NavSection::About => "About",
            NavSection::Blog => "Blog",
            NavSection::Contact => "Contact",
        }
    }

    pub fn from_anchor(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|section| section.anchor_id().eq_ignore_ascii_case(id))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        match self {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        }
    }
}

/// Top-level surface. The selected post lives inside `Article`, so a post
/// can only be selected while the article surface is shown.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Article { post: Arc<BlogPost> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Landing,
    Article,
}

/// Whether the landing markup is known to be mounted by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LandingReadiness {
    #[default]
    Mounted,
    /// Landing is not rendered yet; `target` is applied once it is.
    Awaiting { target: Option<NavSection> },
}

/// Plain comparable copy of the fields a user can observe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateSnapshot {
    pub view: ViewKind,
    pub active_section: NavSection,
    pub selected_post: Option<PostId>,
    pub menu: MenuState,
    pub theme: Theme,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    catalog: Arc<Catalog>,
    settings: ControllerSettings,
    view: View,
    active_section: NavSection,
    menu: MenuState,
    theme: Theme,
    landing: LandingReadiness,
    dirty: bool,
}

impl ViewState {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self::with_settings(catalog, ControllerSettings::default())
    }

    pub fn with_settings(catalog: Arc<Catalog>, settings: ControllerSettings) -> Self {
        Self {
            catalog,
            settings,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn settings(&self) -> ControllerSettings {
        self.settings
    }

    pub fn current_view(&self) -> &View {
        &self.view
    }

    pub fn view_kind(&self) -> ViewKind {
        match self.view {
            View::Landing => ViewKind::Landing,
            View::Article { .. } => ViewKind::Article,
        }
    }

    pub fn selected_post(&self) -> Option<&Arc<BlogPost>> {
        match &self.view {
            View::Landing => None,
            View::Article { post } => Some(post),
        }
    }

    pub fn active_section(&self) -> NavSection {
        self.active_section
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn landing(&self) -> LandingReadiness {
        self.landing
    }

    pub fn snapshot(&self) -> StateSnapshot {
        StateSnapshot {
            view: self.view_kind(),
            active_section: self.active_section,
            selected_post: self.selected_post().map(|post| post.id),
            menu: self.menu,
            theme: self.theme,
        }
    }

    pub fn view(&self) -> PageViewModel {
        PageViewModel::build(self)
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn show_article(&mut self, post: Arc<BlogPost>) {
        self.view = View::Article { post };
        self.landing = LandingReadiness::Awaiting { target: None };
        self.dirty = true;
    }

    /// Switches to the landing surface. Returns false if it was already shown.
    pub(crate) fn show_landing(&mut self) -> bool {
        if matches!(self.view, View::Landing) {
            return false;
        }
        self.view = View::Landing;
        self.dirty = true;
        true
    }

    pub(crate) fn set_active_section(&mut self, section: NavSection) {
        if self.active_section != section {
            self.active_section = section;
            self.dirty = true;
        }
    }

    pub(crate) fn set_menu(&mut self, menu: MenuState) {
        if self.menu != menu {
            self.menu = menu;
            self.dirty = true;
        }
    }

    pub(crate) fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.dirty = true;
    }

    pub(crate) fn set_landing(&mut self, landing: LandingReadiness) {
        self.landing = landing;
    }
}
