use folio_logging::folio_debug;

use crate::catalog::PostId;
use crate::scroll::{ScrollCoordinator, Viewport};
use crate::theme::{PresentationSurface, ThemeManager};
use crate::{init, update, Effect, Msg, NavSection, PageViewModel, Scheduler, ViewState};

/// Sole owner of `ViewState`. Feeds intents through `update` and executes the
/// resulting effects against the rendering collaborator and the scheduler.
pub struct ViewStateController<D, S> {
    state: ViewState,
    surface: D,
    scheduler: S,
    scroll: ScrollCoordinator,
    theme: ThemeManager,
}

impl<D, S> ViewStateController<D, S>
where
    D: Viewport + PresentationSurface,
    S: Scheduler,
{
    /// Takes ownership of the initial state and applies its theme right away.
    pub fn new(state: ViewState, surface: D, scheduler: S) -> Self {
        let scroll = ScrollCoordinator::new(state.settings().scroll_behavior);
        let mut controller = Self {
            state,
            surface,
            scheduler,
            scroll,
            theme: ThemeManager,
        };
        let effects = init(&controller.state);
        controller.run_effects(effects);
        controller
    }

    pub fn dispatch(&mut self, msg: Msg) {
        folio_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    pub fn open_article(&mut self, post_id: PostId) {
        self.dispatch(Msg::OpenArticle(post_id));
    }

    pub fn close_article(&mut self) {
        self.dispatch(Msg::CloseArticle);
    }

    pub fn navigate_to_section(&mut self, section: NavSection) {
        self.dispatch(Msg::NavigateToSection(section));
    }

    pub fn toggle_menu(&mut self) {
        self.dispatch(Msg::ToggleMenu);
    }

    pub fn toggle_theme(&mut self) {
        self.dispatch(Msg::ToggleTheme);
    }

    /// Layout-ready notification from the renderer.
    pub fn landing_mounted(&mut self) {
        self.dispatch(Msg::LandingMounted);
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn view(&self) -> PageViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    fn run_effects(&mut self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::ScrollToTop => self.scroll.scroll_to_top(&mut self.surface),
                Effect::ScrollToAnchor(section) => {
                    self.scroll.scroll_to_anchor(&mut self.surface, section)
                }
                Effect::ApplyTheme(theme) => self.theme.apply(&mut self.surface, theme),
                Effect::Defer { delay, msg } => {
                    folio_debug!("deferring {:?} by {:?}", msg, delay);
                    self.scheduler.schedule(delay, msg);
                }
            }
        }
    }
}
