use folio_logging::{folio_debug, folio_trace, folio_warn};

use crate::{
    DeferralPolicy, Effect, LandingReadiness, MenuState, Msg, NavSection, ViewKind, ViewState,
};

/// Effects needed once at startup so the surface matches the initial state.
pub fn init(state: &ViewState) -> Vec<Effect> {
    vec![Effect::ApplyTheme(state.theme())]
}

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: ViewState, msg: Msg) -> (ViewState, Vec<Effect>) {
    let effects = match msg {
        Msg::OpenArticle(post_id) => {
            let Some(post) = state.catalog().post(post_id).cloned() else {
                folio_warn!("OpenArticle ignored: post {} is not in the catalog", post_id);
                return (state, Vec::new());
            };
            state.show_article(post);
            vec![Effect::ScrollToTop]
        }
        Msg::CloseArticle => {
            state.show_landing();
            // An explicit close wins over a navigation still waiting for the mount.
            if let LandingReadiness::Awaiting { target: Some(_) } = state.landing() {
                state.set_landing(LandingReadiness::Awaiting { target: None });
            }
            vec![Effect::ScrollToTop]
        }
        Msg::NavigateToSection(section) => navigate_to_section(&mut state, section),
        Msg::LogoClicked => navigate_to_section(&mut state, NavSection::Home),
        Msg::ToggleMenu => {
            state.set_menu(state.menu().toggled());
            Vec::new()
        }
        Msg::ToggleTheme => {
            let theme = state.theme().toggled();
            state.set_theme(theme);
            vec![Effect::ApplyTheme(theme)]
        }
        Msg::ContactSubmitted => {
            folio_debug!("Contact form submitted; submission is not wired");
            Vec::new()
        }
        Msg::LandingMounted => landing_mounted(&mut state),
        Msg::SectionDeferralElapsed(section) => {
            // Runs even if the user moved on since it was scheduled.
            folio_trace!("Deferred navigation to {:?} elapsed", section);
            apply_section(&mut state, section)
        }
    };

    (state, effects)
}

fn navigate_to_section(state: &mut ViewState, section: NavSection) -> Vec<Effect> {
    state.set_menu(MenuState::Closed);
    let left_article = state.show_landing();

    match state.settings().deferral {
        DeferralPolicy::FixedDelay(delay) => {
            if left_article {
                vec![Effect::Defer {
                    delay,
                    msg: Msg::SectionDeferralElapsed(section),
                }]
            } else {
                apply_section(state, section)
            }
        }
        DeferralPolicy::LayoutReady => match state.landing() {
            LandingReadiness::Mounted => apply_section(state, section),
            LandingReadiness::Awaiting { .. } => {
                state.set_landing(LandingReadiness::Awaiting {
                    target: Some(section),
                });
                Vec::new()
            }
        },
    }
}

fn landing_mounted(state: &mut ViewState) -> Vec<Effect> {
    if state.view_kind() == ViewKind::Article {
        folio_trace!("LandingMounted ignored while an article is shown");
        return Vec::new();
    }
    match state.landing() {
        LandingReadiness::Mounted => Vec::new(),
        LandingReadiness::Awaiting { target } => {
            state.set_landing(LandingReadiness::Mounted);
            match target {
                Some(section) => apply_section(state, section),
                None => Vec::new(),
            }
        }
    }
}

fn apply_section(state: &mut ViewState, section: NavSection) -> Vec<Effect> {
    state.set_active_section(section);
    state.set_menu(MenuState::Closed);
    vec![Effect::ScrollToAnchor(section)]
}
