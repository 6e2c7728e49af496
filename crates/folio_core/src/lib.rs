//! Folio core: view-state machine, page view model and the controller that
//! drives the rendering collaborator.
mod catalog;
mod controller;
mod effect;
mod msg;
mod schedule;
mod scroll;
mod settings;
mod state;
mod theme;
mod update;
mod view_model;

pub use catalog::{BlogPost, Catalog, CatalogError, PostId, Project};
pub use controller::ViewStateController;
pub use effect::Effect;
pub use msg::Msg;
pub use schedule::{ManualScheduler, Scheduler};
pub use scroll::{ScrollCoordinator, Viewport};
pub use settings::{ControllerSettings, DeferralPolicy, ScrollBehavior, LEGACY_SECTION_DEFERRAL};
pub use state::{
    LandingReadiness, MenuState, NavSection, StateSnapshot, Theme, View, ViewKind, ViewState,
};
pub use theme::{PresentationSurface, ThemeManager, DARK_MODE_FLAG};
pub use update::{init, update};
pub use view_model::{
    ArticleView, BodyView, HeaderView, MenuAction, MenuEntryView, MenuIcon, NavItemView,
    PageViewModel, PostCardView, ProjectView, ThemeIcon,
};
