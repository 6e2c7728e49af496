#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Once};
use std::time::Duration;

use folio_core::{
    BlogPost, Catalog, ControllerSettings, DeferralPolicy, ManualScheduler, PageViewModel,
    PresentationSurface, Project, ScrollBehavior, ViewState, ViewStateController, Viewport,
};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(folio_logging::initialize_for_tests);
}

pub fn post(id: u32, title: &str) -> BlogPost {
    BlogPost {
        id,
        title: title.to_string(),
        excerpt: format!("Excerpt of {title}"),
        date: "Dec 1, 2025".to_string(),
        category: "Engineering".to_string(),
        read_time: "5 min read".to_string(),
        content: format!("Body of {title}"),
    }
}

pub fn catalog() -> Arc<Catalog> {
    let catalog = Catalog::new(
        vec![
            post(1, "The Future of Digital Minimalism"),
            post(2, "Building Scalable Systems"),
            post(3, "My Journey into AI Integration"),
        ],
        vec![Project {
            title: "TaskFlow App".to_string(),
            description: "A productivity tool for remote teams.".to_string(),
            tags: vec!["React".to_string(), "Firebase".to_string()],
        }],
    )
    .expect("valid catalog");
    Arc::new(catalog)
}

pub fn state_with(deferral: DeferralPolicy) -> ViewState {
    ViewState::with_settings(
        catalog(),
        ControllerSettings {
            deferral,
            scroll_behavior: ScrollBehavior::Smooth,
        },
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scroll {
    Top,
    Anchor(String),
}

/// In-memory stand-in for the rendered page.
#[derive(Debug, Default)]
pub struct FakeDocument {
    anchors: BTreeSet<String>,
    /// Anchors that never get mounted, to simulate a stale identifier.
    missing: BTreeSet<String>,
    pub scrolls: Vec<Scroll>,
    pub flags: BTreeMap<String, bool>,
    pub flag_writes: usize,
}

impl FakeDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without_anchor(mut self, id: &str) -> Self {
        self.missing.insert(id.to_string());
        self
    }

    /// Mounts whatever the frame contains. Returns true when the painted
    /// frame is the landing surface.
    pub fn present(&mut self, view: &PageViewModel) -> bool {
        self.anchors = view
            .anchors()
            .iter()
            .map(|section| section.anchor_id().to_string())
            .filter(|id| !self.missing.contains(id))
            .collect();
        !view.anchors().is_empty()
    }

    pub fn position(&self) -> Option<&Scroll> {
        self.scrolls.last()
    }

    pub fn dark(&self) -> bool {
        self.flags.get("dark").copied().unwrap_or(false)
    }
}

impl Viewport for FakeDocument {
    fn contains_anchor(&self, id: &str) -> bool {
        self.anchors.contains(id)
    }

    fn scroll_element_into_view(&mut self, id: &str, _behavior: ScrollBehavior) {
        self.scrolls.push(Scroll::Anchor(id.to_string()));
    }

    fn scroll_to_origin(&mut self, _behavior: ScrollBehavior) {
        self.scrolls.push(Scroll::Top);
    }
}

impl PresentationSurface for FakeDocument {
    fn set_mode_flag(&mut self, flag: &str, enabled: bool) {
        self.flags.insert(flag.to_string(), enabled);
        self.flag_writes += 1;
    }
}

pub type Controller = ViewStateController<FakeDocument, ManualScheduler>;

/// Builds a controller and paints its first frame.
pub fn controller(
    deferral: DeferralPolicy,
    document: FakeDocument,
) -> (Controller, ManualScheduler) {
    let scheduler = ManualScheduler::new();
    let mut controller =
        ViewStateController::new(state_with(deferral), document, scheduler.clone());
    paint(&mut controller);
    (controller, scheduler)
}

fn paint(controller: &mut Controller) {
    let view = controller.view();
    if controller.surface_mut().present(&view) {
        controller.landing_mounted();
    }
}

/// Repaints while the state keeps changing; every landing paint is reported.
pub fn render(controller: &mut Controller) {
    while controller.consume_dirty() {
        paint(controller);
    }
}

/// Advances the virtual clock, delivering due continuations and repainting.
pub fn advance(controller: &mut Controller, scheduler: &ManualScheduler, millis: u64) {
    for msg in scheduler.advance(Duration::from_millis(millis)) {
        controller.dispatch(msg);
        render(controller);
    }
}
