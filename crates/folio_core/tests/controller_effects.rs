mod support;

use folio_core::{DeferralPolicy, MenuState, NavSection, Theme, ViewKind};
use support::{advance, controller, init_logging, render, FakeDocument, Scroll};

#[test]
fn initial_theme_is_applied_once() {
    init_logging();
    let (c, _scheduler) = controller(DeferralPolicy::LayoutReady, FakeDocument::new());

    assert_eq!(c.surface().flag_writes, 1);
    assert!(!c.surface().dark());
}

#[test]
fn theme_toggle_twice_restores_presentation_mode() {
    init_logging();
    let (mut c, _scheduler) = controller(DeferralPolicy::LayoutReady, FakeDocument::new());

    c.toggle_theme();
    assert_eq!(c.state().theme(), Theme::Dark);
    assert!(c.surface().dark());

    c.toggle_theme();
    assert_eq!(c.state().theme(), Theme::Light);
    assert!(!c.surface().dark());
    assert_eq!(c.surface().flag_writes, 3);
}

#[test]
fn applied_mode_follows_theme_across_navigation() {
    init_logging();
    let (mut c, scheduler) = controller(DeferralPolicy::legacy(), FakeDocument::new());
    c.toggle_theme();
    c.open_article(2);
    render(&mut c);
    c.navigate_to_section(NavSection::About);
    render(&mut c);
    advance(&mut c, &scheduler, 100);

    assert_eq!(c.state().theme(), Theme::Dark);
    assert!(c.surface().dark());
    assert_eq!(c.surface().flag_writes, 2);
}

#[test]
fn opening_and_closing_articles_scroll_to_top() {
    init_logging();
    let (mut c, _scheduler) = controller(DeferralPolicy::LayoutReady, FakeDocument::new());

    c.open_article(2);
    render(&mut c);
    c.close_article();
    render(&mut c);

    assert_eq!(c.surface().scrolls, vec![Scroll::Top, Scroll::Top]);
}

#[test]
fn missing_anchor_updates_state_without_scrolling() {
    init_logging();
    let document = FakeDocument::new().without_anchor("about");
    let (mut c, _scheduler) = controller(DeferralPolicy::LayoutReady, document);
    c.toggle_menu();

    c.navigate_to_section(NavSection::About);

    assert_eq!(c.state().active_section(), NavSection::About);
    assert_eq!(c.state().menu(), MenuState::Closed);
    assert!(c.surface().scrolls.is_empty());
}

#[test]
fn missing_anchor_after_cross_view_navigation_is_silent() {
    init_logging();
    for deferral in [DeferralPolicy::LayoutReady, DeferralPolicy::legacy()] {
        let document = FakeDocument::new().without_anchor("contact");
        let (mut c, scheduler) = controller(deferral, document);
        c.open_article(1);
        render(&mut c);
        c.navigate_to_section(NavSection::Contact);
        render(&mut c);
        advance(&mut c, &scheduler, 100);

        assert_eq!(c.state().view_kind(), ViewKind::Landing);
        assert_eq!(c.state().active_section(), NavSection::Contact);
        assert_eq!(c.surface().scrolls, vec![Scroll::Top]);
    }
}

#[test]
fn unknown_post_leaves_surface_untouched() {
    init_logging();
    let (mut c, _scheduler) = controller(DeferralPolicy::LayoutReady, FakeDocument::new());

    c.open_article(404);

    assert_eq!(c.state().view_kind(), ViewKind::Landing);
    assert!(c.surface().scrolls.is_empty());
    assert!(!c.consume_dirty());
}
