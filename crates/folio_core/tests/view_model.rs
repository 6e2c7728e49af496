mod support;

use folio_core::{
    update, BodyView, DeferralPolicy, MenuAction, MenuIcon, Msg, NavSection, ThemeIcon,
};
use pretty_assertions::assert_eq;
use support::{init_logging, state_with};

#[test]
fn landing_shows_nav_with_active_section() {
    init_logging();
    let (state, _) = update(
        state_with(DeferralPolicy::LayoutReady),
        Msg::NavigateToSection(NavSection::Blog),
    );
    let view = state.view();

    let labels: Vec<_> = view.header.nav_items.iter().map(|item| item.label).collect();
    assert_eq!(labels, vec!["Home", "About", "Blog", "Contact"]);
    let active: Vec<_> = view
        .header
        .nav_items
        .iter()
        .filter(|item| item.active)
        .map(|item| item.section)
        .collect();
    assert_eq!(active, vec![NavSection::Blog]);
    assert!(!view.header.show_back_link);
    assert_eq!(view.anchors(), &NavSection::ALL);
}

#[test]
fn landing_lists_posts_and_projects_in_catalog_order() {
    init_logging();
    let view = state_with(DeferralPolicy::LayoutReady).view();

    match view.body {
        BodyView::Landing { posts, projects, .. } => {
            let ids: Vec<_> = posts.iter().map(|post| post.id).collect();
            assert_eq!(ids, vec![1, 2, 3]);
            assert_eq!(projects.len(), 1);
            assert_eq!(projects[0].tags, vec!["React", "Firebase"]);
        }
        BodyView::Article(_) => panic!("expected landing body"),
    }
}

#[test]
fn article_hides_nav_and_exposes_content() {
    init_logging();
    let (state, _) = update(state_with(DeferralPolicy::LayoutReady), Msg::OpenArticle(3));
    let view = state.view();

    assert!(view.header.nav_items.is_empty());
    assert!(view.header.show_back_link);
    assert!(view.anchors().is_empty());
    match view.body {
        BodyView::Article(article) => {
            assert_eq!(article.id, 3);
            assert_eq!(article.title, "My Journey into AI Integration");
            assert_eq!(article.content, "Body of My Journey into AI Integration");
        }
        BodyView::Landing { .. } => panic!("expected article body"),
    }
}

#[test]
fn mobile_menu_entries_depend_on_view() {
    init_logging();
    let state = state_with(DeferralPolicy::LayoutReady);
    assert_eq!(state.view().mobile_menu, None);
    assert_eq!(state.view().header.menu_icon, MenuIcon::Hamburger);

    let (state, _) = update(state, Msg::ToggleMenu);
    let view = state.view();
    assert_eq!(view.header.menu_icon, MenuIcon::Close);
    let entries = view.mobile_menu.expect("menu open");
    let summary: Vec<_> = entries.iter().map(|entry| (entry.label, entry.action)).collect();
    assert_eq!(
        summary,
        vec![
            ("Home", MenuAction::CloseArticle),
            ("About", MenuAction::Navigate(NavSection::About)),
            ("Blog", MenuAction::Navigate(NavSection::Blog)),
            ("Contact", MenuAction::Navigate(NavSection::Contact)),
        ]
    );

    let (state, _) = update(state, Msg::OpenArticle(1));
    let entries = state.view().mobile_menu.expect("menu stays open");
    let summary: Vec<_> = entries.iter().map(|entry| (entry.label, entry.action)).collect();
    assert_eq!(summary, vec![("← Back to Home", MenuAction::CloseArticle)]);
}

#[test]
fn theme_icon_offers_the_other_theme() {
    init_logging();
    let state = state_with(DeferralPolicy::LayoutReady);
    assert_eq!(state.view().header.theme_icon, ThemeIcon::Moon);

    let (state, _) = update(state, Msg::ToggleTheme);
    assert_eq!(state.view().header.theme_icon, ThemeIcon::Sun);
}
