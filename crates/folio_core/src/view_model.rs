use crate::catalog::PostId;
use crate::{MenuState, NavSection, Theme, View, ViewState};

/// Everything a renderer needs to paint one frame of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    pub theme: Theme,
    pub header: HeaderView,
    /// Present only while the mobile menu is open.
    pub mobile_menu: Option<Vec<MenuEntryView>>,
    pub body: BodyView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    /// Empty while an article is shown.
    pub nav_items: Vec<NavItemView>,
    pub show_back_link: bool,
    pub theme_icon: ThemeIcon,
    pub menu_icon: MenuIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItemView {
    pub section: NavSection,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeIcon {
    /// Offered while dark, switches to light.
    Sun,
    Moon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuIcon {
    Hamburger,
    Close,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntryView {
    pub label: &'static str,
    pub action: MenuAction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    CloseArticle,
    Navigate(NavSection),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodyView {
    Landing {
        sections: Vec<NavSection>,
        posts: Vec<PostCardView>,
        projects: Vec<ProjectView>,
    },
    Article(ArticleView),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostCardView {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectView {
    pub title: String,
    pub description: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleView {
    pub id: PostId,
    pub title: String,
    pub excerpt: String,
    pub date: String,
    pub category: String,
    pub read_time: String,
    pub content: String,
}

impl PageViewModel {
    pub(crate) fn build(state: &ViewState) -> Self {
        let in_article = matches!(state.current_view(), View::Article { .. });

        let nav_items = if in_article {
            Vec::new()
        } else {
            NavSection::ALL
                .into_iter()
                .map(|section| NavItemView {
                    section,
                    label: section.label(),
                    active: section == state.active_section(),
                })
                .collect()
        };

        let mobile_menu = match state.menu() {
            MenuState::Closed => None,
            MenuState::Open => Some(mobile_menu_entries(in_article)),
        };

        Self {
            theme: state.theme(),
            header: HeaderView {
                nav_items,
                show_back_link: in_article,
                theme_icon: match state.theme() {
                    Theme::Dark => ThemeIcon::Sun,
                    Theme::Light => ThemeIcon::Moon,
                },
                menu_icon: match state.menu() {
                    MenuState::Open => MenuIcon::Close,
                    MenuState::Closed => MenuIcon::Hamburger,
                },
            },
            mobile_menu,
            body: build_body(state),
        }
    }

    /// Anchors that exist in the markup for this frame.
    pub fn anchors(&self) -> &[NavSection] {
        match &self.body {
            BodyView::Landing { sections, .. } => sections,
            BodyView::Article(_) => &[],
        }
    }
}

fn mobile_menu_entries(in_article: bool) -> Vec<MenuEntryView> {
    // The first entry always closes the article, even on the landing page.
    let mut entries = vec![MenuEntryView {
        label: if in_article { "← Back to Home" } else { "Home" },
        action: MenuAction::CloseArticle,
    }];
    if !in_article {
        entries.extend(
            [NavSection::About, NavSection::Blog, NavSection::Contact]
                .into_iter()
                .map(|section| MenuEntryView {
                    label: section.label(),
                    action: MenuAction::Navigate(section),
                }),
        );
    }
    entries
}

fn build_body(state: &ViewState) -> BodyView {
    match state.current_view() {
        View::Article { post } => BodyView::Article(ArticleView {
            id: post.id,
            title: post.title.clone(),
            excerpt: post.excerpt.clone(),
            date: post.date.clone(),
            category: post.category.clone(),
            read_time: post.read_time.clone(),
            content: post.content.clone(),
        }),
        View::Landing => {
            let catalog = state.catalog();
            BodyView::Landing {
                sections: NavSection::ALL.to_vec(),
                posts: catalog
                    .posts()
                    .iter()
                    .map(|post| PostCardView {
                        id: post.id,
                        title: post.title.clone(),
                        excerpt: post.excerpt.clone(),
                        date: post.date.clone(),
                        category: post.category.clone(),
                        read_time: post.read_time.clone(),
                    })
                    .collect(),
                projects: catalog
                    .projects()
                    .iter()
                    .map(|project| ProjectView {
                        title: project.title.clone(),
                        description: project.description.clone(),
                        tags: project.tags.clone(),
                    })
                    .collect(),
            }
        }
    }
}
