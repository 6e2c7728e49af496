use folio_core::{
    ArticleView, BodyView, HeaderView, MenuEntryView, MenuIcon, NavSection, PageViewModel,
    PostCardView, ProjectView, ThemeIcon,
};

const BRAND: &str = "ALEX.DEV";
const RULE: &str = "────────────────────────────────────────────────────────";

/// Text rendition of one page frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Frame {
    pub lines: Vec<String>,
    /// First line of every mounted anchor element.
    pub anchors: Vec<(&'static str, usize)>,
}

impl Frame {
    pub fn anchor_line(&self, id: &str) -> Option<usize> {
        self.anchors
            .iter()
            .find(|(anchor, _)| *anchor == id)
            .map(|(_, line)| *line)
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn mount(&mut self, section: NavSection) {
        self.anchors.push((section.anchor_id(), self.lines.len()));
        self.push(format!("#{}", section.anchor_id()));
    }
}

pub fn render(view: &PageViewModel) -> Frame {
    let mut frame = Frame::default();

    frame.push(header_line(&view.header));
    if let Some(entries) = &view.mobile_menu {
        for entry in entries {
            frame.push(menu_line(entry));
        }
    }
    frame.push(RULE);

    match &view.body {
        BodyView::Landing {
            sections,
            posts,
            projects,
        } => {
            for section in sections {
                render_section(&mut frame, *section, posts, projects);
            }
        }
        BodyView::Article(article) => render_article(&mut frame, article),
    }

    frame
}

fn header_line(header: &HeaderView) -> String {
    let nav = if header.show_back_link {
        "← Back to Home".to_string()
    } else {
        header
            .nav_items
            .iter()
            .map(|item| {
                if item.active {
                    format!("[{}]", item.label)
                } else {
                    item.label.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("  ")
    };
    let theme = match header.theme_icon {
        ThemeIcon::Sun => "☀",
        ThemeIcon::Moon => "☾",
    };
    let menu = match header.menu_icon {
        MenuIcon::Hamburger => "≡",
        MenuIcon::Close => "×",
    };
    format!("{BRAND}   {nav}   {theme} {menu}")
}

fn menu_line(entry: &MenuEntryView) -> String {
    format!("  › {}", entry.label)
}

fn render_section(
    frame: &mut Frame,
    section: NavSection,
    posts: &[PostCardView],
    projects: &[ProjectView],
) {
    frame.mount(section);
    match section {
        NavSection::Home => {
            frame.push("Available for freelance projects");
            frame.push("Building digital products, sharing the journey.");
            frame.push(
                "I'm Alex, a Product Designer & Developer. I write about code, design trends, and the future of the web.",
            );
            frame.push("→ Read the Blog (nav blog)   → Contact Me (nav contact)");
        }
        NavSection::About => {
            frame.push("About Me");
            frame.push("Selected Projects");
            for project in projects {
                frame.push(format!("  ◆ {}: {}", project.title, project.description));
                if !project.tags.is_empty() {
                    frame.push(format!("    {}", project.tags.join(" · ")));
                }
            }
        }
        NavSection::Blog => {
            frame.push("Latest Writings");
            for post in posts {
                frame.push(format!("  [{}] {}", post.id, post.title));
                frame.push(format!("      {}", post.excerpt));
                frame.push(format!(
                    "      {} · {} · {}",
                    post.category, post.date, post.read_time
                ));
            }
        }
        NavSection::Contact => {
            frame.push("Let's start a conversation");
            frame.push("Enter your email and press send (submit).");
        }
    }
    frame.push("");
}

fn render_article(frame: &mut Frame, article: &ArticleView) {
    frame.push("← Back to Articles");
    frame.push(format!(
        "{} · {} · {}",
        article.category, article.date, article.read_time
    ));
    frame.push(article.title.clone());
    frame.push(format!("│ {}", article.excerpt));
    frame.push(RULE);
    for line in article.content.lines() {
        frame.push(line);
    }
    frame.push(RULE);
    frame.push("Share this article");
}
