use std::collections::BTreeMap;
use std::io::{self, Write};

use folio_core::{PageViewModel, PresentationSurface, ScrollBehavior, Viewport, DARK_MODE_FLAG};
use folio_logging::folio_trace;

use super::ui::render::{render, Frame};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollPosition {
    Top,
    Anchor(String),
}

/// The page as painted in the terminal: the current frame, where the
/// viewport sits in it, and the document-wide mode flags.
#[derive(Debug)]
pub struct TerminalDocument {
    frame: Frame,
    position: ScrollPosition,
    flags: BTreeMap<String, bool>,
    height: usize,
}

impl TerminalDocument {
    pub fn new(height: usize) -> Self {
        Self {
            frame: Frame::default(),
            position: ScrollPosition::Top,
            flags: BTreeMap::new(),
            height: height.max(1),
        }
    }

    /// Replaces the markup. Returns true when the painted frame is the
    /// landing surface, whatever was painted before it.
    pub fn present(&mut self, view: &PageViewModel) -> bool {
        self.frame = render(view);
        !self.frame.anchors.is_empty()
    }

    pub fn position(&self) -> &ScrollPosition {
        &self.position
    }

    pub fn mode_flag(&self, flag: &str) -> bool {
        self.flags.get(flag).copied().unwrap_or(false)
    }

    pub fn visible_lines(&self) -> &[String] {
        let start = match &self.position {
            ScrollPosition::Top => 0,
            ScrollPosition::Anchor(id) => self.frame.anchor_line(id).unwrap_or(0),
        };
        let start = start.min(self.frame.lines.len());
        let end = (start + self.height).min(self.frame.lines.len());
        &self.frame.lines[start..end]
    }

    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let mode = if self.mode_flag(DARK_MODE_FLAG) {
            "dark"
        } else {
            "light"
        };
        writeln!(out)?;
        writeln!(out, "┌ mode: {mode}")?;
        for line in self.visible_lines() {
            writeln!(out, "│ {line}")?;
        }
        writeln!(out, "└")?;
        out.flush()
    }
}

impl Viewport for TerminalDocument {
    fn contains_anchor(&self, id: &str) -> bool {
        self.frame.anchor_line(id).is_some()
    }

    fn scroll_element_into_view(&mut self, id: &str, behavior: ScrollBehavior) {
        folio_trace!("scroll #{} ({:?})", id, behavior);
        self.position = ScrollPosition::Anchor(id.to_string());
    }

    fn scroll_to_origin(&mut self, behavior: ScrollBehavior) {
        folio_trace!("scroll to top ({:?})", behavior);
        self.position = ScrollPosition::Top;
    }
}

impl PresentationSurface for TerminalDocument {
    fn set_mode_flag(&mut self, flag: &str, enabled: bool) {
        self.flags.insert(flag.to_string(), enabled);
    }
}
