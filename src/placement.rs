use crate::config::BoardConfig;
use crate::error::{MoodBoardError, Result};
use crate::types::{px, ImageItem, ItemKind, PlacedItem, Point, TextItem};

/// Whitespace as the browser's `\s` sees it: Unicode `White_Space` plus the
/// byte-order mark, minus NEL.
fn is_blank_char(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{FEFF}'
}

/// The element following the pointer, not yet part of the layout.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingElement {
    pub kind: ItemKind,
    /// Image source URL or text content.
    pub content: String,
}

impl PendingElement {
    pub fn image(url: &str) -> Self {
        Self {
            kind: ItemKind::Image,
            content: url.to_string(),
        }
    }

    pub fn text(text: &str) -> Self {
        Self {
            kind: ItemKind::Text,
            content: text.to_string(),
        }
    }
}

/// One spawn-to-commit drag.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementSession {
    pub element: PendingElement,
    /// Last viewport pointer position; `None` until the pointer first moves.
    pub preview: Option<Point>,
}

/// Drives a single placement at a time:
///
/// ```text
/// Idle --request_*--> Placing --pointer_moved--> Placing
///   ^                    |
///   +--commit / abort----+
/// ```
///
/// Triggers that arrive while placing are rejected rather than replacing
/// the pending element.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementController {
    config: BoardConfig,
    session: Option<PlacementSession>,
}

impl Default for PlacementController {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl PlacementController {
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            session: None,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&PlacementSession> {
        self.session.as_ref()
    }

    pub fn is_placing(&self) -> bool {
        self.session.is_some()
    }

    /// Whether add-image, add-text and clear-all may be used.
    pub fn controls_enabled(&self) -> bool {
        !self.is_placing()
    }

    pub fn ensure_idle(&self) -> Result<()> {
        if self.is_placing() {
            return Err(MoodBoardError::PlacementInProgress);
        }
        Ok(())
    }

    pub fn request_image(&mut self, url: &str) -> Result<&PlacementSession> {
        self.ensure_idle()?;
        if !self.config.is_allowed_image_url(url) {
            return Err(MoodBoardError::InvalidImageUrl(url.to_string()));
        }
        Ok(self.spawn(PendingElement::image(url)))
    }

    pub fn request_text(&mut self, text: &str) -> Result<&PlacementSession> {
        self.ensure_idle()?;
        if text.chars().all(is_blank_char) {
            return Err(MoodBoardError::BlankText);
        }
        Ok(self.spawn(PendingElement::text(text)))
    }

    fn spawn(&mut self, element: PendingElement) -> &PlacementSession {
        log::debug!("placing new {}", element.kind.discriminator());
        self.session.insert(PlacementSession {
            element,
            preview: None,
        })
    }

    /// Live preview follows the raw viewport pointer. Returns false when idle.
    pub fn pointer_moved(&mut self, pointer: Point) -> bool {
        match self.session.as_mut() {
            Some(session) => {
                session.preview = Some(pointer);
                true
            }
            None => false,
        }
    }

    /// Fixes the pending element at `pointer - board_origin` and ends the
    /// session. A click with nothing pending does nothing.
    pub fn commit(&mut self, pointer: Point, board_origin: Point) -> Option<PlacedItem> {
        let session = self.session.take()?;
        let offset = pointer.relative_to(board_origin);
        let left = px(offset.x);
        let top = px(offset.y);
        log::debug!(
            "committed {} at {}, {}",
            session.element.kind.discriminator(),
            left,
            top
        );

        let PendingElement { kind, content } = session.element;
        Some(match kind {
            ItemKind::Image => PlacedItem::Image(ImageItem {
                url: content,
                left,
                top,
            }),
            ItemKind::Text => PlacedItem::Text(TextItem {
                text: content,
                left,
                top,
            }),
        })
    }

    /// Drops the pending element without touching the layout.
    pub fn abort(&mut self) -> Option<PendingElement> {
        let session = self.session.take()?;
        log::debug!("aborted {} placement", session.element.kind.discriminator());
        Some(session.element)
    }
}
