use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Offset of `self` from `origin`, e.g. a viewport pointer position
    /// expressed relative to the board's top-left corner.
    pub fn relative_to(&self, origin: Point) -> Point {
        Point::new(self.x - origin.x, self.y - origin.y)
    }
}

/// Type discriminator carried by every element placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Image,
    Text,
}

impl ItemKind {
    /// Value of the element's `id` attribute.
    pub fn discriminator(&self) -> &'static str {
        match self {
            ItemKind::Image => "image",
            ItemKind::Text => "text",
        }
    }

    pub fn classes(&self) -> &'static [&'static str] {
        match self {
            ItemKind::Image => &["draggable"],
            ItemKind::Text => &["text-item", "draggable"],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageItem {
    pub url: String,
    pub left: String,
    pub top: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextItem {
    pub text: String,
    pub left: String,
    pub top: String,
}

/// A committed placement, ready to be appended to the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacedItem {
    Image(ImageItem),
    Text(TextItem),
}

impl PlacedItem {
    pub fn kind(&self) -> ItemKind {
        match self {
            PlacedItem::Image(_) => ItemKind::Image,
            PlacedItem::Text(_) => ItemKind::Text,
        }
    }

    pub fn position(&self) -> (&str, &str) {
        match self {
            PlacedItem::Image(item) => (&item.left, &item.top),
            PlacedItem::Text(item) => (&item.left, &item.top),
        }
    }
}

/// Everything the board persists. Sequence order is z-order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutDocument {
    #[serde(default)]
    pub images: Vec<ImageItem>,
    #[serde(rename = "text", default)]
    pub text_items: Vec<TextItem>,
}

impl LayoutDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.images.len() + self.text_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty() && self.text_items.is_empty()
    }

    pub fn push(&mut self, item: PlacedItem) {
        match item {
            PlacedItem::Image(image) => self.images.push(image),
            PlacedItem::Text(text) => self.text_items.push(text),
        }
    }
}

/// Formats a CSS pixel offset: `40.0` -> `"40px"`, `12.5` -> `"12.5px"`.
pub fn px(value: f64) -> String {
    // Normalise -0.0 so it doesn't print as "-0px".
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{}px", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(40.0), "40px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(-3.0), "-3px");
        assert_eq!(px(-0.0), "0px");
    }

    #[test]
    fn test_relative_to() {
        let pointer = Point::new(50.0, 80.0);
        let origin = Point::new(10.0, 10.0);
        assert_eq!(pointer.relative_to(origin), Point::new(40.0, 70.0));
    }

    #[test]
    fn test_item_kind_tagging() {
        assert_eq!(ItemKind::Image.discriminator(), "image");
        assert_eq!(ItemKind::Text.discriminator(), "text");
        assert_eq!(ItemKind::Image.classes(), ["draggable"]);
        assert_eq!(ItemKind::Text.classes(), ["text-item", "draggable"]);
    }

    #[test]
    fn test_document_wire_keys() {
        let mut doc = LayoutDocument::new();
        doc.push(PlacedItem::Image(ImageItem {
            url: "a.png".to_string(),
            left: "40px".to_string(),
            top: "70px".to_string(),
        }));
        doc.push(PlacedItem::Text(TextItem {
            text: "hello".to_string(),
            left: "1px".to_string(),
            top: "2px".to_string(),
        }));

        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "images": [{ "url": "a.png", "left": "40px", "top": "70px" }],
                "text": [{ "text": "hello", "left": "1px", "top": "2px" }],
            })
        );
    }

    #[test]
    fn test_missing_sequence_reads_as_empty() {
        let doc: LayoutDocument = serde_json::from_str(r#"{"images": []}"#).unwrap();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
    }
}
