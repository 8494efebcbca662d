use yew::prelude::*;

use crate::types::{ItemKind, LayoutDocument};

/// A positioned element on the board, derived from the layout document.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardElement {
    pub kind: ItemKind,
    pub content: String,
    pub left: String,
    pub top: String,
}

impl BoardElement {
    pub fn style(&self) -> String {
        format!("position: absolute; left: {}; top: {};", self.left, self.top)
    }
}

/// All images in sequence order, then all text items.
pub fn project(doc: &LayoutDocument) -> Vec<BoardElement> {
    let images = doc.images.iter().map(|image| BoardElement {
        kind: ItemKind::Image,
        content: image.url.clone(),
        left: image.left.clone(),
        top: image.top.clone(),
    });
    let texts = doc.text_items.iter().map(|text| BoardElement {
        kind: ItemKind::Text,
        content: text.text.clone(),
        left: text.left.clone(),
        top: text.top.clone(),
    });
    images.chain(texts).collect()
}

/// Renders a single element. `style` is passed through untouched so the same
/// markup serves both committed items and the pending preview.
pub fn render_element(kind: ItemKind, content: &str, style: Option<String>) -> Html {
    let class = classes!(kind.classes().to_vec());
    match kind {
        ItemKind::Image => html! {
            <img
                id={kind.discriminator()}
                {class}
                src={content.to_string()}
                style={style}
                draggable="false"
            />
        },
        ItemKind::Text => html! {
            <div id={kind.discriminator()} {class} style={style}>
                {content.to_string()}
            </div>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct BoardItemsProps {
    pub document: LayoutDocument,
}

#[function_component(BoardItems)]
pub fn board_items(props: &BoardItemsProps) -> Html {
    project(&props.document)
        .into_iter()
        .map(|element| render_element(element.kind, &element.content, Some(element.style())))
        .collect::<Html>()
}
