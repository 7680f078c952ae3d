use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlImageElement};

use crate::sprite::Sprite;

/// Create one `<img>` per sprite inside the host container.
///
/// Layout (absolute positioning, z-order, the cursor indicator's look) is
/// left to the host stylesheet; the engine only drives transforms.
pub(super) fn build_sprite_elements(
    document: &Document,
    container: &HtmlElement,
    sprites: &[Sprite],
) -> Result<Vec<HtmlElement>, JsValue> {
    let mut elements = Vec::with_capacity(sprites.len());

    for sprite in sprites {
        let img: HtmlImageElement = document.create_element("img")?.dyn_into()?;
        img.set_class_name("scene-sprite");
        img.set_src(&sprite.asset);

        let style = img.style();
        style.set_property("width", &format!("{}px", sprite.size))?;
        style.set_property("height", "auto")?;

        container.append_child(&img)?;
        elements.push(img.into());
    }

    Ok(elements)
}

/// Commit per-sprite position/rotation transforms to the DOM
pub(super) fn commit_transforms(
    elements: &[HtmlElement],
    sprites: &[Sprite],
) -> Result<(), JsValue> {
    for (element, sprite) in elements.iter().zip(sprites.iter()) {
        let transform = format!(
            "translate({}px, {}px) rotate({}deg)",
            sprite.pos.x, sprite.pos.y, sprite.rotation
        );
        element.style().set_property("transform", &transform)?;
    }

    Ok(())
}

/// Reposition the cursor indicator element
pub(super) fn move_cursor_indicator(cursor: &HtmlElement, x: f32, y: f32) -> Result<(), JsValue> {
    let style = cursor.style();
    style.set_property("left", &format!("{x}px"))?;
    style.set_property("top", &format!("{y}px"))?;
    Ok(())
}
