use crate::types::Point;
use wasm_bindgen::JsValue;
use web_sys::{Element, MouseEvent};

/// Raw viewport coordinates of a pointer event. `client_x()` is an integer
/// binding, so the fractional `clientX`/`clientY` are read directly.
pub fn client_point(event: &MouseEvent) -> Point {
    let read = |name: &str| {
        js_sys::Reflect::get(event, &JsValue::from_str(name))
            .ok()
            .and_then(|value| value.as_f64())
    };
    Point::new(
        pointer_axis(read("clientX"), event.client_x()),
        pointer_axis(read("clientY"), event.client_y()),
    )
}

fn pointer_axis(precise: Option<f64>, whole: i32) -> f64 {
    match precise {
        Some(value) if value.is_finite() => value,
        _ => whole as f64,
    }
}

/// Viewport position of the element's top-left corner.
pub fn element_origin(element: &Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(rect.left(), rect.top())
}

/// Inline style for the element following the pointer. Pointer events are
/// disabled so the click that commits lands on the board underneath.
pub fn preview_style(pointer: Point) -> String {
    format!(
        "position: fixed; left: {}px; top: {}px; pointer-events: none;",
        pointer.x, pointer.y
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_axis_keeps_fraction() {
        assert_eq!(pointer_axis(Some(40.5), 40), 40.5);
        assert_eq!(pointer_axis(None, 40), 40.0);
        assert_eq!(pointer_axis(Some(f64::NAN), 7), 7.0);
    }

    #[test]
    fn test_preview_style_uses_raw_pointer() {
        assert_eq!(
            preview_style(Point::new(50.0, 80.5)),
            "position: fixed; left: 50px; top: 80.5px; pointer-events: none;"
        );
    }
}
