use ui_host::{
    ElementBoxSample, ImageSample, LayoutProbe, LoadTiming, TextSample, TouchTargetSample,
    ViewportSize,
};

/// Interactive elements checked for touch-target size.
pub const TOUCH_TARGET_SELECTOR: &str = "a, button, input, select";
/// Text-bearing elements checked for font size.
pub const TEXT_SELECTOR: &str = "p, span, a, button, li, td, th";

/// Parses a computed CSS pixel length such as `"13.5px"`.
pub fn parse_px(raw: &str) -> Option<f64> {
    raw.trim()
        .strip_suffix("px")
        .unwrap_or(raw.trim())
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

#[cfg(target_arch = "wasm32")]
mod imp {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlImageElement, Window};

    use super::*;

    fn window_document() -> Option<(Window, Document)> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some((window, document))
    }

    fn elements(selector: &str) -> Vec<Element> {
        let Some((_, document)) = window_document() else {
            return Vec::new();
        };
        let Ok(nodes) = document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|index| nodes.item(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn computed_property(element: &Element, property: &str) -> String {
        web_sys::window()
            .and_then(|window| window.get_computed_style(element).ok().flatten())
            .and_then(|style| style.get_property_value(property).ok())
            .unwrap_or_default()
    }

    fn text_of(element: &Element) -> String {
        element.text_content().unwrap_or_default()
    }

    pub(super) fn viewport() -> ViewportSize {
        let Some(window) = web_sys::window() else {
            return ViewportSize::default();
        };
        let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
            value
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value.max(0.0) as u32)
                .unwrap_or(0)
        };
        ViewportSize {
            width: dimension(window.inner_width()),
            height: dimension(window.inner_height()),
        }
    }

    pub(super) fn body_scroll_width() -> f64 {
        window_document()
            .and_then(|(_, document)| document.body())
            .map(|body| f64::from(body.scroll_width()))
            .unwrap_or(0.0)
    }

    pub(super) fn touch_targets() -> Vec<TouchTargetSample> {
        elements(TOUCH_TARGET_SELECTOR)
            .into_iter()
            .map(|element| {
                let rect = element.get_bounding_client_rect();
                TouchTargetSample {
                    tag: element.tag_name(),
                    text: text_of(&element),
                    width: rect.width(),
                    height: rect.height(),
                }
            })
            .collect()
    }

    pub(super) fn images() -> Vec<ImageSample> {
        elements("img")
            .into_iter()
            .filter_map(|element| {
                let computed_max_width = computed_property(&element, "max-width");
                let image = element.dyn_into::<HtmlImageElement>().ok()?;
                let inline_height = image
                    .style()
                    .get_property_value("height")
                    .unwrap_or_default();
                Some(ImageSample {
                    src: image.src(),
                    computed_max_width,
                    inline_height,
                })
            })
            .collect()
    }

    pub(super) fn element_boxes() -> Vec<ElementBoxSample> {
        elements("*")
            .into_iter()
            .map(|element| {
                let rect = element.get_bounding_client_rect();
                ElementBoxSample {
                    tag: element.tag_name(),
                    class: element.get_attribute("class").unwrap_or_default(),
                    width: rect.width(),
                    right: rect.right(),
                }
            })
            .collect()
    }

    pub(super) fn text_elements() -> Vec<TextSample> {
        elements(TEXT_SELECTOR)
            .into_iter()
            .filter_map(|element| {
                let font_size_px = parse_px(&computed_property(&element, "font-size"))?;
                Some(TextSample {
                    tag: element.tag_name(),
                    text: text_of(&element),
                    font_size_px,
                })
            })
            .collect()
    }

    pub(super) fn load_timing() -> Option<LoadTiming> {
        let timing = web_sys::window()?.performance()?.timing();
        Some(LoadTiming {
            navigation_start: timing.navigation_start(),
            dom_content_loaded_event_end: timing.dom_content_loaded_event_end(),
            load_event_end: timing.load_event_end(),
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Probe that samples the live document.
///
/// Outside `wasm32` every sample is empty.
pub struct DomLayoutProbe;

impl LayoutProbe for DomLayoutProbe {
    fn viewport(&self) -> ViewportSize {
        #[cfg(target_arch = "wasm32")]
        {
            imp::viewport()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            ViewportSize::default()
        }
    }

    fn body_scroll_width(&self) -> f64 {
        #[cfg(target_arch = "wasm32")]
        {
            imp::body_scroll_width()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            0.0
        }
    }

    fn touch_targets(&self) -> Vec<TouchTargetSample> {
        #[cfg(target_arch = "wasm32")]
        {
            imp::touch_targets()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }

    fn images(&self) -> Vec<ImageSample> {
        #[cfg(target_arch = "wasm32")]
        {
            imp::images()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }

    fn element_boxes(&self) -> Vec<ElementBoxSample> {
        #[cfg(target_arch = "wasm32")]
        {
            imp::element_boxes()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }

    fn text_elements(&self) -> Vec<TextSample> {
        #[cfg(target_arch = "wasm32")]
        {
            imp::text_elements()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Vec::new()
        }
    }

    fn load_timing(&self) -> Option<LoadTiming> {
        #[cfg(target_arch = "wasm32")]
        {
            imp::load_timing()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn computed_pixel_lengths_parse() {
        assert_eq!(parse_px("13.5px"), Some(13.5));
        assert_eq!(parse_px(" 16px "), Some(16.0));
        assert_eq!(parse_px("12"), Some(12.0));
        assert_eq!(parse_px("medium"), None);
        assert_eq!(parse_px(""), None);
    }

    #[test]
    fn native_probe_is_empty() {
        let probe = DomLayoutProbe;
        assert_eq!(probe.viewport(), ViewportSize::default());
        assert!(probe.touch_targets().is_empty());
        assert_eq!(probe.load_timing(), None);
    }
}
