use leptos::logging;
use wasm_bindgen::{closure::Closure, convert::FromWasmAbi, JsCast};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList};

pub(super) fn document() -> Option<Document> {
    web_sys::window()?.document()
}

pub(super) fn body() -> Option<HtmlElement> {
    document()?.body()
}

fn collect(nodes: NodeList) -> Vec<Element> {
    (0..nodes.length())
        .filter_map(|index| nodes.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Every element in the document matching `selector`.
pub(super) fn query_all(selector: &str) -> Vec<Element> {
    document()
        .and_then(|document| document.query_selector_all(selector).ok())
        .map(collect)
        .unwrap_or_default()
}

/// Every descendant of `root` matching `selector`.
pub(super) fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    root.query_selector_all(selector)
        .map(collect)
        .unwrap_or_default()
}

/// First element matching `selector`; invalid selectors match nothing.
pub(super) fn query(selector: &str) -> Option<Element> {
    document()?.query_selector(selector).ok().flatten()
}

/// Attaches a listener for the page lifetime.
pub(super) fn listen<E>(target: &EventTarget, event: &str, handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let callback = Closure::<dyn FnMut(E)>::wrap(Box::new(handler));
    if let Err(err) =
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
    {
        logging::warn!("failed to attach `{event}` listener: {err:?}");
    }
    callback.forget();
}

/// Whether the document has finished parsing (`DOMContentLoaded` has fired).
fn is_parsed(ready_state: &str) -> bool {
    ready_state != "loading"
}

/// Whether the window `load` event has fired.
fn is_loaded(ready_state: &str) -> bool {
    ready_state == "complete"
}

/// Runs `f` now when `ready` holds, otherwise on the first `event` from `target`.
fn once_ready(target: &EventTarget, event: &str, ready: bool, f: impl FnOnce() + 'static) {
    if ready {
        f();
        return;
    }
    let mut pending = Some(f);
    listen(target, event, move |_: web_sys::Event| {
        if let Some(f) = pending.take() {
            f();
        }
    });
}

fn ready_state() -> String {
    document()
        .map(|document| document.ready_state())
        .unwrap_or_default()
}

/// Runs `f` once the document is parsed, immediately if it already is.
#[cfg_attr(not(all(feature = "csr", target_arch = "wasm32")), allow(dead_code))]
pub(super) fn on_dom_ready(f: impl FnOnce() + 'static) {
    let Some(document) = document() else {
        return;
    };
    once_ready(&document, "DOMContentLoaded", is_parsed(&ready_state()), f);
}

/// Runs `f` once the window `load` event has fired, immediately if it already has.
pub(super) fn on_window_load(f: impl FnOnce() + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    once_ready(&window, "load", is_loaded(&ready_state()), f);
}

pub(super) fn toggle_body_class(class: &str) {
    if let Some(body) = body() {
        let _ = body.class_list().toggle(class);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ready_states_map_to_parse_and_load_milestones() {
        assert!(!is_parsed("loading"));
        assert!(is_parsed("interactive"));
        assert!(is_parsed("complete"));

        assert!(!is_loaded("loading"));
        assert!(!is_loaded("interactive"));
        assert!(is_loaded("complete"));
    }
}
