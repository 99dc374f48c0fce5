use std::{cell::RefCell, rc::Rc};

use js_sys::Array;
use leptos::logging;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::dom;
use crate::{
    controller::UiController,
    reveal::{
        LazyImage, ObserveKey, OneShotRegistry, RevealTarget, LAZY_KEY_ATTR, LAZY_LOADED_CLASS,
        REVEAL_KEY_ATTR,
    },
};

fn observer(
    threshold: Option<f64>,
    mut on_entry: impl FnMut(&IntersectionObserver, Element, bool) + 'static,
) -> Option<IntersectionObserver> {
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_entry(&observer, entry.target(), entry.is_intersecting());
            }
        },
    ));
    let created = match threshold {
        Some(threshold) => {
            let init = IntersectionObserverInit::new();
            init.set_threshold(&JsValue::from_f64(threshold));
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };
    callback.forget();
    match created {
        Ok(observer) => Some(observer),
        Err(err) => {
            logging::warn!("IntersectionObserver unavailable: {err:?}");
            None
        }
    }
}

fn tag(element: &Element, key_attr: &str, key: ObserveKey) {
    let _ = element.set_attribute(key_attr, &key.0.to_string());
}

fn key_of(element: &Element, key_attr: &str) -> Option<ObserveKey> {
    ObserveKey::parse(&element.get_attribute(key_attr)?)
}

/// Swaps `img[data-src]` sources in on first intersection.
fn install_lazy_images() {
    let images = dom::query_all("img[data-src]");
    if images.is_empty() {
        return;
    }
    let registry = Rc::new(RefCell::new(OneShotRegistry::<LazyImage>::lazy_images()));
    let pending = registry.clone();
    let Some(observer) = observer(None, move |observer, element, intersecting| {
        let Some(key) = key_of(&element, LAZY_KEY_ATTR) else {
            return;
        };
        let Some(image) = pending.borrow_mut().trigger(key, intersecting) else {
            return;
        };
        let _ = element.set_attribute("src", &image.source);
        let _ = element.remove_attribute("data-src");
        let _ = element.remove_attribute(LAZY_KEY_ATTR);
        let _ = element.class_list().add_1(LAZY_LOADED_CLASS);
        observer.unobserve(&element);
    }) else {
        return;
    };

    for image in images {
        let Some(source) = image.get_attribute("data-src") else {
            continue;
        };
        let key = registry.borrow_mut().observe(LazyImage { source });
        tag(&image, LAZY_KEY_ATTR, key);
        observer.observe(&image);
    }
}

/// Adds `animate-<name>` to `[data-reveal]` elements once they scroll into view.
fn install_reveal(controller: &UiController) {
    let elements = dom::query_all("[data-reveal]");
    if elements.is_empty() {
        return;
    }
    let config = controller.config().reveal.clone();
    let scheduler = controller.scheduler();
    let registry = Rc::new(RefCell::new(OneShotRegistry::<RevealTarget>::reveal_targets()));
    let pending = registry.clone();
    let Some(observer) = observer(
        Some(config.threshold),
        move |observer, element, intersecting| {
            let Some(key) = key_of(&element, REVEAL_KEY_ATTR) else {
                return;
            };
            let Some(target) = pending.borrow_mut().trigger(key, intersecting) else {
                return;
            };
            observer.unobserve(&element);
            let _ = element.remove_attribute(REVEAL_KEY_ATTR);
            let class = target.class_name();
            scheduler.schedule(
                target.delay_ms,
                Box::new(move || {
                    let _ = element.class_list().add_1(&class);
                }),
            );
        },
    ) else {
        return;
    };

    for element in elements {
        let target = RevealTarget::from_attributes(
            element.get_attribute("data-reveal").as_deref(),
            element.get_attribute("data-reveal-delay").as_deref(),
            &config.default_animation,
        );
        let key = registry.borrow_mut().observe(target);
        tag(&element, REVEAL_KEY_ATTR, key);
        observer.observe(&element);
    }
}

pub(super) fn install(controller: &UiController) {
    install_lazy_images();
    install_reveal(controller);
}
