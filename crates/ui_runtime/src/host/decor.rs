use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{
    HtmlElement, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use super::dom;
use crate::{
    config::ParticleConfig,
    controller::UiController,
    decor::{anchor_selector, particle_field, ripple_geometry, RippleInput},
};

fn viewport_width() -> u32 {
    web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64())
        .map(|width| width.max(0.0) as u32)
        .unwrap_or(0)
}

fn install_particles(config: &ParticleConfig) {
    let Some(document) = dom::document() else {
        return;
    };
    let width = viewport_width();
    let mut random = js_sys::Math::random;
    for container in dom::query_all(".particles-container") {
        for style in particle_field(width, config, &mut random) {
            let Ok(particle) = document.create_element("div") else {
                return;
            };
            particle.set_class_name("particle");
            let _ = particle.set_attribute("style", &style.to_css());
            let _ = container.append_child(&particle);
        }
    }
}

fn spawn_ripple(button: &HtmlElement, ev: &MouseEvent) {
    let Some(document) = dom::document() else {
        return;
    };
    let geometry = ripple_geometry(RippleInput {
        client_width: f64::from(button.client_width()),
        client_height: f64::from(button.client_height()),
        offset_left: f64::from(button.offset_left()),
        offset_top: f64::from(button.offset_top()),
        click_x: f64::from(ev.client_x()),
        click_y: f64::from(ev.client_y()),
    });
    let Ok(ripple) = document.create_element("span") else {
        return;
    };
    let Ok(ripple) = ripple.dyn_into::<HtmlElement>() else {
        return;
    };
    let style = ripple.style();
    let diameter = format!("{}px", geometry.diameter);
    let _ = style.set_property("width", &diameter);
    let _ = style.set_property("height", &diameter);
    let _ = style.set_property("left", &format!("{}px", geometry.left));
    let _ = style.set_property("top", &format!("{}px", geometry.top));
    let _ = ripple.class_list().add_1("ripple");

    if let Ok(Some(existing)) = button.query_selector(".ripple") {
        existing.remove();
    }
    let _ = button.append_child(&ripple);
}

fn install_ripples() {
    for button in dom::query_all(".btn-ripple") {
        let Ok(button) = button.dyn_into::<HtmlElement>() else {
            continue;
        };
        let target = button.clone();
        dom::listen(&button, "click", move |ev: MouseEvent| spawn_ripple(&target, &ev));
    }
}

fn install_smooth_scroll() {
    for anchor in dom::query_all(r##"a[href^="#"]"##) {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |ev: MouseEvent| {
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(target) = anchor_selector(&href).and_then(dom::query) else {
                return;
            };
            ev.prevent_default();
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        });
    }
}

/// Adds `loaded` to `<body>` after window load and fades out then removes `#preloader`.
fn install_preloader(controller: &UiController) {
    let config = controller.config().preloader.clone();
    let scheduler = controller.scheduler();
    dom::on_window_load(move || {
        if let Some(body) = dom::body() {
            let _ = body.class_list().add_1("loaded");
        }
        let Some(preloader) =
            dom::document().and_then(|document| document.get_element_by_id("preloader"))
        else {
            return;
        };
        let remover = Rc::clone(&scheduler);
        scheduler.schedule(
            config.fade_delay_ms,
            Box::new(move || {
                let _ = preloader.class_list().add_1("fade-out");
                remover.schedule(config.remove_delay_ms, Box::new(move || preloader.remove()));
            }),
        );
    });
}

pub(super) fn install(controller: &UiController) {
    install_smooth_scroll();
    install_ripples();
    install_particles(&controller.config().particles);
    install_preloader(controller);
}
