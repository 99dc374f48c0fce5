use leptos::logging;
use ui_host_web::WebHostServices;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use super::{debug, decor, dom, forms, modals, observers};
use crate::{
    config::{UiConfig, CONFIG_ELEMENT_ID},
    controller::UiController,
    runtime_context::{register_page_runtime, PageRuntime},
};

/// Reads the embedded `#ui-config` document; absent or malformed config falls back to defaults.
pub fn load_config() -> UiConfig {
    let raw = dom::document()
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content())
        .unwrap_or_default();
    UiConfig::from_json(&raw).unwrap_or_else(|err| {
        logging::warn!("{err}; using defaults");
        UiConfig::default()
    })
}

/// Existing `.toast-container`, or a new one appended to `<body>`.
#[cfg_attr(not(all(feature = "csr", target_arch = "wasm32")), allow(dead_code))]
fn toast_container() -> Option<HtmlElement> {
    if let Some(existing) = dom::query(".toast-container") {
        return existing.dyn_into::<HtmlElement>().ok();
    }
    let document = dom::document()?;
    let container = document
        .create_element("div")
        .ok()?
        .dyn_into::<HtmlElement>()
        .ok()?;
    container.set_class_name("toast-container");
    document.body()?.append_child(&container).ok()?;
    Some(container)
}

/// Runs every page installer and registers the page runtime for the JS exports.
pub fn install_page(controller: &UiController, host: &WebHostServices) {
    modals::install(controller);
    forms::install();
    observers::install(controller);
    decor::install(controller);
    let diagnostics = debug::install(controller, host);
    register_page_runtime(PageRuntime {
        controller: controller.clone(),
        clipboard: host.clipboard.clone(),
        diagnostics,
    });
}

/// Boots the page runtime once the document is parsed: config, host services, controller,
/// installers and the toast stack.
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
pub fn boot() {
    dom::on_dom_ready(mount);
}

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
fn mount() {
    use std::rc::Rc;

    use leptos::*;

    use crate::{components::ToastStack, host::DomSurface, runtime_context::UiRuntimeContext};

    let config = load_config();
    let host = ui_host_web::host_services();
    let Some(container) = toast_container() else {
        logging::warn!("toast container could not be created; ui runtime not started");
        return;
    };

    mount_to(container, move || {
        let toasts = create_rw_signal(Vec::new());
        let controller = UiController::new(
            config,
            host.scheduler.clone(),
            Rc::new(DomSurface::new(toasts)),
        );
        install_page(&controller, &host);
        let runtime = UiRuntimeContext::new(controller, toasts);
        view! { <ToastStack runtime=runtime /> }
    });
}
