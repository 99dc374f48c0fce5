use std::rc::Rc;

use leptos::{ev, logging, on_cleanup, window_event_listener};
use ui_host::{DiagnosticCheck, DiagnosticReport, Severity};
use ui_host_web::WebHostServices;
use wasm_bindgen::prelude::*;

use super::dom;
use crate::{
    controller::UiController,
    diagnostics::{debug_enabled, DebugCommand, ResponsiveDiagnostics},
    timing::debounce,
};

/// Mirrors the classified viewport onto `<body>` data attributes.
fn sync_viewport(diagnostics: &ResponsiveDiagnostics) {
    let info = diagnostics.track_viewport();
    let Some(body) = dom::body() else {
        return;
    };
    for (name, value) in info.body_attributes() {
        let _ = body.set_attribute(name, &value);
    }
}

fn run(diagnostics: &ResponsiveDiagnostics, command: DebugCommand) {
    match command.body_class() {
        Some(class) => {
            dom::toggle_body_class(class);
            if let Some(report) = command.toggle_report() {
                diagnostics.emit(report);
            }
        }
        None => diagnostics.run_command(command),
    }
}

#[wasm_bindgen]
/// `window.responsiveDebug`: console access to every responsive check.
pub struct ResponsiveDebugHandle {
    diagnostics: Rc<ResponsiveDiagnostics>,
}

#[wasm_bindgen]
impl ResponsiveDebugHandle {
    #[wasm_bindgen(js_name = checkTouchTargets)]
    pub fn check_touch_targets(&self) {
        self.diagnostics.check_touch_targets();
    }

    #[wasm_bindgen(js_name = checkResponsiveImages)]
    pub fn check_responsive_images(&self) {
        self.diagnostics.check_images();
    }

    #[wasm_bindgen(js_name = checkHorizontalScroll)]
    pub fn check_horizontal_scroll(&self) {
        self.diagnostics.check_horizontal_scroll();
    }

    #[wasm_bindgen(js_name = checkFontSizes)]
    pub fn check_font_sizes(&self) {
        self.diagnostics.check_font_sizes();
    }

    #[wasm_bindgen(js_name = checkPerformance)]
    pub fn check_performance(&self) {
        self.diagnostics.check_performance();
    }

    #[wasm_bindgen(js_name = runAllChecks)]
    pub fn run_all_checks(&self) {
        self.diagnostics.run_all_checks();
    }

    #[wasm_bindgen(js_name = toggleDebugGrid)]
    pub fn toggle_debug_grid(&self) {
        run(&self.diagnostics, DebugCommand::ToggleDebugGrid);
    }

    #[wasm_bindgen(js_name = toggleViewportSize)]
    pub fn toggle_viewport_size(&self) {
        run(&self.diagnostics, DebugCommand::ToggleViewportSize);
    }

    #[wasm_bindgen(js_name = updateViewportInfo)]
    pub fn update_viewport_info(&self) {
        sync_viewport(&self.diagnostics);
    }
}

fn expose_global(diagnostics: Rc<ResponsiveDiagnostics>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let handle = JsValue::from(ResponsiveDebugHandle { diagnostics });
    if let Err(err) = js_sys::Reflect::set(&window, &JsValue::from_str("responsiveDebug"), &handle)
    {
        logging::warn!("failed to expose responsiveDebug: {err:?}");
    }
}

fn session(headline: &str) -> DiagnosticReport {
    DiagnosticReport::new(DiagnosticCheck::Session, Severity::Info, headline)
}

/// Loads the responsive debug tools on development hosts; returns `None` when gated off.
pub(super) fn install(
    controller: &UiController,
    host: &WebHostServices,
) -> Option<Rc<ResponsiveDiagnostics>> {
    let config = controller.config().diagnostics.clone();
    let location = web_sys::window()?.location();
    let hostname = location.hostname().unwrap_or_default();
    let search = location.search().unwrap_or_default();
    if !debug_enabled(&hostname, &search, &config) {
        logging::log!("Responsive debug tools disabled in production");
        return None;
    }

    let scheduler = controller.scheduler();
    let auto_check_delay_ms = config.auto_check_delay_ms;
    let viewport_debounce_ms = config.viewport_debounce_ms;
    let diagnostics = Rc::new(ResponsiveDiagnostics::new(
        config,
        host.layout_probe.clone(),
        host.diagnostics.clone(),
    ));
    diagnostics.emit(session("Responsive Debug Tools Loaded"));
    sync_viewport(&diagnostics);

    let resampler = diagnostics.clone();
    let on_viewport_change = debounce(scheduler.clone(), viewport_debounce_ms, move |_: ()| {
        sync_viewport(&resampler)
    });
    let on_resize = on_viewport_change.clone();
    let resize_listener = window_event_listener(ev::resize, move |_| on_resize.call(()));
    on_cleanup(move || resize_listener.remove());
    if let Some(window) = web_sys::window() {
        dom::listen(&window, "orientationchange", move |_: web_sys::Event| {
            on_viewport_change.call(())
        });
    }

    let shortcuts = diagnostics.clone();
    let shortcut_listener = window_event_listener(ev::keydown, move |ev| {
        let Some(command) = DebugCommand::from_chord(ev.ctrl_key(), ev.shift_key(), &ev.key())
        else {
            return;
        };
        ev.prevent_default();
        run(&shortcuts, command);
    });
    on_cleanup(move || shortcut_listener.remove());

    let startup = diagnostics.clone();
    dom::on_window_load(move || {
        scheduler.schedule(
            auto_check_delay_ms,
            Box::new(move || startup.run_startup_checks()),
        );
    });

    expose_global(diagnostics.clone());
    diagnostics.emit(
        session("Use window.responsiveDebug to access debug functions")
            .with_detail("Example: responsiveDebug.runAllChecks()"),
    );
    Some(diagnostics)
}
