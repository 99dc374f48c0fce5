//! Leptos view for the toast stack mounted inside `.toast-container`.

use leptos::*;

use crate::{model::ToastRecord, runtime_context::UiRuntimeContext};

const CLOSE_ICON: &str = r#"<svg fill="currentColor" viewBox="0 0 20 20"><path fill-rule="evenodd" d="M4.293 4.293a1 1 0 011.414 0L10 8.586l4.293-4.293a1 1 0 111.414 1.414L11.414 10l4.293 4.293a1 1 0 01-1.414 1.414L10 11.414l-4.293 4.293a1 1 0 01-1.414-1.414L8.586 10 4.293 5.707a1 1 0 010-1.414z" clip-rule="evenodd"/></svg>"#;

/// Inline style for a toast whose fade-out is running.
fn fade_out_animation(fade_out_ms: u64) -> String {
    format!("animation: fadeOut {}s ease-out", fade_out_ms as f64 / 1000.0)
}

#[component]
pub fn ToastStack(runtime: UiRuntimeContext) -> impl IntoView {
    view! {
        <For
            each=move || runtime.toasts.get()
            key=|toast| toast.id
            children=move |toast: ToastRecord| view! { <ToastCard runtime=runtime toast=toast /> }
        />
    }
}

#[component]
fn ToastCard(runtime: UiRuntimeContext, toast: ToastRecord) -> impl IntoView {
    let toast_id = toast.id;
    let class = format!("toast {}", toast.kind.css_modifier());
    let icon = toast.icon_markup().to_string();
    let card = create_node_ref::<html::Div>();
    card.on_load(move |card| {
        let _ = card.insert_adjacent_html("afterbegin", &icon);
    });
    let fade_out = fade_out_animation(runtime.fade_out_ms());
    let style = move || runtime.is_leaving(toast_id).then(|| fade_out.clone());
    let title = (!toast.title.is_empty()).then(|| {
        view! { <div class="toast-title">{toast.title.clone()}</div> }
    });

    view! {
        <div node_ref=card class=class role="status" style=style>
            <div class="toast-content">
                {title}
                <div class="toast-message">{toast.message}</div>
            </div>
            <button
                class="toast-close"
                type="button"
                aria-label="Close"
                inner_html=CLOSE_ICON
                on:click=move |_| runtime.dismiss(toast_id)
            ></button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::ToastKind;

    #[test]
    fn fade_out_style_uses_seconds() {
        assert_eq!(fade_out_animation(300), "animation: fadeOut 0.3s ease-out");
        assert_eq!(fade_out_animation(1000), "animation: fadeOut 1s ease-out");
    }

    #[test]
    fn built_in_icons_are_bare_toast_icon_svgs() {
        for kind in [
            ToastKind::Success,
            ToastKind::Error,
            ToastKind::Warning,
            ToastKind::Info,
        ] {
            assert!(
                kind.icon_svg().starts_with(r#"<svg class="toast-icon""#),
                "{kind:?}"
            );
        }
    }
}
