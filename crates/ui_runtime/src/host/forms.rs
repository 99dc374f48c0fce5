use std::{cell::RefCell, rc::Rc};

use wasm_bindgen::JsCast;
use web_sys::{Element, Event, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

use super::dom;
use crate::validation::{validate_form, FieldError, FieldSpec, FormErrors};

const FIELD_SELECTOR: &str = "input, textarea, select";
const ERROR_CLASS: &str = "form-error";
const INPUT_ERROR_CLASS: &str = "form-input-error";

struct FormBinding {
    fields: Vec<Element>,
    errors: RefCell<FormErrors>,
}

fn field_key(index: usize) -> String {
    format!("field-{index}")
}

/// Validation attributes and current value of a form control.
fn read_field(element: &Element) -> (FieldSpec, String) {
    let (input_type, value) = if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
        (input.type_(), input.value())
    } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
        ("textarea".to_string(), area.value())
    } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
        (select.type_(), select.value())
    } else {
        (String::new(), String::new())
    };
    let spec = FieldSpec::from_attributes(
        &input_type,
        element.has_attribute("required"),
        element.get_attribute("minlength").as_deref(),
    );
    (spec, value)
}

fn clear_error(field: &Element) {
    let _ = field.class_list().remove_1(INPUT_ERROR_CLASS);
    let Some(parent) = field.parent_element() else {
        return;
    };
    if let Ok(Some(label)) = parent.query_selector(&format!(".{ERROR_CLASS}")) {
        label.remove();
    }
}

fn show_error(field: &Element, message: &str) {
    clear_error(field);
    let _ = field.class_list().add_1(INPUT_ERROR_CLASS);
    let (Some(document), Some(parent)) = (dom::document(), field.parent_node()) else {
        return;
    };
    let Ok(label) = document.create_element("div") else {
        return;
    };
    label.set_class_name(ERROR_CLASS);
    label.set_text_content(Some(message));
    let _ = parent.append_child(&label);
}

fn render(field: &Element, error: Option<&FieldError>) {
    match error {
        Some(error) => show_error(field, &error.to_string()),
        None => clear_error(field),
    }
}

impl FormBinding {
    fn validate_one(&self, index: usize) {
        let Some(field) = self.fields.get(index) else {
            return;
        };
        let (spec, value) = read_field(field);
        let key = field_key(index);
        let mut errors = self.errors.borrow_mut();
        errors.check(&key, &spec, &value);
        render(field, errors.error(&key));
    }

    fn clear_one(&self, index: usize) {
        let Some(field) = self.fields.get(index) else {
            return;
        };
        self.errors.borrow_mut().clear(&field_key(index));
        clear_error(field);
    }

    fn validate_all(&self) -> bool {
        let snapshots: Vec<(String, FieldSpec, String)> = self
            .fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let (spec, value) = read_field(field);
                (field_key(index), spec, value)
            })
            .collect();
        let mut errors = self.errors.borrow_mut();
        let valid = validate_form(
            &mut errors,
            snapshots
                .iter()
                .map(|(key, spec, value)| (key.as_str(), spec, value.as_str())),
        );
        for (field, (key, _, _)) in self.fields.iter().zip(&snapshots) {
            render(field, errors.error(key));
        }
        valid
    }
}

/// Validates every `form[data-validate]`: fields on blur, errors cleared on input, submission
/// blocked while any field fails.
pub(super) fn install() {
    for form in dom::query_all("form[data-validate]") {
        let binding = Rc::new(FormBinding {
            fields: dom::query_all_in(&form, FIELD_SELECTOR),
            errors: RefCell::new(FormErrors::default()),
        });

        for (index, field) in binding.fields.iter().enumerate() {
            let on_blur = binding.clone();
            dom::listen(field, "blur", move |_: Event| on_blur.validate_one(index));
            let on_input = binding.clone();
            dom::listen(field, "input", move |_: Event| on_input.clear_one(index));
        }

        let on_submit = binding.clone();
        dom::listen(&form, "submit", move |ev: Event| {
            if !on_submit.validate_all() {
                ev.prevent_default();
            }
        });
    }
}
