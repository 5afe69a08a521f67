//! Analytics Hook
//!
//! Fire-and-forget reporting on successful submission. A page-global `gtag`
//! function is used when present; its absence changes nothing.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::storage::{self, SubmissionRecord};

/// Report a successful contact form submission
pub fn track_submission() {
    fire_gtag_event();

    storage::record_submission(SubmissionRecord {
        timestamp: js_sys::Date::new_0().to_iso_string().into(),
        kind: "contact_form".to_string(),
    });
}

fn fire_gtag_event() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(gtag) = Reflect::get(&window, &JsValue::from_str("gtag")) else {
        return;
    };
    let Some(gtag) = gtag.dyn_ref::<Function>() else {
        return;
    };

    let params = Object::new();
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("event_category"),
        &JsValue::from_str("contact"),
    );
    let _ = Reflect::set(
        &params,
        &JsValue::from_str("event_label"),
        &JsValue::from_str("contact_form"),
    );
    let _ = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str("form_submit"),
        &params,
    );
}
