use neural_ir_explorer::config::ShellConfig;
use neural_ir_explorer::error::ShellError;
use wasm_bindgen::{JsCast, JsValue};

use crate::ui_model::CONFIG_ELEMENT_ID;

pub(super) fn console_log(msg: &str) {
    web_sys::console::log_1(&JsValue::from_str(msg));
}

pub(super) fn console_error(msg: &str) {
    web_sys::console::error_1(&JsValue::from_str(msg));
}

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Page config from `<script id="nirx-config" type="application/json">`, or defaults.
pub(super) fn read_config() -> ShellConfig {
    let text = document()
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match text {
        Some(t) if !t.trim().is_empty() => match ShellConfig::from_json_str(&t) {
            Ok(cfg) => cfg,
            Err(e) => {
                console_error(&format!("invalid #{CONFIG_ELEMENT_ID} config: {e}"));
                ShellConfig::default()
            }
        },
        _ => ShellConfig::default(),
    }
}

pub(super) fn mount_element(selector: &str) -> Result<web_sys::HtmlElement, ShellError> {
    document()
        .and_then(|d| d.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        .ok_or_else(|| ShellError::MountPointMissing(selector.to_string()))
}
