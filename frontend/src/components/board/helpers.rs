//! Browser-side utilities for the ad board.
//!
//! - **User Feedback**: temporary toast notifications and confirmation prompts.
//! - **Navigation**: opening an ad's landing page in a new tab.
//! - **Submission**: turning the editor state into a multipart `FormData`.

use super::state::{Editor, EditorMode};
use common::model::form_config::FormFieldConfig;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, HtmlElement};

/// Multipart field telling the server to replace the video list on update.
const REPLACE_VIDEOS_FIELD: &str = "replaceVideos";

#[derive(Clone, Copy, PartialEq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Displays a notification at the bottom of the screen for three seconds.
pub fn show_toast(message: &str, kind: ToastKind) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    let html_toast: HtmlElement = toast.unchecked_into();
    let style = html_toast.style();
    let background = match kind {
        ToastKind::Success => "rgba(46, 125, 50, 0.92)",
        ToastKind::Error => "rgba(198, 40, 40, 0.92)",
    };
    style.set_property("position", "fixed").ok();
    style.set_property("bottom", "20px").ok();
    style.set_property("left", "50%").ok();
    style.set_property("transform", "translateX(-50%)").ok();
    style.set_property("background", background).ok();
    style.set_property("color", "#fff").ok();
    style.set_property("padding", "10px 20px").ok();
    style.set_property("border-radius", "4px").ok();
    style.set_property("z-index", "10000").ok();
    style.set_property("font-family", "Arial, sans-serif").ok();

    if body.append_child(&html_toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(3000).await;
            if let Some(parent) = html_toast.parent_node() {
                parent.remove_child(&html_toast).ok();
            }
        });
    }
}

/// Native confirmation prompt. Anything but an explicit "OK" counts as no.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Opens `url` in a new tab. Outside a user gesture (a video ending) the popup
/// blocker returns no window, so the board itself navigates to the page instead.
pub fn open_landing(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    match window.open_with_url_and_target(url, "_blank") {
        Ok(Some(_)) => {}
        Ok(None) => {
            if window.location().set_href(url).is_err() {
                gloo_console::error!(format!("Could not navigate to landing page {}", url));
            }
        }
        Err(_) => gloo_console::error!(format!("Could not open landing page {}", url)),
    }
}

/// Uniformly picks an index below `len`. `len` must not be zero.
pub fn random_index(len: usize) -> usize {
    let index = (js_sys::Math::random() * len as f64).floor() as usize;
    index.min(len.saturating_sub(1))
}

/// Builds the multipart body for the editor: every text field of `config`,
/// the picked files under the upload field name, and `replaceVideos` on edits.
pub fn build_form_data(config: &[FormFieldConfig], editor: &Editor) -> Result<FormData, JsValue> {
    let form = FormData::new()?;
    for field in config {
        if field.is_file() {
            for file in &editor.files {
                form.append_with_blob_and_filename(field.field(), file, &file.name())?;
            }
        } else {
            form.append_with_str(field.field(), editor.value(field.field()).trim())?;
        }
    }
    if matches!(editor.mode, EditorMode::Edit(_)) && editor.replace_videos {
        form.append_with_str(REPLACE_VIDEOS_FIELD, "true")?;
    }
    Ok(form)
}
