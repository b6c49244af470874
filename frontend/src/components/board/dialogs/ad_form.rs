//! Create / copy / edit dialog. Inputs are rendered strictly from the form
//! configuration served by the backend.

use crate::components::board::state::{Editor, EditorMode};
use crate::components::board::{AdBoard, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use common::model::form_config::FormFieldConfig;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::html::Scope;
use yew::prelude::*;

pub fn ad_form_dialog(board: &AdBoard, link: &Scope<AdBoard>) -> Html {
    let on_dismiss = link.callback(|_: ()| Msg::CloseEditor);

    html! {
        <YwMaterialTopSheet node_ref={board.editor_ref.clone()} on_dismiss={on_dismiss}>
            {
                match &board.editor {
                    Some(editor) => build_form(board, editor, link),
                    None => html! {},
                }
            }
        </YwMaterialTopSheet>
    }
}

fn build_form(board: &AdBoard, editor: &Editor, link: &Scope<AdBoard>) -> Html {
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <form class="dialog ad-form" {onsubmit}>
            <div class="dialog-header">
                <h2>{ editor.title() }</h2>
                <button type="button" class="icon-btn" onclick={link.callback(|_| Msg::CloseEditor)}>
                    <i class="material-icons">{"close"}</i>
                </button>
            </div>
            { for board.form_config.iter().map(|field| form_row(field, editor, link)) }
            <div class="dialog-actions">
                <button type="button" class="secondary-btn" onclick={link.callback(|_| Msg::CloseEditor)}>
                    {"Cancel"}
                </button>
                <button type="submit" class="primary-btn" disabled={editor.submitting}>
                    { if editor.submitting { "Saving…" } else { "Save" } }
                </button>
            </div>
        </form>
    }
}

fn form_row(config: &FormFieldConfig, editor: &Editor, link: &Scope<AdBoard>) -> Html {
    let error = editor.error_for(config.field());

    html! {
        <div class={classes!("form-row", error.map(|_| "has-error"))}>
            <label>
                { config.label().to_string() }
                { if config.is_required() { html! { <span class="required">{" *"}</span> } } else { html! {} } }
            </label>
            { field_input(config, editor, link) }
            {
                match error {
                    Some(message) => html! { <div class="field-error">{ message.to_string() }</div> },
                    None => html! {},
                }
            }
        </div>
    }
}

fn field_input(config: &FormFieldConfig, editor: &Editor, link: &Scope<AdBoard>) -> Html {
    match config {
        FormFieldConfig::Input { field, props, .. } => {
            let name = field.clone();
            html! {
                <input
                    type="text"
                    value={editor.value(field)}
                    placeholder={props.placeholder.clone()}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::SetField(name.clone(), e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            }
        }
        FormFieldConfig::TextArea { field, props, .. } => {
            let name = field.clone();
            html! {
                <textarea
                    rows={props.rows.to_string()}
                    value={editor.value(field)}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::SetField(name.clone(), e.target_unchecked_into::<HtmlTextAreaElement>().value())
                    })}
                />
            }
        }
        FormFieldConfig::InputNumber { field, props, .. } => {
            let name = field.clone();
            html! {
                <input
                    type="number"
                    value={editor.value(field)}
                    min={props.min.map(|m| m.to_string())}
                    step={props.step.map(|s| s.to_string())}
                    oninput={link.callback(move |e: InputEvent| {
                        Msg::SetField(name.clone(), e.target_unchecked_into::<HtmlInputElement>().value())
                    })}
                />
            }
        }
        FormFieldConfig::Upload { props, .. } => html! {
            <>
                <input
                    type="file"
                    multiple={props.multiple}
                    accept={props.accept.clone()}
                    onchange={link.callback(|e: Event| {
                        let input = e.target_unchecked_into::<HtmlInputElement>();
                        let files = input
                            .files()
                            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
                            .unwrap_or_default();
                        Msg::SetFiles(files)
                    })}
                />
                { replace_toggle(editor, link) }
            </>
        },
    }
}

/// Shown on edits only: by default new videos are added to the existing ones.
fn replace_toggle(editor: &Editor, link: &Scope<AdBoard>) -> Html {
    if !matches!(editor.mode, EditorMode::Edit(_)) {
        return html! {};
    }
    html! {
        <label class="replace-videos">
            <input
                type="checkbox"
                checked={editor.replace_videos}
                onchange={link.callback(|e: Event| {
                    Msg::SetReplaceVideos(e.target_unchecked_into::<HtmlInputElement>().checked())
                })}
            />
            {"Replace current videos"}
        </label>
    }
}
