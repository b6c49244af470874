//! Update function for the ad board.
//!
//! Elm-style: receives the current `AdBoard`, the `Context` and a `Msg`, mutates
//! the state, spawns the API calls the message asks for and returns whether
//! the view must re-render.

use common::ranking::sort_by_score;
use common::validation::{validate_fields, Completeness};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::{build_form_data, confirm, open_landing, random_index, show_toast, ToastKind};
use super::messages::Msg;
use super::state::{AdBoard, Editor, EditorMode, Playback};

pub fn update(board: &mut AdBoard, ctx: &Context<AdBoard>, msg: Msg) -> bool {
    match msg {
        Msg::LoadAds => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_ads().await {
                    Ok(ads) => link.send_message(Msg::AdsLoaded(ads)),
                    Err(e) => link.send_message(Msg::LoadFailed(e.describe())),
                }
            });
            false
        }
        Msg::AdsLoaded(ads) => {
            board.ads = ads;
            board.loading = false;
            true
        }
        Msg::FormConfigLoaded(config) => {
            board.form_config = config;
            true
        }
        Msg::LoadFailed(message) => {
            board.loading = false;
            show_toast(&format!("Could not load ads: {}", message), ToastKind::Error);
            true
        }
        Msg::OpenCreate => open_editor(board, Editor::new(EditorMode::Create, Default::default())),
        Msg::OpenCopy(id) => {
            let Some(ad) = board.find(&id).cloned() else {
                return false;
            };
            let editor = Editor::from_ad(EditorMode::Copy, &ad, &board.form_config);
            open_editor(board, editor)
        }
        Msg::OpenEdit(id) => {
            let Some(ad) = board.find(&id).cloned() else {
                return false;
            };
            let editor = Editor::from_ad(EditorMode::Edit(id), &ad, &board.form_config);
            open_editor(board, editor)
        }
        Msg::CloseEditor => {
            board.editor = None;
            close_top_sheet(board.editor_ref.clone());
            true
        }
        Msg::SetField(field, value) => {
            if let Some(editor) = &mut board.editor {
                editor.errors.retain(|e| e.field != field);
                editor.values.insert(field, value);
            }
            true
        }
        Msg::SetFiles(files) => {
            if let Some(editor) = &mut board.editor {
                editor.files = files;
            }
            true
        }
        Msg::SetReplaceVideos(replace) => {
            if let Some(editor) = &mut board.editor {
                editor.replace_videos = replace;
            }
            true
        }
        Msg::Submit => {
            let Some(editor) = &mut board.editor else {
                return false;
            };
            if editor.submitting {
                return false;
            }

            editor.errors = validate_fields(&board.form_config, &editor.values, Completeness::AllRequired);
            if !editor.errors.is_empty() {
                show_toast("Please fix the highlighted fields.", ToastKind::Error);
                return true;
            }

            let form = match build_form_data(&board.form_config, editor) {
                Ok(form) => form,
                Err(e) => {
                    gloo_console::error!("Could not build form data", e);
                    show_toast("Could not prepare the upload.", ToastKind::Error);
                    return true;
                }
            };

            editor.submitting = true;
            let mode = editor.mode.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = match mode {
                    EditorMode::Edit(id) => api::update_ad(&id, form).await,
                    EditorMode::Create | EditorMode::Copy => api::create_ad(form).await,
                };
                match result {
                    Ok(ad) => link.send_message(Msg::SubmitSucceeded(ad)),
                    Err(e) => link.send_message(Msg::SubmitFailed(e)),
                }
            });
            true
        }
        Msg::SubmitSucceeded(ad) => {
            let edited = matches!(
                board.editor.as_ref().map(|e| &e.mode),
                Some(EditorMode::Edit(_))
            );
            let message = if edited { "Ad updated." } else { "Ad created." };
            show_toast(&format!("{} {}", message, ad.title), ToastKind::Success);

            board.editor = None;
            close_top_sheet(board.editor_ref.clone());
            ctx.link().send_message(Msg::LoadAds);
            true
        }
        Msg::SubmitFailed(error) => {
            show_toast(&error.describe(), ToastKind::Error);
            if let Some(editor) = &mut board.editor {
                editor.submitting = false;
                editor.errors = error.details;
            }
            true
        }
        Msg::Delete(id) => {
            let Some(ad) = board.find(&id) else {
                return false;
            };
            if !confirm(&format!("Delete the ad \"{}\"?", ad.title)) {
                return false;
            }
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::delete_ad(&id).await {
                    Ok(()) => link.send_message(Msg::Deleted(id)),
                    Err(e) => show_toast(&format!("Delete failed: {}", e.describe()), ToastKind::Error),
                }
            });
            false
        }
        Msg::Deleted(id) => {
            board.ads.retain(|ad| ad.id != id);
            show_toast("Ad deleted.", ToastKind::Success);
            ctx.link().send_message(Msg::LoadAds);
            true
        }
        Msg::Click(id) => {
            let Some(ad) = board.find(&id).cloned() else {
                return false;
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::record_click(&id).await {
                    Ok(clicks) => link.send_message(Msg::Clicked { id, clicks }),
                    Err(e) => gloo_console::error!(format!("Could not record click on {}: {}", id, e.describe())),
                }
            });

            // Opened while still handling the user's click so popup blockers allow it.
            if ad.has_videos() {
                let video_url = ad.video_urls[random_index(ad.video_urls.len())].clone();
                board.playback = Some(Playback {
                    title: ad.title,
                    video_url,
                    landing_url: ad.landing_url,
                });
                open_top_sheet(board.player_ref.clone());
                true
            } else {
                open_landing(&ad.landing_url);
                false
            }
        }
        Msg::Clicked { id, clicks } => {
            if let Some(ad) = board.ads.iter_mut().find(|ad| ad.id == id) {
                ad.clicks = ad.clicks.max(clicks);
            }
            sort_by_score(&mut board.ads);
            true
        }
        Msg::VideoEnded => {
            if let Some(playback) = board.playback.take() {
                open_landing(&playback.landing_url);
            }
            close_top_sheet(board.player_ref.clone());
            true
        }
        Msg::ClosePlayer => {
            board.playback = None;
            close_top_sheet(board.player_ref.clone());
            true
        }
    }
}

fn open_editor(board: &mut AdBoard, editor: Editor) -> bool {
    if board.form_config.is_empty() {
        show_toast("The form is still loading, try again in a moment.", ToastKind::Error);
        return false;
    }
    board.editor = Some(editor);
    open_top_sheet(board.editor_ref.clone());
    true
}
