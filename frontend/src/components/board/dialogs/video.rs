use crate::components::board::{AdBoard, Msg};
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;
use yew::html::Scope;
use yew::prelude::*;

/// Plays the chosen video; the landing page opens when it ends.
pub fn video_dialog(board: &AdBoard, link: &Scope<AdBoard>) -> Html {
    let on_dismiss = link.callback(|_: ()| Msg::ClosePlayer);

    html! {
        <YwMaterialTopSheet node_ref={board.player_ref.clone()} on_dismiss={on_dismiss}>
            <div class="dialog video-dialog">
                <div class="dialog-header">
                    <h2>{ board.playback.as_ref().map(|p| p.title.clone()).unwrap_or_default() }</h2>
                    <button class="icon-btn" onclick={link.callback(|_| Msg::ClosePlayer)}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
                {
                    match &board.playback {
                        Some(playback) => html! {
                            <video
                                key={playback.video_url.clone()}
                                src={playback.video_url.clone()}
                                autoplay=true
                                controls=true
                                style="width: 100%;"
                                onended={link.callback(|_: Event| Msg::VideoEnded)}
                            />
                        },
                        None => html! {},
                    }
                }
            </div>
        </YwMaterialTopSheet>
    }
}
