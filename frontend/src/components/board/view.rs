//! View rendering for the ad board: header, ranked card grid or empty state,
//! and the two dialogs.

use super::dialogs::ad_form::ad_form_dialog;
use super::dialogs::video::video_dialog;
use super::messages::Msg;
use super::state::AdBoard;
use crate::components::ad_card::AdCard;
use crate::components::card_grid::CardGrid;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(board: &AdBoard, ctx: &Context<AdBoard>) -> Html {
    let link = ctx.link();

    html! {
        <div class="ad-board">
            { build_header(board, link) }
            { build_body(board, link) }
            { ad_form_dialog(board, link) }
            { video_dialog(board, link) }
        </div>
    }
}

fn build_header(board: &AdBoard, link: &Scope<AdBoard>) -> Html {
    html! {
        <header class="board-header">
            <h1>{"Ad Board"}</h1>
            <span class="board-count">{ format!("{} ads", board.ads.len()) }</span>
            <button class="primary-btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                <i class="material-icons">{"add"}</i>
                {"New ad"}
            </button>
        </header>
    }
}

fn build_body(board: &AdBoard, link: &Scope<AdBoard>) -> Html {
    if board.loading {
        return html! { <div class="board-loading">{"Loading ads…"}</div> };
    }

    if board.ads.is_empty() {
        return html! {
            <div class="board-empty">
                <p>{"No ads yet."}</p>
                <button class="primary-btn" onclick={link.callback(|_| Msg::OpenCreate)}>
                    {"Create the first ad"}
                </button>
            </div>
        };
    }

    let on_click = link.callback(Msg::Click);
    let on_edit = link.callback(Msg::OpenEdit);
    let on_copy = link.callback(Msg::OpenCopy);
    let on_delete = link.callback(Msg::Delete);

    html! {
        <CardGrid>
            {
                for board.ads.iter().enumerate().map(|(index, ad)| html! {
                    <AdCard
                        key={ad.id.clone()}
                        ad={ad.clone()}
                        rank={index + 1}
                        on_click={on_click.clone()}
                        on_edit={on_edit.clone()}
                        on_copy={on_copy.clone()}
                        on_delete={on_delete.clone()}
                    />
                })
            }
        </CardGrid>
    }
}
