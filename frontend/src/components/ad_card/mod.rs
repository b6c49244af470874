//! One ad rendered as a clickable card.
//!
//! Clicking the card body reports a click; the Edit / Copy / Delete buttons
//! stop propagation so they never count as one.

use common::model::ad::Ad;
use num_format::{Locale, ToFormattedString};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AdCardProps {
    pub ad: Ad,
    /// Position in the ranked list, starting at 1.
    pub rank: usize,
    pub on_click: Callback<String>,
    pub on_edit: Callback<String>,
    pub on_copy: Callback<String>,
    pub on_delete: Callback<String>,
}

pub struct AdCard;

impl Component for AdCard {
    type Message = ();
    type Properties = AdCardProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AdCard
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let ad = &props.ad;

        let on_card_click = {
            let on_click = props.on_click.clone();
            let id = ad.id.clone();
            Callback::from(move |_: MouseEvent| on_click.emit(id.clone()))
        };

        html! {
            <div class="ad-card" onclick={on_card_click} title={ad.landing_url.clone()}>
                <div class="ad-card-header">
                    <span class="ad-rank">{ format!("#{}", props.rank) }</span>
                    <h3 class="ad-title">{ ad.title.clone() }</h3>
                    {
                        if ad.has_videos() {
                            html! {
                                <i class="material-icons ad-video-badge" title={format!("{} videos", ad.video_urls.len())}>
                                    {"movie"}
                                </i>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
                <div class="ad-publisher">{ ad.publisher.clone() }</div>
                <p class="ad-content">{ ad.content.clone() }</p>
                <div class="ad-stats">
                    <span class="ad-price">{ format!("Bid {:.2}", ad.price) }</span>
                    <span class="ad-heat">
                        <i class="material-icons">{"local_fire_department"}</i>
                        { ad.clicks.to_formatted_string(&Locale::en) }
                    </span>
                </div>
                <div class="ad-actions">
                    { action_button("edit", "Edit", &props.on_edit, &ad.id) }
                    { action_button("content_copy", "Copy", &props.on_copy, &ad.id) }
                    { action_button("delete", "Delete", &props.on_delete, &ad.id) }
                </div>
            </div>
        }
    }
}

fn action_button(icon: &str, label: &str, callback: &Callback<String>, id: &str) -> Html {
    let callback = callback.clone();
    let id = id.to_string();
    let onclick = Callback::from(move |e: MouseEvent| {
        e.stop_propagation();
        callback.emit(id.clone());
    });

    html! {
        <button class="icon-btn" {onclick}>
            <i class="material-icons">{ icon.to_string() }</i>
            <span class="icon-label">{ label.to_string() }</span>
        </button>
    }
}
