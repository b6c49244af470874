//! Ad board: root component wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, dialogs and helpers.
//!
//! On first render the board fetches the ranked ads and the form
//! configuration in parallel.

use yew::platform::spawn_local;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
pub mod state;
mod update;
mod view;

use helpers::{show_toast, ToastKind};
pub use messages::Msg;
pub use state::AdBoard;

impl Component for AdBoard {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        AdBoard::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::LoadAds);

            let link = ctx.link().clone();
            spawn_local(async move {
                match crate::api::fetch_form_config().await {
                    Ok(config) => link.send_message(Msg::FormConfigLoaded(config)),
                    Err(e) => show_toast(
                        &format!("Could not load the ad form: {}", e.describe()),
                        ToastKind::Error,
                    ),
                }
            });
        }
    }
}
