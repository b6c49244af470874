//! Sliding sheet used for every dialog of the board.
//!
//! The sheet stays mounted; `open_top_sheet` / `close_top_sheet` toggle its
//! `show` class a tick later so the CSS transition in `index.html` runs.

use uuid::Uuid;
use web_sys::js_sys;
use yew::{html, Callback, Component, Context, Html, MouseEvent, NodeRef, Properties};

pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    /// Fired when the dimmed backdrop around the sheet is clicked.
    #[prop_or_default]
    pub on_dismiss: Option<Callback<()>>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_backdrop = ctx.props().on_dismiss.clone().map(|on_dismiss| {
            Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
        });

        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                <div class="top-sheet-backdrop" onclick={on_backdrop} />
                <div class="top-sheet-body">
                    { ctx.props().children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show(top_sheet_ref, "add");
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    toggle_show(top_sheet_ref, "remove");
}

fn toggle_show(top_sheet_ref: NodeRef, action: &str) {
    let Some(top_sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() else {
        return;
    };
    let func = js_sys::Function::new_no_args(&format!(
        "document.querySelector('#{}').classList.{}('show')",
        top_sheet.id(),
        action
    ));
    if let Some(window) = web_sys::window() {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&func, 50);
    }
}
