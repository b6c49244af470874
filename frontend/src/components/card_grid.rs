use yew::{html, Children, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct CardGridProps {
    /// Narrowest a column may get before the grid wraps to fewer columns.
    #[prop_or(280)]
    pub min_column_px: u32,
    pub children: Children,
}

/// Responsive grid laying out ad cards in rows, in the order they are given.
pub struct CardGrid;

impl Component for CardGrid {
    type Message = ();
    type Properties = CardGridProps;

    fn create(_ctx: &Context<Self>) -> Self {
        CardGrid
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let style = format!(
            "display: grid;
             grid-template-columns: repeat(auto-fill, minmax({}px, 1fr));
             gap: 16px;
             width: 100%;
             max-width: 1200px;
             margin: auto;",
            props.min_column_px
        );

        html! {
            <div class="card-grid" style={style}>
                { for props.children.iter() }
            </div>
        }
    }
}
