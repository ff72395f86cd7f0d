use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

/// Sheet sliding down from the top of the viewport. Hidden until
/// [`open_top_sheet`] adds the `show` class.
pub struct TopSheet {
    pub title_id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    pub title: String,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            title_id: format!("sheet-title-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        html! {
            <div
                class="top-sheet"
                role="dialog"
                aria-labelledby={self.title_id.clone()}
                ref={props.node_ref.clone()}
            >
                <h3 class="top-sheet-title" id={self.title_id.clone()}>{ props.title.clone() }</h3>
                { props.children.clone() }
            </div>
        }
    }
}

// The delay lets a sheet rendered in the same update reach the DOM first.
const TRANSITION_DELAY_MS: u32 = 50;

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    Timeout::new(TRANSITION_DELAY_MS, move || {
        if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            sheet.class_list().add_1("show").ok();
        }
    })
    .forget();
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    Timeout::new(TRANSITION_DELAY_MS, move || {
        if let Some(sheet) = top_sheet_ref.cast::<web_sys::HtmlElement>() {
            sheet.class_list().remove_1("show").ok();
        }
    })
    .forget();
}
