use crate::app::App;

mod app;
mod components;
mod tops_sheet;
mod upload;

fn main() {
    yew::Renderer::<App>::new().render();
}
