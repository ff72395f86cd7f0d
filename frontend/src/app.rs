//! Demo host acting as the owning form: it holds the article body, hands it
//! to the editor and shows the canonical HTML it gets back.

use editor_core::EditorConfig;
use yew::{html, Component, Context, Html};

use crate::components::rich_text::RichTextEditor;

const CONFIG_ELEMENT_ID: &str = "editor-config";

const SAMPLE_ARTICLE: &str = concat!(
    "<h2>Release notes</h2>",
    "<p>This build ships a <b>faster</b> indexer and a new <i>export</i> format.</p>",
    "<ul><li>Imports keep their folder structure</li><li>Exports include attachments</li></ul>",
    "<blockquote>Upgrade at your own pace; old exports still load.</blockquote>",
);

pub enum AppMsg {
    BodyChanged(String),
    LoadSample,
    Clear,
}

pub struct App {
    body: String,
    config: EditorConfig,
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            body: String::from("<p>Start writing…</p>"),
            config: load_editor_config(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AppMsg::BodyChanged(html) => self.body = html,
            AppMsg::LoadSample => self.body = SAMPLE_ARTICLE.to_string(),
            AppMsg::Clear => self.body.clear(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div class="app">
                <header class="app-header">
                    <button type="button" onclick={link.callback(|_| AppMsg::LoadSample)}>
                        { "Load sample article" }
                    </button>
                    <button type="button" onclick={link.callback(|_| AppMsg::Clear)}>
                        { "Clear" }
                    </button>
                </header>
                <RichTextEditor
                    value={self.body.clone()}
                    on_change={link.callback(AppMsg::BodyChanged)}
                    config={self.config.clone()}
                />
                <section class="canonical">
                    <h3>{ "Form value" }</h3>
                    <pre>{ self.body.clone() }</pre>
                </section>
            </div>
        }
    }
}

/// Reads the inline `<script type="application/json" id="editor-config">`
/// block, falling back to defaults.
fn load_editor_config() -> EditorConfig {
    let json = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|e| e.text_content());

    let Some(json) = json.filter(|j| !j.trim().is_empty()) else {
        gloo_console::log!("no editor configuration found, using defaults");
        return EditorConfig::default();
    };
    match EditorConfig::from_json(&json) {
        Ok(config) => config,
        Err(err) => {
            gloo_console::warn!(format!("{err}; using defaults"));
            EditorConfig::default()
        }
    }
}
