mod api;
mod app;
mod components;
mod config;
mod containers;
mod language;
mod models;
mod pages;
mod routes;

use app::App;
use config::FrontendConfig;
use i18nrs::yew::I18nProvider;
use wasm_bindgen::JsValue;
use yew::{Html, Renderer, function_component, html};

#[function_component(InternationalApp)]
fn international_app() -> Html {
    let config = language::provider_config();

    html! {
        <I18nProvider ..config>
            <App />
        </I18nProvider>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let config = FrontendConfig::new();
    if let Some(level) = config.console_level()
        && let Err(err) = console_log::init_with_level(level)
    {
        web_sys::console::error_1(&JsValue::from_str(&format!(
            "unable to initialise logging: {err}"
        )));
    }

    log::info!("Starting Fine Tune English client");

    match web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
    {
        Some(body) => {
            Renderer::<InternationalApp>::with_root(body.into()).render();
        }
        None => log::error!("no document body to mount the application on"),
    }
}
