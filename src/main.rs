use std::rc::Rc;

use log::info;
use yew::prelude::*;

mod config;
mod content;
mod state;
mod subscription;
mod components {
    pub mod button;
    pub mod header;
    pub mod icon;
    pub mod reveal;
}
mod pages {
    pub mod landing;
    pub mod sections;
    pub mod styles;
}

use content::{ContentError, SiteContent};
use pages::landing::Landing;

#[derive(Properties, PartialEq)]
struct AppProps {
    content: Option<Rc<SiteContent>>,
}

#[function_component]
fn App(props: &AppProps) -> Html {
    match &props.content {
        Some(content) => html! { <Landing content={content.clone()} /> },
        None => html! {
            <main class="content-unavailable">
                <p>{"This page is temporarily unavailable. Please try again later."}</p>
            </main>
        },
    }
}

#[cfg(debug_assertions)]
fn report_content_error(err: &ContentError) {
    // Broken copy should never make it past a local build.
    panic!("{err}");
}

#[cfg(not(debug_assertions))]
fn report_content_error(err: &ContentError) {
    log::error!("{err}");
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Zeraatech site");
    let content = match SiteContent::load() {
        Ok(content) => {
            info!("Loaded site content for {}", content.brand.name);
            Some(Rc::new(content))
        }
        Err(err) => {
            report_content_error(&err);
            None
        }
    };

    yew::Renderer::<App>::with_props(AppProps { content }).render();
}
