use log::info;
use yew::prelude::*;

mod config;
mod navigation;
mod theme;
mod components {
    pub mod header;
    pub mod reveal;
    pub mod scroll_progress;
    pub mod section_link;
    pub mod theme_toggle;
    pub mod toast;
}
mod pages {
    pub mod landing;
}
mod sections {
    pub mod contact;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod how_it_works;
    pub mod revolution;
    pub mod security;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting SoApp landing page");
    yew::Renderer::<App>::new().render();
}
