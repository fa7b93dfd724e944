use yew::prelude::*;
use yew_router::prelude::*;
use log::info;

mod config;
mod models;
mod catalog;
mod session;
mod gate;
mod presenter;
mod notifier;
mod timer;
mod hooks;
mod browser;

mod components {
    pub mod header;
    pub mod hero;
    pub mod category_cards;
    pub mod instruction_text;
    pub mod content_grid;
    pub mod code_modal;
    pub mod toast;
    pub mod footer_cta;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}

use pages::{
    landing::Landing,
    not_found::NotFound,
};


#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        },
        Route::NotFound => {
            info!("Rendering not found page");
            html! { <NotFound /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting beautyX landing page");
    yew::Renderer::<App>::new().render();
}
