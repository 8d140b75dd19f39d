use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod collection;
mod config;
mod hooks;
mod components {
    pub mod about;
    pub mod animated_title;
    pub mod bento;
    pub mod button;
    pub mod contact;
    pub mod features;
    pub mod footer;
    pub mod hero;
    pub mod intelligence;
    pub mod navbar;
    pub mod nexus;
    pub mod notice;
    pub mod particles;
    pub mod prologue;
    pub mod story;
    pub mod vault;
}
mod pages {
    pub mod landing;
    pub mod privacy;
}

use components::navbar::Nav;
use pages::{
    landing::Landing,
    privacy::{NotFound, PrivacyPolicy},
};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Landing page");
            html! { <Landing /> }
        }
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting {}", config::site_name());
    yew::Renderer::<App>::new().render();
}
