use yew::prelude::*;

pub mod config;
pub mod controller;
pub mod models;
pub mod theme;
pub mod trial;
pub mod components {
    pub mod paywall;
    pub mod pill_group;
}
pub mod pages {
    pub mod landing;
}
pub mod utils {
    pub mod api;
}

use pages::landing::Landing;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <Landing variant={config::get_variant()} />
    }
}
