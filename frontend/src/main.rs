//! Browser admin panel for the Turntable query scheduler.

mod api;
mod components;
mod config;
pub mod hooks;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod surface;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
