use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages;

/// Panel routes.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    /// The admin panel.
    #[at("/")]
    Admin,

    /// Anything else.
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Admin => html! { <pages::QueryAdminPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

/// Router shell around every page.
#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                <header class="px-6 py-4 font-semibold">{"turntable"}</header>
                <div class="flex-1">
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
