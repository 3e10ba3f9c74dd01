use yew::prelude::*;
use yew_router::prelude::Link;

use crate::router::Route;

/// Fallback for unknown paths.
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="p-6">
            <h2>{"404 - Not found"}</h2>
            <p>
                {"Nothing lives here. "}
                <Link<Route> to={Route::Admin}>{"Back to the admin panel"}</Link<Route>>
            </p>
        </main>
    }
}
