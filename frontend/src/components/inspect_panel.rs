use yew::prelude::*;

use crate::components::loading_spinner::{LoadingSpinner, SpinnerSize};

/// Props for [`InspectPanel`].
#[derive(Properties, PartialEq)]
pub struct InspectPanelProps {
    /// Database of the last test run.
    pub db: AttrValue,
    /// Query of the last test run.
    pub query: AttrValue,
    /// Text returned by the last successful run.
    pub results: AttrValue,
    /// A test run is in flight.
    #[prop_or(false)]
    pub pending: bool,
}

/// Shows what was last test-run and what came back.
#[function_component(InspectPanel)]
pub fn inspect_panel(props: &InspectPanelProps) -> Html {
    html! {
        <section id="inspect" class={classes!("inspect-panel", "space-y-2")}>
            <header class="flex items-center gap-2">
                <h3 class="font-semibold">{"Inspect"}</h3>
                if props.pending {
                    <LoadingSpinner size={SpinnerSize::Small} />
                }
            </header>
            <dl class="grid grid-cols-[auto_1fr] gap-x-3 text-sm">
                <dt>{"db"}</dt>
                <dd id="inspect-db">{ props.db.clone() }</dd>
                <dt>{"query"}</dt>
                <dd id="inspect-query"><code>{ props.query.clone() }</code></dd>
            </dl>
            // Rendered as text, never as markup.
            <pre id="inspect-results" class="whitespace-pre-wrap">{ props.results.clone() }</pre>
        </section>
    }
}
