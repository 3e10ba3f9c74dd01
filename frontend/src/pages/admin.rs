use std::rc::Rc;

use turntable_shared::{AdminError, ControlId, FormBridge, PlaceholderField, QuerySpec, SavedQuery};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api::AdminApi,
    components::{error_banner::ErrorBanner, inspect_panel::InspectPanel, query_tree::QueryTree},
    config::DB_OPTION,
    hooks::use_placeholder,
    surface::{use_panel_surface, PanelSurface},
};

/// The db a submit uses: the selected one, or the first choice while the
/// selector has not been touched.
fn effective_db(selected: &str, choices: &[String]) -> String {
    if selected.is_empty() {
        choices.first().cloned().unwrap_or_default()
    } else {
        selected.to_string()
    }
}

fn report(load_error: &UseStateHandle<Option<String>>, context: &str, err: AdminError) {
    // A click on a pending control is dropped silently.
    if matches!(err, AdminError::ControlBusy(_)) {
        return;
    }
    let message = format!("{}: {}", context, err);
    web_sys::console::error_1(&message.clone().into());
    load_error.set(Some(message));
}

/// Turntable admin panel: edit, test and schedule queries.
#[function_component(QueryAdminPage)]
pub fn query_admin_page() -> Html {
    let surface = use_panel_surface();
    let db = use_state(String::new);
    let load_error = use_state(|| None::<String>);

    let bridge = {
        let surface = surface.clone();
        use_memo((), move |_| {
            FormBridge::<PanelSurface>::new(Rc::new(AdminApi::new()), surface)
        })
    };

    let (name_placeholder, name_onfocus, name_onblur) = use_placeholder(PlaceholderField::Name);
    let (period_placeholder, period_onfocus, period_onblur) =
        use_placeholder(PlaceholderField::Period);

    {
        let bridge = bridge.clone();
        let load_error = load_error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = bridge.load_options(DB_OPTION).await {
                    report(&load_error, "Failed to load databases", err);
                }
                if let Err(err) = bridge.load_saved_queries().await {
                    report(&load_error, "Failed to load saved queries", err);
                }
            });
            || ()
        });
    }

    let on_name_input = {
        let name = surface.name.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            name.set(input.value());
        })
    };
    let on_query_input = {
        let query = surface.query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };
    let on_period_input = {
        let period = surface.period.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            period.set(input.value());
        })
    };
    let on_db_change = {
        let db = db.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            db.set(select.value());
        })
    };

    let selected_db = effective_db(&db, &surface.db_choices);

    let on_add = {
        let bridge = bridge.clone();
        let load_error = load_error.clone();
        let spec = QuerySpec {
            name: (*surface.name).clone(),
            query: (*surface.query).clone(),
            db: selected_db.clone(),
            period: (*surface.period).clone(),
        };
        Callback::from(move |_: MouseEvent| {
            // Disable synchronously so a second click in the same tick is refused.
            if let Err(err) = bridge.press(ControlId::Add) {
                report(&load_error, "Failed to add query", err);
                return;
            }
            let bridge = bridge.clone();
            let load_error = load_error.clone();
            let spec = spec.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = bridge.submit_new_query(spec).await {
                    report(&load_error, "Failed to add query", err);
                }
            });
        })
    };

    let on_test = {
        let bridge = bridge.clone();
        let load_error = load_error.clone();
        let db = selected_db.clone();
        let query = (*surface.query).clone();
        Callback::from(move |_: MouseEvent| {
            let bridge = bridge.clone();
            let load_error = load_error.clone();
            let db = db.clone();
            let query = query.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = bridge.run_inspection(&db, &query).await {
                    report(&load_error, "Test run failed", err);
                }
            });
        })
    };

    let on_tree_select = {
        let bridge = bridge.clone();
        Callback::from(move |entry: SavedQuery| bridge.select_existing_query(&entry))
    };

    let on_tree_test = {
        let bridge = bridge.clone();
        let load_error = load_error.clone();
        Callback::from(move |entry: SavedQuery| {
            let bridge = bridge.clone();
            let load_error = load_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = bridge.test_saved_query(&entry).await {
                    report(&load_error, "Test run failed", err);
                }
            });
        })
    };

    let on_tree_remove = {
        let bridge = bridge.clone();
        let load_error = load_error.clone();
        Callback::from(move |name: String| {
            let bridge = bridge.clone();
            let load_error = load_error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                if let Err(err) = bridge.remove_saved_query(&name).await {
                    report(&load_error, &format!("Failed to remove {}", name), err);
                }
            });
        })
    };

    let on_error_close = {
        let load_error = load_error.clone();
        Callback::from(move |_: ()| load_error.set(None))
    };

    html! {
        <main class={classes!("turntable-admin", "grid", "gap-6", "p-6", "md:grid-cols-[16rem_1fr]")}>
            <aside>
                <h2 class="mb-2 font-semibold">{"Saved queries"}</h2>
                <QueryTree
                    entries={(*surface.saved_queries).clone()}
                    on_select={on_tree_select}
                    on_test={on_tree_test}
                    on_remove={on_tree_remove}
                    test_disabled={*surface.test_disabled}
                    remove_disabled={*surface.remove_disabled}
                />
            </aside>
            <section class="space-y-4">
                if let Some(message) = (*load_error).clone() {
                    <ErrorBanner message={message} on_close={on_error_close} />
                }
                <form class="grid gap-3" onsubmit={Callback::from(|e: SubmitEvent| e.prevent_default())}>
                    <input
                        id="name"
                        type="text"
                        value={(*surface.name).clone()}
                        placeholder={name_placeholder}
                        oninput={on_name_input}
                        onfocus={name_onfocus}
                        onblur={name_onblur}
                    />
                    <textarea
                        id="query"
                        rows="8"
                        value={(*surface.query).clone()}
                        placeholder="query"
                        oninput={on_query_input}
                    />
                    <select id="db" onchange={on_db_change}>
                        { for surface.db_choices.iter().map(|choice| html! {
                            <option value={choice.clone()} selected={*choice == selected_db}>
                                { choice.clone() }
                            </option>
                        }) }
                    </select>
                    <input
                        id="period"
                        type="text"
                        value={(*surface.period).clone()}
                        placeholder={period_placeholder}
                        oninput={on_period_input}
                        onfocus={period_onfocus}
                        onblur={period_onblur}
                    />
                    <div class="flex gap-3">
                        <button id="add" type="button" disabled={*surface.add_disabled} onclick={on_add}>
                            {"add"}
                        </button>
                        <button id="test" type="button" disabled={*surface.test_disabled} onclick={on_test}>
                            {"test"}
                        </button>
                    </div>
                </form>
                <InspectPanel
                    db={(*surface.inspect_db).clone()}
                    query={(*surface.inspect_query).clone()}
                    results={(*surface.inspect_results).clone()}
                    pending={*surface.test_disabled}
                />
            </section>
        </main>
    }
}

