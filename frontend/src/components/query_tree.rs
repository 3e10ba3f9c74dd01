use std::collections::HashSet;

use turntable_shared::{group_by_namespace, SavedQuery};
use yew::prelude::*;

/// Props for [`QueryTree`].
#[derive(Properties, PartialEq)]
pub struct QueryTreeProps {
    /// Saved queries, in service order.
    pub entries: Vec<SavedQuery>,
    /// Fill the form from an entry.
    pub on_select: Callback<SavedQuery>,
    /// Test-run an entry against its own db.
    pub on_test: Callback<SavedQuery>,
    /// Delete an entry by name.
    pub on_remove: Callback<String>,
    /// A test run is in flight.
    #[prop_or(false)]
    pub test_disabled: bool,
    /// A removal is in flight.
    #[prop_or(false)]
    pub remove_disabled: bool,
}

/// Navigable list of saved queries, grouped by the name prefix before `:`.
#[function_component(QueryTree)]
pub fn query_tree(props: &QueryTreeProps) -> Html {
    let collapsed = use_state(HashSet::<String>::new);

    if props.entries.is_empty() {
        return html! {
            <div id="query-tree" class="query-tree text-sm text-[var(--muted)]">{"No saved queries"}</div>
        };
    }

    let groups = group_by_namespace(&props.entries);

    html! {
        <nav id="query-tree" class="query-tree text-sm">
            { for groups.into_iter().map(|(namespace, members)| {
                let is_collapsed = collapsed.contains(&namespace);
                let toggle = {
                    let collapsed = collapsed.clone();
                    let namespace = namespace.clone();
                    Callback::from(move |_: MouseEvent| {
                        let mut next = (*collapsed).clone();
                        if !next.remove(&namespace) {
                            next.insert(namespace.clone());
                        }
                        collapsed.set(next);
                    })
                };
                let label = if namespace.is_empty() { "(no prefix)".to_string() } else { namespace.clone() };

                html! {
                    <div class="query-tree-group" key={namespace.clone()}>
                        <button type="button" class="query-tree-toggle font-semibold" onclick={toggle}>
                            { if is_collapsed { "▸ " } else { "▾ " } }{ label }
                        </button>
                        if !is_collapsed {
                            <ul class="ml-4">
                                { for members.into_iter().map(|entry| tree_entry(props, entry)) }
                            </ul>
                        }
                    </div>
                }
            }) }
        </nav>
    }
}

fn tree_entry(props: &QueryTreeProps, entry: SavedQuery) -> Html {
    let name = entry.name().to_string();
    let onselect = {
        let on_select = props.on_select.clone();
        let entry = entry.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(entry.clone()))
    };
    let ontest = {
        let on_test = props.on_test.clone();
        let entry = entry.clone();
        Callback::from(move |_: MouseEvent| on_test.emit(entry.clone()))
    };
    let onremove = {
        let on_remove = props.on_remove.clone();
        let name = name.clone();
        Callback::from(move |_: MouseEvent| on_remove.emit(name.clone()))
    };

    html! {
        <li class="query-tree-entry flex items-center gap-2" key={name.clone()}>
            <button type="button" class="query-tree-name" title={entry.query.clone()} onclick={onselect}>
                { name }
            </button>
            <span class="text-xs text-[var(--muted)]">{ entry.opts.db.clone() }</span>
            <button type="button" class="query-tree-test" disabled={props.test_disabled} onclick={ontest}>
                {"test"}
            </button>
            <button type="button" class="query-tree-remove" disabled={props.remove_disabled} onclick={onremove}>
                {"remove"}
            </button>
        </li>
    }
}
