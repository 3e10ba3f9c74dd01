use turntable_shared::{ControlId, EditableFields, FormSurface, SavedQuery};
use yew::prelude::*;

use crate::config::DB_OPTION;

/// Yew state behind the admin panel, written by the bridge.
///
/// The handles are captured once when the bridge is built; `set` on them
/// stays valid across renders.
#[derive(Clone, PartialEq)]
pub struct PanelSurface {
    pub add_disabled: UseStateHandle<bool>,
    pub test_disabled: UseStateHandle<bool>,
    pub remove_disabled: UseStateHandle<bool>,
    pub name: UseStateHandle<String>,
    pub query: UseStateHandle<String>,
    pub period: UseStateHandle<String>,
    pub inspect_db: UseStateHandle<String>,
    pub inspect_query: UseStateHandle<String>,
    pub inspect_results: UseStateHandle<String>,
    pub saved_queries: UseStateHandle<Vec<SavedQuery>>,
    pub db_choices: UseStateHandle<Vec<String>>,
}

impl PanelSurface {
    fn disabled_flag(&self, control: ControlId) -> &UseStateHandle<bool> {
        match control {
            ControlId::Add => &self.add_disabled,
            ControlId::Test => &self.test_disabled,
            ControlId::Remove => &self.remove_disabled,
        }
    }
}

impl FormSurface for PanelSurface {
    fn set_control_enabled(&self, control: ControlId, enabled: bool) {
        self.disabled_flag(control).set(!enabled);
    }

    fn set_fields(&self, fields: EditableFields) {
        self.name.set(fields.name);
        self.query.set(fields.query);
        self.period.set(fields.period);
    }

    fn show_inspection_target(&self, db: &str, query: &str) {
        self.inspect_db.set(db.to_string());
        self.inspect_query.set(query.to_string());
    }

    fn show_inspection_result(&self, result: String) {
        self.inspect_results.set(result);
    }

    fn set_saved_queries(&self, entries: Vec<SavedQuery>) {
        self.saved_queries.set(entries);
    }

    fn set_options(&self, option: &str, choices: Vec<String>) {
        if option == DB_OPTION {
            self.db_choices.set(choices);
        }
    }
}

/// Allocate the panel state.
#[hook]
pub fn use_panel_surface() -> PanelSurface {
    PanelSurface {
        add_disabled: use_state(|| false),
        test_disabled: use_state(|| false),
        remove_disabled: use_state(|| false),
        name: use_state(String::new),
        query: use_state(String::new),
        period: use_state(String::new),
        inspect_db: use_state(String::new),
        inspect_query: use_state(String::new),
        inspect_results: use_state(String::new),
        saved_queries: use_state(Vec::<SavedQuery>::new),
        db_choices: use_state(Vec::<String>::new),
    }
}
