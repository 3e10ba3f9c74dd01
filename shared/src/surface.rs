//! The UI side of the bridge.

use crate::{control::ControlId, EditableFields, SavedQuery};

/// Everything [`FormBridge`](crate::FormBridge) writes back into the page.
///
/// Implementations only record or render; they never call the service.
pub trait FormSurface {
    /// Enable or disable a triggering control.
    fn set_control_enabled(&self, control: ControlId, enabled: bool);

    /// Overwrite the name, query and period inputs.
    fn set_fields(&self, fields: EditableFields);

    /// Show which db and query the inspection panel is about.
    fn show_inspection_target(&self, db: &str, query: &str);

    /// Replace the inspection results text.
    fn show_inspection_result(&self, result: String);

    /// Replace the saved-query tree.
    fn set_saved_queries(&self, entries: Vec<SavedQuery>);

    /// Replace the choices of one option selector.
    fn set_options(&self, option: &str, choices: Vec<String>);
}
