//! Small hooks shared by the panel's inputs.

use turntable_shared::{Focus, PlaceholderField};
use yew::prelude::*;

/// Placeholder of an input that shows a format hint while focused.
///
/// # Example
/// ```rust
/// use crate::hooks::use_placeholder;
/// use turntable_shared::PlaceholderField;
///
/// #[function_component(PeriodInput)]
/// fn period_input() -> Html {
///     let (placeholder, onfocus, onblur) = use_placeholder(PlaceholderField::Period);
///     html! { <input id="period" placeholder={placeholder} {onfocus} {onblur} /> }
/// }
/// ```
#[hook]
pub fn use_placeholder(
    field: PlaceholderField,
) -> (&'static str, Callback<FocusEvent>, Callback<FocusEvent>) {
    let focus = use_state(Focus::default);

    let onfocus = {
        let focus = focus.clone();
        Callback::from(move |_: FocusEvent| focus.set(Focus::Focused))
    };
    let onblur = {
        let focus = focus.clone();
        Callback::from(move |_: FocusEvent| focus.set(Focus::Blurred))
    };

    (field.placeholder(*focus), onfocus, onblur)
}
