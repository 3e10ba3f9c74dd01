use yew::prelude::*;

/// Spinner diameter.
#[derive(Clone, PartialEq)]
pub enum SpinnerSize {
    /// Inline next to text.
    Small,
    /// Inside a panel.
    Medium,
}

impl SpinnerSize {
    fn dimension(&self) -> u32 {
        match self {
            SpinnerSize::Small => 16,
            SpinnerSize::Medium => 32,
        }
    }
}

/// Props for [`LoadingSpinner`].
#[derive(Properties, PartialEq)]
pub struct LoadingSpinnerProps {
    /// Spinner diameter.
    #[prop_or(SpinnerSize::Medium)]
    pub size: SpinnerSize,
    /// Screen-reader text.
    #[prop_or(AttrValue::Static("Running..."))]
    pub label: AttrValue,
}

/// Busy indicator shown while a call is in flight.
#[function_component(LoadingSpinner)]
pub fn loading_spinner(props: &LoadingSpinnerProps) -> Html {
    let spinner_style = format!("--spinner-size:{}px;", props.size.dimension());

    html! {
        <span class={classes!("loading-spinner", "inline-flex", "items-center")} role="status" aria-busy="true">
            <span style={spinner_style} class="spinner-ring" />
            <span class="sr-only">{ props.label.clone() }</span>
        </span>
    }
}
