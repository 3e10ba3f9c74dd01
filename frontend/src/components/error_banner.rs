use yew::{prelude::*, use_effect_with};
use yew_hooks::prelude::use_timeout;

/// How long an auto-dismissing banner stays up.
const AUTO_DISMISS_MS: u32 = 5000;

/// Props for [`ErrorBanner`].
#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    /// Message to show; an empty message renders nothing.
    pub message: String,
    /// Called once when the banner is dismissed.
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
    /// Dismiss on a timer as well as on click.
    #[prop_or(true)]
    pub auto_dismiss: bool,
}

/// Alert for the last failed admin call.
///
/// A new message reopens a dismissed banner.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let is_open = use_state(|| true);

    let dismiss = {
        let is_open = is_open.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: ()| {
            if !*is_open {
                return;
            }
            is_open.set(false);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    let timeout = {
        let dismiss = dismiss.clone();
        use_timeout(move || dismiss.emit(()), if props.auto_dismiss { AUTO_DISMISS_MS } else { 0 })
    };

    {
        let is_open = is_open.clone();
        let timeout = timeout.clone();
        let auto_dismiss = props.auto_dismiss;
        use_effect_with(props.message.clone(), move |_| {
            is_open.set(true);
            if auto_dismiss {
                timeout.reset();
            } else {
                timeout.cancel();
            }
        });
    }

    if props.message.trim().is_empty() || !*is_open {
        return Html::default();
    }

    let onclick = Callback::from(move |_: MouseEvent| dismiss.emit(()));

    html! {
        <div
            class={classes!("error-banner", "flex", "items-start", "gap-3", "rounded-xl", "px-4", "py-3", "text-sm")}
            role="alert"
            aria-live="assertive"
        >
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{"Request failed"}</p>
                <p id="error-message">{ props.message.clone() }</p>
            </div>
            <button type="button" class="error-banner-close" aria-label="Dismiss error" {onclick}>
                {"×"}
            </button>
        </div>
    }
}
