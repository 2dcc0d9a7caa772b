use yew::{Html, Properties, function_component, use_effect_with};
use yew_router::prelude::{Routable, use_navigator};

#[derive(Properties, PartialEq)]
pub struct ReplaceRedirectProps<R: Routable + 'static> {
    pub to: R,
}

/// Navigates to `to` once mounted, replacing the current history entry so the
/// abandoned URL is not left behind the back button.
#[function_component(ReplaceRedirect)]
pub fn replace_redirect<R: Routable + 'static>(props: &ReplaceRedirectProps<R>) -> Html {
    let navigator = use_navigator();

    use_effect_with(props.to.clone(), move |to| {
        match navigator {
            Some(navigator) => navigator.replace(to),
            None => log::error!("redirect to {} rendered outside a router", to.to_path()),
        }
        || ()
    });

    Html::default()
}
