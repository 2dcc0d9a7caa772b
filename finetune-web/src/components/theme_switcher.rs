use gloo_storage::{LocalStorage, Storage};
use i18nrs::yew::use_translation;
use web_sys::window;
use yew::{
    Callback, Classes, Html, Properties, function_component, html, use_effect_with, use_state_eq,
};
use yew_icons::{Icon, IconId};

const THEME_STORAGE_KEY: &str = "finetune.theme";

/// DaisyUI theme applied through the `data-theme` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Icon of the button, showing the theme a click switches to.
    pub fn toggle_icon(self) -> IconId {
        match self {
            Self::Light => IconId::HeroiconsSolidMoon,
            Self::Dark => IconId::HeroiconsSolidSun,
        }
    }
}

fn stored_or_system_theme() -> Theme {
    if let Some(theme) = LocalStorage::get::<String>(THEME_STORAGE_KEY)
        .ok()
        .and_then(|value| Theme::parse(&value))
    {
        return theme;
    }
    let prefers_dark = window()
        .and_then(|window| window.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .is_some_and(|query| query.matches());
    if prefers_dark { Theme::Dark } else { Theme::Light }
}

fn apply_theme(theme: Theme) {
    if let Some(window) = window()
        && let Some(document) = window.document()
        && let Some(html_element) = document.document_element()
    {
        let _ = html_element.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Properties, PartialEq, Eq)]
pub struct ThemeSwitcherProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeSwitcher)]
pub fn theme_switcher(props: &ThemeSwitcherProps) -> Html {
    let (i18n, ..) = use_translation();
    let current_theme = use_state_eq(|| Theme::Dark);

    {
        let current_theme = current_theme.clone();
        use_effect_with((), move |()| {
            let theme = stored_or_system_theme();
            apply_theme(theme);
            current_theme.set(theme);
            || {}
        });
    }

    let toggle_theme = {
        let current_theme = current_theme.clone();
        Callback::from(move |_: yew::MouseEvent| {
            let next = current_theme.toggled();
            apply_theme(next);
            if let Err(err) = LocalStorage::set(THEME_STORAGE_KEY, next.as_str()) {
                log::warn!("unable to persist theme: {err}");
            }
            current_theme.set(next);
        })
    };

    html! {
        <div class={props.class.clone()}>
            <button
                class="btn btn-ghost btn-circle"
                onclick={toggle_theme}
                aria-label={i18n.t("theme.selector")}
            >
                <Icon icon_id={current_theme.toggle_icon()} class="h-5 w-5" />
            </button>
        </div>
    }
}
