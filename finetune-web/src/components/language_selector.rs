use crate::components::language_selector_button::LanguageSelectorButton;
use crate::language::{self, DEFAULT_LANGUAGE};
use i18nrs::yew::use_translation;
use yew::{Callback, Html, function_component, html};

/// Header menu switching the interface language.
#[function_component(LanguageSelector)]
pub fn language_selector() -> Html {
    let (i18n, set_language) = use_translation();
    let current = i18n.get_current_language().to_string();

    let on_select = Callback::from(move |code: &'static str| {
        log::debug!("switching language to {code}");
        set_language.emit(code.to_string());
    });

    let current_flag = language::get_language_info(&current)
        .or_else(|| language::get_language_info(DEFAULT_LANGUAGE))
        .map_or("", |info| info.flag);

    html! {
        <div class="dropdown dropdown-end">
            <div
                tabindex="0"
                role="button"
                class="btn btn-ghost btn-circle"
                aria-label={i18n.t("header.language")}
            >
                { current_flag }
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-44">
                { for language::languages_by_name().into_iter().map(|info| {
                    let selected = info.code == current;
                    html! {
                        <LanguageSelectorButton {info} {selected} on_select={on_select.clone()} />
                    }
                }) }
            </ul>
        </div>
    }
}
