use crate::language::LanguageInfo;
use yew::{Callback, Html, MouseEvent, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct LanguageSelectorButtonProps {
    pub info: LanguageInfo,
    pub selected: bool,
    pub on_select: Callback<&'static str>,
}

/// One entry of the language menu.
#[function_component(LanguageSelectorButton)]
pub fn language_selector_button(props: &LanguageSelectorButtonProps) -> Html {
    let LanguageInfo {
        code,
        flag,
        native_name,
        ..
    } = props.info;
    let onclick = props.on_select.reform(move |event: MouseEvent| {
        event.prevent_default();
        code
    });

    html! {
        <li>
            <a class={classes!(props.selected.then_some("active"))} lang={code} {onclick}>
                <span aria-hidden="true">{ flag }</span>
                <span>{ native_name }</span>
            </a>
        </li>
    }
}
