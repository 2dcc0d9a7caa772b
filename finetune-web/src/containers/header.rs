use crate::{
    components::{
        header_nav_item::HeaderNavItem, language_selector::LanguageSelector,
        theme_switcher::ThemeSwitcher, user_dropdown::UserDropdown,
    },
    containers::auth_provider::use_session,
    routes::{PrivateRoute, PrivateScreen},
};
use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: PrivateScreen,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let first_name = use_session()
        .and_then(|context| context.user().map(|user| user.user.first_name().to_string()));

    let nav_items = PrivateScreen::iter()
        .map(|screen| html! { <HeaderNavItem {screen} current={props.current} /> })
        .collect::<Html>();

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<PrivateRoute> to={PrivateRoute::Dashboard} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<PrivateRoute>>
            <div class="dropdown dropdown-end lg:hidden">
                <button class="btn btn-soft" aria-label={i18n.t("header.menu")}>
                    <Icon icon_id={IconId::HeroiconsOutlineBars3} class="h-5 w-5" />
                </button>
                <ul
                    tabindex="0"
                    class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                    {nav_items.clone()}
                </ul>
            </div>
            <ul class="hidden menu lg:menu-horizontal">
                {nav_items}
            </ul>
            <div class="flex items-center">
                <LanguageSelector />
                <ThemeSwitcher />
                if let Some(name) = first_name {
                    <span class="hidden sm:inline text-sm text-base-content/80 mr-2">{name}</span>
                }
                <UserDropdown />
            </div>
        </nav>
    }
}
