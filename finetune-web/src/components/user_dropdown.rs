use crate::{containers::auth_provider::use_session, routes::PrivateRoute};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[function_component(UserDropdown)]
pub fn user_dropdown() -> Html {
    let (i18n, ..) = use_translation();
    let Some(context) = use_session() else {
        return html! {};
    };
    let Some(identity) = context.user().cloned() else {
        return html! {};
    };

    let logout_button = {
        let context = context.clone();
        let onclick = Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            log::info!("signing out");
            context.sign_out();
        });
        html! {
            <li><a {onclick}>{i18n.t("header.logout")}</a></li>
        }
    };

    let role_label = i18n.t(&format!("roles.{}", identity.role()));

    html! {
        <div class="dropdown dropdown-end">
            <div tabindex="0" role="button" class="btn btn-ghost btn-circle mb-1">
                <Icon icon_id={IconId::HeroiconsSolidUserCircle} class="h-6 w-6" />
            </div>
            <ul tabindex="0" class="dropdown-content z-[1] menu p-2 shadow bg-base-200 rounded-box w-52">
                <li class="px-2 py-1 text-left">
                    <div class="text-sm font-semibold text-base-content">{ identity.user.full_name.clone() }</div>
                    <div class="text-xs text-base-content/70">{ identity.user.email.clone() }</div>
                    <div class="text-xs text-base-content/70">{ role_label }</div>
                </li>
                <div class="divider my-0"></div>
                <li>
                    <Link<PrivateRoute> to={PrivateRoute::Profile}>{i18n.t("header.profile")}</Link<PrivateRoute>>
                </li>
                <div class="divider my-0"></div>
                {logout_button}
            </ul>
        </div>
    }
}
