use crate::containers::auth_provider::use_identity;
use crate::routes::{PrivateRoute, PrivateScreen};
use i18nrs::yew::use_translation;
use strum::IntoEnumIterator;
use yew::{Html, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::*;

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let identity = use_identity();
    let first_name = identity
        .as_ref()
        .map(|identity| identity.user.first_name().to_string())
        .unwrap_or_default();

    let cards = PrivateScreen::iter()
        .filter(|screen| *screen != PrivateScreen::Dashboard)
        .map(|screen| {
            let key = screen.key();
            html! {
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body">
                        <h2 class="card-title">
                            <Icon icon_id={screen.icon()} class="w-6 h-6" />
                            { i18n.t(&format!("{key}.title")) }
                        </h2>
                        <p>{ i18n.t(&format!("{key}.summary")) }</p>
                        <div class="card-actions justify-end">
                            <Link<PrivateRoute> to={screen.route()} classes="btn btn-primary">
                                { i18n.t("dashboard.open") }
                            </Link<PrivateRoute>>
                        </div>
                    </div>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div class="p-4 space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{ format!("{}, {first_name}", i18n.t("dashboard.greeting")) }</h1>
                <p class="text-base-content/70">{ i18n.t("dashboard.subtitle") }</p>
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                {cards}
            </div>
        </div>
    }
}
