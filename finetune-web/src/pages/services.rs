use crate::containers::auth_provider::use_identity;
use crate::pages::role_key;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};

/// `ServicesPage` page component
#[function_component(ServicesPage)]
pub fn services_page() -> Html {
    let (i18n, _) = use_translation();
    let Some(identity) = use_identity() else {
        return html! {};
    };

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("services.title") }</h1>
            <p>{ i18n.t(&role_key("services", identity.role())) }</p>
        </div>
    }
}
