use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};

/// Full-screen placeholder shown while the session is being resolved.
#[function_component(Loading)]
pub fn loading() -> Html {
    let (i18n, ..) = use_translation();

    html! {
        <section class="grid place-items-center min-h-screen bg-base-100" aria-busy="true">
            <div class="card bg-base-200 shadow-md">
                <div class="card-body items-center gap-3">
                    <h1 class="card-title">
                        <Icon icon_id={IconId::HeroiconsOutlineAcademicCap} class="h-6 w-6 text-primary" />
                        { i18n.t("app.title") }
                    </h1>
                    <p class="flex items-center gap-2" role="status">
                        <span class="loading loading-spinner loading-md text-primary"></span>
                        { i18n.t("app.loading") }
                    </p>
                </div>
            </div>
        </section>
    }
}
