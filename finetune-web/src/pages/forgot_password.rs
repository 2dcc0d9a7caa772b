use crate::api::FineTuneClient;
use crate::config::FrontendConfig;
use crate::pages::{bind_input, render_error};
use crate::routes::PublicRoute;
use i18nrs::yew::use_translation;
use shared::models::PasswordResetRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Outcome of the last reset request.
#[derive(Clone, PartialEq)]
enum Feedback {
    Sent(String),
    Failed(String),
}

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let (i18n, ..) = use_translation();
    let email = use_state(String::new);
    let feedback = use_state(|| None::<Feedback>);
    let loading = use_state(|| false);
    let support_url = FrontendConfig::new().support_url().to_string();

    let onsubmit = {
        let email_handle = email.clone();
        let feedback_handle = feedback.clone();
        let loading_handle = loading.clone();
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = PasswordResetRequest {
                email: email_handle.trim().to_string(),
            };
            loading_handle.set(true);
            feedback_handle.set(None);
            let feedback_ref = feedback_handle.clone();
            let loading_ref = loading_handle.clone();
            let i18n = i18n.clone();
            spawn_local(async move {
                let outcome = match FineTuneClient::shared()
                    .request_password_reset(&request)
                    .await
                {
                    Ok(response) => Feedback::Sent(response.message),
                    Err(err) => {
                        log::warn!("password reset request failed: {err}");
                        Feedback::Failed(render_error(err.user_message(), |key| i18n.t(key)))
                    }
                };
                feedback_ref.set(Some(outcome));
                loading_ref.set(false);
            });
        })
    };

    let is_busy = *loading;
    let disable_submit = email.trim().is_empty() || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{i18n.t("forgot.title")}</h2>
                    <p class="text-base-content/70">{i18n.t("forgot.description")}</p>
                    {
                        match &*feedback {
                            Some(Feedback::Sent(message)) => html! {
                                <div class="alert alert-success"><span>{message.clone()}</span></div>
                            },
                            Some(Feedback::Failed(message)) => html! {
                                <div class="alert alert-error"><span>{message.clone()}</span></div>
                            },
                            None => html! {},
                        }
                    }
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{i18n.t("forgot.email")}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            autocomplete="email"
                            required=true
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { i18n.t("forgot.submitting") } else { i18n.t("forgot.submit") }}
                        </button>
                    </div>
                    <div class="flex flex-col items-center gap-1 mt-2 text-sm">
                        <Link<PublicRoute> to={PublicRoute::Login} classes="link link-hover">
                            {i18n.t("forgot.back")}
                        </Link<PublicRoute>>
                        <a class="link link-hover text-base-content/70" href={support_url}>
                            {i18n.t("forgot.help")}
                        </a>
                    </div>
                </form>
            </div>
        </div>
    }
}
