use crate::api::FineTuneClient;
use crate::containers::auth_provider::use_session;
use crate::pages::{bind_input, render_error};
use crate::routes::PublicRoute;
use i18nrs::yew::use_translation;
use shared::models::LoginRequest;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, PartialEq)]
enum Status {
    Idle,
    Submitting,
    Failed(String),
}

/// Email and password sign-in. A successful login hands the identity to the
/// auth provider, which swaps the route tree.
#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let (i18n, ..) = use_translation();
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let status = use_state(|| Status::Idle);

    let onsubmit = {
        let (email, password, status) = (email.clone(), password.clone(), status.clone());
        let i18n = i18n.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = LoginRequest {
                email: email.trim().to_string(),
                password: (*password).clone(),
            };
            status.set(Status::Submitting);

            let (session, status, i18n) = (session.clone(), status.clone(), i18n.clone());
            spawn_local(async move {
                match FineTuneClient::shared().login(&request).await {
                    Ok(identity) => {
                        log::info!("signed in as user {}", identity.user.id);
                        status.set(Status::Idle);
                        match session {
                            Some(context) => context.sign_in(identity),
                            None => log::error!("login page rendered outside an auth provider"),
                        }
                    }
                    Err(err) => {
                        log::warn!("login failed: {err}");
                        let message = render_error(err.user_message(), |key| i18n.t(key));
                        status.set(Status::Failed(message));
                    }
                }
            });
        })
    };

    let submitting = *status == Status::Submitting;
    let can_submit = !submitting && !email.trim().is_empty() && !password.is_empty();

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" {onsubmit}>
                    <h2 class="card-title text-2xl">{ i18n.t("login.title") }</h2>
                    <p class="text-base-content/70">{ i18n.t("login.subtitle") }</p>
                    if let Status::Failed(message) = &*status {
                        <div class="alert alert-error" role="alert">{ message.clone() }</div>
                    }
                    <label class="form-control" for="email">
                        <span class="label-text py-2">{ i18n.t("login.email") }</span>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            autocomplete="username"
                            required=true
                            value={(*email).clone()}
                            oninput={bind_input(&email)}
                        />
                    </label>
                    <label class="form-control" for="password">
                        <span class="label-text py-2">{ i18n.t("login.password") }</span>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            autocomplete="current-password"
                            required=true
                            value={(*password).clone()}
                            oninput={bind_input(&password)}
                        />
                    </label>
                    <button class="btn btn-primary mt-6" type="submit" disabled={!can_submit}>
                        { i18n.t(if submitting { "login.submitting" } else { "login.submit" }) }
                    </button>
                    <Link<PublicRoute> to={PublicRoute::ForgotPassword} classes="link link-hover text-sm text-center mt-2">
                        { i18n.t("login.forgot") }
                    </Link<PublicRoute>>
                </form>
            </div>
        </div>
    }
}
