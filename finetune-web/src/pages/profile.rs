use crate::containers::auth_provider::use_identity;
use chrono::NaiveDate;
use i18nrs::yew::use_translation;
use shared::models::{AuthenticatedUser, UserProfile};
use yew::{Html, function_component, html};

/// Titled group of profile fields; values are `None` when not provided.
#[derive(Debug, PartialEq)]
struct Section {
    title: &'static str,
    fields: Vec<(&'static str, Option<String>)>,
}

fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn sections(identity: &AuthenticatedUser) -> Vec<Section> {
    let user = &identity.user;
    let mut sections = vec![Section {
        title: "profile.account",
        fields: vec![
            ("profile.full_name", non_empty(&user.full_name)),
            ("profile.email", non_empty(&user.email)),
            ("profile.national_id", user.national_id.as_deref().and_then(non_empty)),
            ("profile.phone", user.phone.as_deref().and_then(non_empty)),
        ],
    }];

    match &identity.profile {
        Some(UserProfile::Student(student)) => sections.push(Section {
            title: "profile.academic",
            fields: vec![
                ("profile.study_level", non_empty(&student.study_level)),
                ("profile.birth_date", Some(format_date(student.birth_date))),
                ("profile.gender", non_empty(&student.gender)),
                ("profile.marital_status", non_empty(&student.marital_status)),
                ("profile.parish", non_empty(&student.parish)),
                ("profile.income_source", non_empty(&student.income_source)),
            ],
        }),
        Some(UserProfile::Teacher(teacher)) => sections.push(Section {
            title: "profile.employment",
            fields: vec![
                ("profile.specialization", non_empty(&teacher.specialization)),
                ("profile.hire_date", Some(format_date(teacher.hire_date))),
            ],
        }),
        None => {}
    }
    sections
}

/// `ProfilePage` page component
#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let (i18n, _) = use_translation();
    let Some(identity) = use_identity() else {
        return html! {};
    };
    let role_label = i18n.t(&format!("roles.{}", identity.role()));

    html! {
        <div class="p-4 space-y-6">
            <div>
                <h1 class="text-2xl font-bold">{ i18n.t("profile.title") }</h1>
                <p class="text-base-content/70">{ i18n.t("profile.summary") }</p>
            </div>
            <div class="badge badge-primary">{ format!("{}: {role_label}", i18n.t("profile.role")) }</div>
            { for sections(&identity).into_iter().map(|section| html! {
                <div class="card bg-base-100 shadow">
                    <div class="card-body">
                        <h2 class="card-title">{ i18n.t(section.title) }</h2>
                        <dl class="grid grid-cols-1 md:grid-cols-2 gap-x-6 gap-y-2">
                            { for section.fields.into_iter().map(|(label, value)| html! {
                                <div>
                                    <dt class="text-sm text-base-content/60">{ i18n.t(label) }</dt>
                                    <dd>{ value.unwrap_or_else(|| i18n.t("profile.not_set")) }</dd>
                                </div>
                            }) }
                        </dl>
                    </div>
                </div>
            }) }
        </div>
    }
}
