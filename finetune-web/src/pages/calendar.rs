use chrono::{Datelike, Local, NaiveDate};
use i18nrs::yew::use_translation;
use yew::{Html, classes, function_component, html};

const WEEKDAY_KEYS: [&str; 7] = ["mon", "tue", "wed", "thu", "fri", "sat", "sun"];

/// Weeks of the month containing `day`, Monday first. Cells outside the
/// month are `None`.
fn month_grid(day: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let Some(first) = day.with_day(1) else {
        return Vec::new();
    };
    let days_in_month = first
        .checked_add_months(chrono::Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day());
    let offset = first.weekday().num_days_from_monday() as usize;

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    for index in 0..(offset + days_in_month as usize) {
        if index >= offset {
            week[index % 7] = Some((index - offset) as u32 + 1);
        }
        if index % 7 == 6 {
            weeks.push(week);
            week = [None; 7];
        }
    }
    if week.iter().any(Option::is_some) {
        weeks.push(week);
    }
    weeks
}

/// `CalendarPage` page component
#[function_component(CalendarPage)]
pub fn calendar_page() -> Html {
    let (i18n, _) = use_translation();
    let today = Local::now().date_naive();
    let weeks = month_grid(today);

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("calendar.title") }</h1>
            <p>{ i18n.t("calendar.summary") }</p>
            <p class="text-base-content/70">
                { format!("{}: {}", i18n.t("calendar.today"), today.format("%d/%m/%Y")) }
            </p>
            <table class="table table-fixed w-full text-center">
                <thead>
                    <tr>
                        { for WEEKDAY_KEYS.iter().map(|key| html! {
                            <th>{ i18n.t(&format!("calendar.weekdays.{key}")) }</th>
                        }) }
                    </tr>
                </thead>
                <tbody>
                    { for weeks.iter().map(|week| html! {
                        <tr>
                            { for week.iter().map(|cell| match cell {
                                Some(day) => html! {
                                    <td class={classes!((*day == today.day()).then_some("bg-primary text-primary-content rounded-box"))}>
                                        { day }
                                    </td>
                                },
                                None => html! { <td></td> },
                            }) }
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}
