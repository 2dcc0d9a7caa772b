use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_icons::Icon;
use yew_router::prelude::Link;

use crate::routes::{PrivateRoute, PrivateScreen};

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub screen: PrivateScreen,
    pub current: PrivateScreen,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let screen = props.screen;
    let label = i18n.t(&format!("nav.{}", screen.key()));
    let active_route_class = if props.current == screen {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<PrivateRoute> to={screen.route()} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <Icon icon_id={screen.icon()} class="w-5 h-5" />
              {label}
          </Link<PrivateRoute>>
      </li>
    }
}
