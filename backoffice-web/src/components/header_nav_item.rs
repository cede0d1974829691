use i18nrs::yew::use_translation;
use yew::{Html, Properties, classes, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

#[derive(Properties, PartialEq, Eq)]
pub struct HeaderNavItemProps {
    pub route: MainRoute,
    pub current_route: Option<MainRoute>,
}

#[function_component(HeaderNavItem)]
pub fn header_nav_item(props: &HeaderNavItemProps) -> Html {
    let (i18n, ..) = use_translation();

    let key = props.route.translation_key();
    let route_name = i18n.t(&format!("{key}.title"));
    let route_icon = i18n.t(&format!("{key}.icon"));

    let active_route_class = if props.current_route == Some(props.route) {
        "btn-soft"
    } else {
        ""
    };

    html! {
      <li>
          <Link<MainRoute> to={props.route} classes={classes!("btn", "btn-ghost", "gap-2", active_route_class)}>
              <i class={classes!("fa-solid", "fa-fw", format!("fa-{route_icon}"))}></i>
              {route_name}
          </Link<MainRoute>>
      </li>
    }
}
