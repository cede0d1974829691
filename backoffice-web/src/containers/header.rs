use crate::{
    components::{header_nav_item::HeaderNavItem, user_dropdown::UserDropdown},
    hooks::use_dashboard,
    routes::{MainRoute, header_routes},
};
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::prelude::Link;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let dashboard = use_dashboard();
    let routes = header_routes();

    let render_routes = |routes: &[MainRoute]| -> Html {
        html! {
            { for routes.iter().map(|route| html! {
                <HeaderNavItem current_route={props.current_route} route={*route} />
            }) }
        }
    };

    let toggle_notifications = {
        let toggle = dashboard.toggle_notifications.clone();
        Callback::from(move |_| toggle.emit(()))
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-ghost text-lg">
                {i18n.t("app.title")}
            </Link<MainRoute>>
            <div class="dropdown dropdown-end sm:hidden">
                <button class="btn btn-soft">
                <i class="fa-solid fa-bars text-lg"></i>
                </button>
                <ul
                tabindex="0"
                class="dropdown-content menu z-[1] bg-base-200 p-6 rounded-box shadow w-56 gap-2"
                >
                { render_routes(&routes) }
                </ul>
            </div>
            <ul class="hidden menu sm:menu-horizontal">
                { render_routes(&routes) }
            </ul>
            <div class="flex items-center gap-2">
                <button
                    class={classes!("btn", "btn-ghost", "btn-circle", dashboard.notifications_open.then_some("btn-active"))}
                    title={i18n.t("notifications.title")}
                    onclick={toggle_notifications}
                >
                    <Icon icon_id={IconId::HeroiconsOutlineBell} class="w-5 h-5" />
                </button>
                <UserDropdown />
            </div>
        </nav>
    }
}
