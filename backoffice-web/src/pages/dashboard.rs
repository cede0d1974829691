use crate::routes::MainRoute;
use crate::shortcuts::CHORDS;
use i18nrs::yew::use_translation;
use yew::{Html, function_component, html};
use yew_icons::{Icon, IconId};
use yew_router::prelude::*;

fn card_icon(route: MainRoute) -> IconId {
    match route {
        MainRoute::Categories => IconId::HeroiconsOutlineTag,
        MainRoute::Customers => IconId::HeroiconsOutlineUsers,
        MainRoute::SaleReport => IconId::HeroiconsOutlineChartBar,
        _ => IconId::HeroiconsOutlineCog6Tooth,
    }
}

/// Dashboard page component
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (i18n, _) = use_translation();
    let cards = [
        MainRoute::Categories,
        MainRoute::Customers,
        MainRoute::SaleReport,
        MainRoute::Settings,
    ];

    html! {
        <div class="p-4 space-y-6">
            <h1 class="text-2xl font-bold">{ i18n.t("app.title") }</h1>

            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                { for cards.into_iter().map(|route| {
                    let key = route.translation_key();
                    html! {
                        <div class="card bg-base-200 shadow-xl">
                            <div class="card-body">
                                <h2 class="card-title">
                                    <Icon icon_id={card_icon(route)} class="w-6 h-6" />
                                    { i18n.t(&format!("{key}.title")) }
                                </h2>
                                <p>{ i18n.t(&format!("{key}.description")) }</p>
                                <div class="card-actions justify-end">
                                    <Link<MainRoute> to={route} classes="btn btn-primary btn-sm">
                                        { i18n.t("dashboard.open") }
                                    </Link<MainRoute>>
                                </div>
                            </div>
                        </div>
                    }
                }) }
            </div>

            <div class="card bg-base-200">
                <div class="card-body">
                    <h2 class="card-title">{ i18n.t("dashboard.shortcuts") }</h2>
                    <ul class="grid grid-cols-2 gap-2 text-sm">
                        { for CHORDS.iter().map(|(key, route)| html! {
                            <li>
                                <kbd class="kbd kbd-sm">{"g"}</kbd>{" "}<kbd class="kbd kbd-sm">{ *key }</kbd>
                                {" "}{ i18n.t(&format!("{}.title", route.translation_key())) }
                            </li>
                        }) }
                        <li>
                            <kbd class="kbd kbd-sm">{"n"}</kbd>{" "}{ i18n.t("notifications.title") }
                        </li>
                    </ul>
                </div>
            </div>
        </div>
    }
}
