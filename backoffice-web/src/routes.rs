use crate::containers::layout::Layout;
use crate::models::app_state::AppState;
use crate::pages::*;
use crate::session::guard::{GuardDecision, evaluate};
use crate::session::now_millis;
use strum::{EnumIter, IntoEnumIterator};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::{use_dispatch, use_selector};

/// The main routes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/signin")]
    SignIn,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[at("/category")]
    Categories,
    #[at("/customer")]
    Customers,
    #[at("/sale-report")]
    SaleReport,
    #[at("/setting")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl MainRoute {
    /// Translation key prefix, e.g. `routes.category`.
    pub fn translation_key(self) -> &'static str {
        match self {
            MainRoute::Home => "routes.home",
            MainRoute::SignIn => "routes.signin",
            MainRoute::Terms => "routes.terms",
            MainRoute::Privacy => "routes.privacy",
            MainRoute::Categories => "routes.category",
            MainRoute::Customers => "routes.customer",
            MainRoute::SaleReport => "routes.sale_report",
            MainRoute::Settings => "routes.setting",
            MainRoute::NotFound => "routes.not_found",
        }
    }

    /// Whether the route is rendered inside the signed-in layout.
    pub fn uses_layout(self) -> bool {
        !matches!(
            self,
            MainRoute::SignIn | MainRoute::Terms | MainRoute::Privacy
        )
    }
}

/// Routes shown in the header navigation.
pub fn header_routes() -> Vec<MainRoute> {
    MainRoute::iter()
        .filter(|route| {
            matches!(
                route,
                MainRoute::Home
                    | MainRoute::Categories
                    | MainRoute::Customers
                    | MainRoute::SaleReport
                    | MainRoute::Settings
            )
        })
        .collect()
}

#[derive(Properties, PartialEq)]
pub struct MainRouteViewProps {
    pub route: MainRoute,
}

#[function_component(MainRouteView)]
fn main_route_view(props: &MainRouteViewProps) -> Html {
    let token = use_selector(|state: &AppState| state.token.clone());
    let dispatch = use_dispatch::<AppState>();
    let location = use_location();
    let path = location.map_or_else(
        || props.route.to_path(),
        |location| location.path().to_string(),
    );

    let outcome = evaluate((*token).as_deref(), &path, now_millis());

    use_effect_with(outcome.clear_token, move |clear_token| {
        if *clear_token {
            AppState::clear_token(&dispatch);
        }
        || ()
    });

    if let GuardDecision::Redirect(target) = outcome.decision {
        log::debug!("guard redirect {path} -> {}", target.to_path());
        return html! { <Redirect<MainRoute> to={target} /> };
    }

    let route = props.route;
    let page = match route {
        MainRoute::Home => html! { <DashboardPage /> },
        MainRoute::SignIn => html! { <SignInPage /> },
        MainRoute::Terms => html! { <LegalPage kind={LegalKind::Terms} /> },
        MainRoute::Privacy => html! { <LegalPage kind={LegalKind::Privacy} /> },
        MainRoute::Categories => html! { <CategoriesPage /> },
        MainRoute::Customers => html! { <CustomersPage /> },
        MainRoute::SaleReport => html! { <SaleReportPage /> },
        MainRoute::Settings => html! { <SettingsPage /> },
        MainRoute::NotFound => html! { <ErrorPage /> },
    };

    if route.uses_layout() {
        html! { <Layout current_route={route}>{page}</Layout> }
    } else {
        page
    }
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log::debug!("switching to route {route:?}");
    html! { <MainRouteView {route} /> }
}
