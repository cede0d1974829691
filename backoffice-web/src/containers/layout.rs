use crate::components::NotificationsSlideover;
use crate::containers::header::Header;
use crate::hooks::{use_auth, use_dashboard_shortcuts};
use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::{Children, Html, Properties, classes, function_component, html, use_effect_with};

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let (i18n, ..) = use_translation();
    let auth = use_auth();
    use_dashboard_shortcuts();

    // Re-check the session whenever the route changes.
    {
        let check = auth.check_token_status.clone();
        use_effect_with(props.current_route, move |_| {
            check.emit(());
            || ()
        });
    }

    html! {
    <>
        <Header current_route={props.current_route} />
        <div class="min-h-screen bg-base-100">
            <div class="flex flex-col">
                <main class={classes!(
                    "flex-grow",
                    "p-4",
                    "transition-all",
                    "duration-300"
                )}>
                    {props.children.clone()}
                </main>
                <footer class="footer footer-center p-4 border-t border-base-300 text-base-content">
                    <div>
                        <p>{ i18n.t("app.footer") }</p>
                    </div>
                </footer>
            </div>
        </div>
        <NotificationsSlideover />
    </>
    }
}
