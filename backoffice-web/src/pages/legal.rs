use crate::routes::MainRoute;
use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::prelude::Link;

/// Which public document to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalKind {
    Terms,
    Privacy,
}

impl LegalKind {
    fn key(self) -> &'static str {
        match self {
            LegalKind::Terms => "legal.terms",
            LegalKind::Privacy => "legal.privacy",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LegalPageProps {
    pub kind: LegalKind,
}

/// Terms of service and privacy notice, reachable without signing in.
#[function_component(LegalPage)]
pub fn legal_page(props: &LegalPageProps) -> Html {
    let (i18n, ..) = use_translation();
    let key = props.kind.key();

    html! {
        <div class="min-h-screen bg-base-200 flex justify-center p-6">
            <article class="prose max-w-2xl bg-base-100 rounded-box p-8 shadow">
                <h1>{ i18n.t(&format!("{key}.title")) }</h1>
                <p>{ i18n.t(&format!("{key}.body")) }</p>
                <Link<MainRoute> to={MainRoute::SignIn} classes="link">{ i18n.t("legal.back") }</Link<MainRoute>>
            </article>
        </div>
    }
}
