use crate::dashboards::MunicipioGraphDashboard;
use crate::domain::a001_municipio::ui::cards::MunicipioCards;
use crate::domain::a001_municipio::ui::details::MunicipioDetails;
use crate::domain::a001_municipio::ui::filter::MunicipioFilterList;
use crate::domain::a001_municipio::ui::list::MunicipioList;
use crate::domain::a002_ordenanza::ui::details::OrdenanzaDetails;
use crate::domain::a002_ordenanza::ui::filter::OrdenanzaFilterList;
use crate::domain::a002_ordenanza::ui::list::OrdenanzaList;
use crate::layout::Shell;
use crate::system::pages::home::HomePage;
use crate::system::pages::not_found::NotFoundPage;
use contracts::domain::a001_municipio::MunicipioId;
use contracts::domain::a002_ordenanza::OrdenanzaId;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

/// Edit screen of the municipio named by the `:id` segment
#[component]
fn MunicipioEditPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let raw = params.with(|p| p.get("id").unwrap_or_default());
        match raw.parse::<MunicipioId>() {
            Ok(id) => view! { <MunicipioDetails id=Some(id) /> }.into_any(),
            Err(e) => {
                log::warn!("{}", e);
                view! { <NotFoundPage /> }.into_any()
            }
        }
    }
}

/// Edit screen of the ordenanza named by the `:id` segment
#[component]
fn OrdenanzaEditPage() -> impl IntoView {
    let params = use_params_map();
    move || {
        let raw = params.with(|p| p.get("id").unwrap_or_default());
        match raw.parse::<OrdenanzaId>() {
            Ok(id) => view! { <OrdenanzaDetails id=Some(id) /> }.into_any(),
            Err(e) => {
                log::warn!("{}", e);
                view! { <NotFoundPage /> }.into_any()
            }
        }
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />

                    <Route path=path!("/municipios") view=MunicipioList />
                    <Route path=path!("/municipios/new") view=|| view! { <MunicipioDetails id=None /> } />
                    <Route path=path!("/municipios/edit/:id") view=MunicipioEditPage />
                    <Route path=path!("/municipios/cards") view=MunicipioCards />
                    <Route path=path!("/municipios/filter") view=MunicipioFilterList />
                    <Route path=path!("/municipios/graph") view=MunicipioGraphDashboard />

                    <Route path=path!("/ordenanzas") view=OrdenanzaList />
                    <Route path=path!("/ordenanzas/new") view=|| view! { <OrdenanzaDetails id=None /> } />
                    <Route path=path!("/ordenanzas/edit/:id") view=OrdenanzaEditPage />
                    <Route path=path!("/ordenanzas/filter") view=OrdenanzaFilterList />
                </Routes>
            </Shell>
        </Router>
    }
}
