use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

struct HomeCard {
    href: &'static str,
    title: &'static str,
    description: &'static str,
    icon_name: &'static str,
}

const CARDS: &[HomeCard] = &[
    HomeCard {
        href: "/municipios",
        title: "Municipios",
        description: "Registro, listado, tarjetas y filtros de municipios",
        icon_name: "building",
    },
    HomeCard {
        href: "/ordenanzas",
        title: "Ordenanzas",
        description: "Alta, listado y filtros de ordenanzas municipales",
        icon_name: "file-text",
    },
    HomeCard {
        href: "/municipios/graph",
        title: "Gráficas",
        description: "Distribución de datos en gráfica circular",
        icon_name: "pie-chart",
    },
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <div class="home">
                <h1 class="home__title">"Bienvenido al registro de ordenanzas municipales"</h1>
                <div class="home__cards">
                    {CARDS.iter().map(|card| view! {
                        <A href=card.href attr:class="home__card-link">
                            <Card class="home__card">
                                <div class="home__card-icon">{icon(card.icon_name)}</div>
                                <div class="home__card-title">{card.title}</div>
                                <div class="home__card-description">{card.description}</div>
                            </Card>
                        </A>
                    }).collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
