use crate::shared::icons;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[derive(Debug, Clone)]
pub struct MegaMenuItem {
    pub href: &'static str,
    pub title: &'static str,
    pub icon_name: &'static str,
}

#[component]
pub fn MegaMenuCategory(
    label: &'static str,
    items: Vec<MegaMenuItem>,
    #[prop(default = 2)] columns: usize,
) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);
    let navigate = use_navigate();

    let grid_cols_class = match columns {
        1 => "mega-menu-grid-1",
        3 => "mega-menu-grid-3",
        _ => "mega-menu-grid-2",
    };

    view! {
        <div
            class="mega-menu-category"
            on:mouseenter=move |_| set_is_open.set(true)
            on:mouseleave=move |_| set_is_open.set(false)
        >
            <button
                class="mega-menu-btn"
                class:mega-menu-btn-active=move || is_open.get()
                on:click=move |_| set_is_open.update(|open| *open = !*open)
            >
                <span>{label}</span>
                <span
                    class="mega-menu-chevron"
                    class:mega-menu-chevron-open=move || is_open.get()
                >
                    {icons::icon("chevron-down")}
                </span>
            </button>

            <div
                class="mega-menu-panel"
                class:mega-menu-panel-open=move || is_open.get()
            >
                <div class=format!("mega-menu-content {}", grid_cols_class)>
                    {items.into_iter().map(|item| {
                        let navigate = navigate.clone();
                        view! {
                            <button
                                class="mega-menu-card"
                                on:click=move |_| {
                                    navigate(item.href, Default::default());
                                    set_is_open.set(false);
                                }
                            >
                                <div class="mega-menu-card-icon">
                                    {icons::icon(item.icon_name)}
                                </div>
                                <div class="mega-menu-card-title">
                                    {item.title}
                                </div>
                            </button>
                        }
                    }).collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn MegaMenuBar() -> impl IntoView {
    let municipios = vec![
        MegaMenuItem { href: "/municipios/new", title: "Registro de municipios", icon_name: "plus" },
        MegaMenuItem { href: "/municipios", title: "Listado de municipios", icon_name: "list" },
        MegaMenuItem { href: "/municipios/cards", title: "Listado de tarjetas de municipios", icon_name: "grid" },
        MegaMenuItem { href: "/municipios/filter", title: "Municipios con filtros", icon_name: "filter" },
        MegaMenuItem { href: "/municipios/graph", title: "Gráficas de municipios", icon_name: "pie-chart" },
    ];

    let ordenanzas = vec![
        MegaMenuItem { href: "/ordenanzas/new", title: "Alta de ordenanzas", icon_name: "plus" },
        MegaMenuItem { href: "/ordenanzas", title: "Listado de ordenanzas", icon_name: "file-text" },
        MegaMenuItem { href: "/ordenanzas/filter", title: "Ordenanzas con filtros", icon_name: "filter" },
    ];

    view! {
        <nav class="mega-menu-bar">
            <MegaMenuCategory label="Municipios" items=municipios columns=2 />
            <MegaMenuCategory label="Ordenanzas" items=ordenanzas columns=1 />
        </nav>
    }
}
