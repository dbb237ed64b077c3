use crate::shared::components::{PageHeader, ResultDialog, StatusMessage};
use crate::shared::export::print_page;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_municipio::Municipio;
use contracts::domain::common::Entity;
use contracts::shared::list::LoadState;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Municipios as a responsive grid of cards
#[component]
#[allow(non_snake_case)]
pub fn MunicipioCards() -> impl IntoView {
    let vm = ListViewModel::<Municipio>::new();

    let print = move |_| {
        if let Err(e) = print_page() {
            log::error!("{}", e);
        }
    };

    view! {
        <PageFrame page_id="a001_municipio--cards" category=PAGE_CAT_LIST>
            <PageHeader title="Listado de municipios">
                <Button appearance=ButtonAppearance::Secondary on_click=print>
                    {icon("printer")}
                    " Imprimir"
                </Button>
            </PageHeader>

            <div class="page__content">
                {move || match vm.load_state() {
                    LoadState::Loading => view! { <Spinner /> }.into_any(),
                    LoadState::Failed(message) => view! { <StatusMessage text=message /> }.into_any(),
                    LoadState::Ready => {
                        let items = vm.items();
                        if items.is_empty() {
                            return view! { <StatusMessage text="No hay municipios disponibles" /> }.into_any();
                        }
                        view! {
                            <div class="card-grid">
                                {items.into_iter().map(|m| view! { <MunicipioCard municipio=m vm=vm /> }).collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </div>

            <ResultDialog
                message=Signal::derive(move || vm.dialog())
                on_close=Callback::new(move |_| vm.dismiss_dialog())
            />
        </PageFrame>
    }
}

#[component]
fn MunicipioCard(municipio: Municipio, vm: ListViewModel<Municipio>) -> impl IntoView {
    let id = municipio.id;

    view! {
        <Card class="municipio-card">
            <div class="municipio-card__header">
                <span class="municipio-card__title">{municipio.nombre.clone()}</span>
                " "
                <span class="municipio-card__caption">{format!("({})", municipio.fundacion_display())}</span>
            </div>
            <div class="municipio-card__body">
                "Densidad: "
                <strong>{format!("{:.2} hab/km²", municipio.densidad_poblacion)}</strong>
            </div>
            {municipio.gobierno_coalicion.then(|| view! {
                <div class="municipio-card__badge">
                    {icon("building")}
                    " Gobierno de coalición"
                </div>
            })}
            <div class="municipio-card__actions no-print">
                <A href=Municipio::edit_route(id)>
                    <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle>
                        {icon("edit")}
                        " Editar"
                    </Button>
                </A>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| vm.delete(id)
                    disabled=Signal::derive(move || vm.is_deleting(id))
                >
                    {icon("delete")}
                    " Borrar"
                </Button>
            </div>
        </Card>
    }
}
