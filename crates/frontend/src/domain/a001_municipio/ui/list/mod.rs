use crate::shared::components::{PageHeader, ResultDialog, StatusMessage};
use crate::shared::export::generate_pdf;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_municipio::Municipio;
use contracts::domain::common::Entity;
use contracts::shared::list::LoadState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use thaw::*;

const PDF_REGION: &str = "a001_municipio--list";

#[component]
#[allow(non_snake_case)]
pub fn MunicipioList() -> impl IntoView {
    let vm = ListViewModel::<Municipio>::new();
    let navigate = use_navigate();
    let export_error = RwSignal::new(None::<String>);

    let export_pdf = move |_| {
        spawn_local(async move {
            if let Err(e) = generate_pdf(PDF_REGION, "municipios").await {
                log::error!("pdf export failed: {}", e);
                export_error.set(Some(e));
            }
        });
    };

    view! {
        <PageFrame page_id=PDF_REGION category=PAGE_CAT_LIST>
            <PageHeader title="Listado de municipios">
                <Button appearance=ButtonAppearance::Secondary on_click=export_pdf>
                    {icon("printer")}
                    " Descargar PDF"
                </Button>
            </PageHeader>

            {move || export_error.get().map(|e| view! {
                <div class="warning-box no-pdf">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="page__content">
                {move || match vm.load_state() {
                    LoadState::Loading => view! { <Spinner /> }.into_any(),
                    LoadState::Failed(message) => view! { <StatusMessage text=message /> }.into_any(),
                    LoadState::Ready if vm.state.with(|c| c.items().is_empty()) => {
                        view! { <StatusMessage text="No hay municipios disponibles" /> }.into_any()
                    }
                    LoadState::Ready => {
                        let navigate = navigate.clone();
                        view! {
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell resizable=true min_width=200.0>"Nombre"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Fecha fundación"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Densidad (hab/km²)"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"Coalición"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {vm.items().into_iter().map(|m| {
                                        let id = m.id;
                                        let nombre = m.nombre.clone();
                                        let densidad = format!("{:.2}", m.densidad_poblacion);
                                        let fundacion = m.fundacion_display();
                                        let coalicion = m.coalicion_label();
                                        let navigate = navigate.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{nombre.clone()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{fundacion.clone()}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{densidad.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{coalicion}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <div class="table-actions no-pdf">
                                                            <Button
                                                                size=ButtonSize::Small
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| navigate(&Municipio::edit_route(id), Default::default())
                                                            >
                                                                {icon("edit")}
                                                            </Button>
                                                            <Button
                                                                size=ButtonSize::Small
                                                                appearance=ButtonAppearance::Subtle
                                                                on_click=move |_| vm.delete(id)
                                                                disabled=Signal::derive(move || vm.is_deleting(id))
                                                            >
                                                                {icon("delete")}
                                                            </Button>
                                                        </div>
                                                    </TableCellLayout>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    }).collect_view()}
                                </TableBody>
                            </Table>
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
