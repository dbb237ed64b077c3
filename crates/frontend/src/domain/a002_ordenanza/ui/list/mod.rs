use crate::shared::components::{PageHeader, ResultDialog, StatusMessage};
use crate::shared::export::generate_pdf;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a002_ordenanza::Ordenanza;
use contracts::domain::common::Entity;
use contracts::shared::list::LoadState;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

const PDF_REGION: &str = "a002_ordenanza--list";

#[component]
#[allow(non_snake_case)]
pub fn OrdenanzaList() -> impl IntoView {
    let vm = ListViewModel::<Ordenanza>::new();
    let export_error = RwSignal::new(None::<String>);

    let export_pdf = move |_| {
        spawn_local(async move {
            if let Err(e) = generate_pdf(PDF_REGION, "ordenanzas").await {
                log::error!("pdf export failed: {}", e);
                export_error.set(Some(e));
            }
        });
    };

    view! {
        <PageFrame page_id=PDF_REGION category=PAGE_CAT_LIST>
            <PageHeader title="Listado de ordenanzas">
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
                    LoadState::Ready => {
                        let rows = vm.items();
                        if rows.is_empty() {
                            return view! { <StatusMessage text="No hay ordenanzas disponibles" /> }.into_any();
                        }
                        view! { <OrdenanzaTable rows=rows vm=vm /> }.into_any()
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

/// Ordenanza rows with edit and delete actions
#[component]
pub fn OrdenanzaTable(rows: Vec<Ordenanza>, vm: ListViewModel<Ordenanza>) -> impl IntoView {
    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell resizable=true min_width=200.0>"Nombre"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Fecha aprobación"</TableHeaderCell>
                    <TableHeaderCell min_width=100.0>"% Votos a favor"</TableHeaderCell>
                    <TableHeaderCell min_width=90.0>"Vigente"</TableHeaderCell>
                    <TableHeaderCell resizable=true min_width=160.0>"Municipio"</TableHeaderCell>
                    <TableHeaderCell min_width=120.0>"Acciones"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {rows.into_iter().map(|o| {
                    let id = o.id_ordenanza;
                    let nombre = o.nombre.clone();
                    let fecha = o.fecha_display();
                    let voto = format!("{:.2}", o.voto_favorable);
                    let vigente = o.vigente_label();
                    let municipio = o.municipio_nombre().to_string();
                    view! {
                        <TableRow>
                            <TableCell><TableCellLayout>{nombre.clone()}</TableCellLayout></TableCell>
                            <TableCell><TableCellLayout>{fecha.clone()}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{voto.clone()}</TableCellLayout>
                            </TableCell>
                            <TableCell><TableCellLayout>{vigente}</TableCellLayout></TableCell>
                            <TableCell>
                                <TableCellLayout>{municipio.clone()}</TableCellLayout>
                            </TableCell>
                            <TableCell>
                                <TableCellLayout>
                                    <div class="table-actions no-pdf">
                                        <A href=Ordenanza::edit_route(id)>
                                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle>
                                                {icon("edit")}
                                            </Button>
                                        </A>
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
    }
}
