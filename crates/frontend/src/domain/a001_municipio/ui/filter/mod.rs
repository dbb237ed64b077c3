use crate::shared::components::{DateInput, FilterPanel, PageHeader, ResultDialog, StatusMessage};
use crate::shared::export::download_table_pdf;
use crate::shared::icons::icon;
use crate::shared::list_utils::ListViewModel;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::a001_municipio::{Municipio, MunicipioFilter};
use contracts::domain::common::Entity;
use contracts::shared::list::LoadState;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

/// Municipio table narrowed by density and foundation date range
#[component]
#[allow(non_snake_case)]
pub fn MunicipioFilterList() -> impl IntoView {
    let vm = ListViewModel::<Municipio>::new();

    let densidad_min = RwSignal::new(String::new());
    let fundacion_desde = RwSignal::new(String::new());
    let fundacion_hasta = RwSignal::new(String::new());
    let is_expanded = RwSignal::new(true);
    let export_error = RwSignal::new(None::<String>);

    let filter = Memo::new(move |_| MunicipioFilter {
        densidad_min: densidad_min.get(),
        fundacion_desde: fundacion_desde.get(),
        fundacion_hasta: fundacion_hasta.get(),
    });

    let visible = move || filter.with(|f| vm.visible(&f.to_list_filter()));

    let clear = Callback::new(move |_| {
        densidad_min.set(String::new());
        fundacion_desde.set(String::new());
        fundacion_hasta.set(String::new());
    });

    let export_pdf = move |_| {
        let rows = visible();
        match download_table_pdf("Listado de municipios", &rows, "municipios_filtrados") {
            Ok(()) => export_error.set(None),
            Err(e) => {
                log::warn!("pdf export skipped: {}", e);
                export_error.set(Some(e));
            }
        }
    };

    view! {
        <PageFrame page_id="a001_municipio--filter" category=PAGE_CAT_LIST>
            <PageHeader title="Municipios con filtros">
                <Button appearance=ButtonAppearance::Secondary on_click=export_pdf>
                    {icon("download")}
                    " Descargar PDF"
                </Button>
            </PageHeader>

            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=Signal::derive(move || filter.with(|f| f.active_count()))
                on_clear=clear
            >
                <div class="details-grid--3col">
                    <div class="form__group">
                        <label class="form__label">"Densidad mínima"</label>
                        <Input value=densidad_min input_type=InputType::Number placeholder="hab/km²" />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Fundación desde"</label>
                        <DateInput value=fundacion_desde />
                    </div>
                    <div class="form__group">
                        <label class="form__label">"Fundación hasta"</label>
                        <DateInput value=fundacion_hasta />
                    </div>
                </div>
            </FilterPanel>

            {move || export_error.get().map(|e| view! {
                <div class="warning-box">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="page__content">
                {move || match vm.load_state() {
                    LoadState::Loading => view! { <Spinner /> }.into_any(),
                    LoadState::Failed(message) => view! { <StatusMessage text=message /> }.into_any(),
                    LoadState::Ready => {
                        let rows = visible();
                        if rows.is_empty() {
                            return view! {
                                <StatusMessage text="No hay municipios que cumplan los filtros" />
                            }.into_any();
                        }
                        view! {
                            <div class="table-summary">{format!("{} municipios", rows.len())}</div>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell resizable=true min_width=200.0>"Nombre"</TableHeaderCell>
                                        <TableHeaderCell min_width=140.0>"Densidad (hab/km²)"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Fecha fundación"</TableHeaderCell>
                                        <TableHeaderCell min_width=100.0>"Coalición"</TableHeaderCell>
                                        <TableHeaderCell min_width=120.0>"Acciones"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    {rows.into_iter().map(|m| {
                                        let id = m.id;
                                        let nombre = m.nombre.clone();
                                        let densidad = format!("{:.2}", m.densidad_poblacion);
                                        let fundacion = m.fundacion_display();
                                        let coalicion = m.coalicion_label();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <A href=Municipio::edit_route(id)>{nombre.clone()}</A>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{densidad.clone()}</TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{fundacion.clone()}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{coalicion}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Button
                                                            size=ButtonSize::Small
                                                            appearance=ButtonAppearance::Subtle
                                                            on_click=move |_| vm.delete(id)
                                                            disabled=Signal::derive(move || vm.is_deleting(id))
                                                        >
                                                            {icon("delete")}
                                                        </Button>
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
