use super::view_model::MunicipioDetailsVm;
use crate::shared::components::{DateInput, FormField, PageHeader, ResultDialog};
use crate::shared::date_utils::{format_date, today};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::a001_municipio::form::{COALICION, DENSIDAD, FUNDACION, NOMBRE};
use contracts::domain::a001_municipio::MunicipioId;
use contracts::shared::form::DATE_FORMAT;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

#[component]
pub fn MunicipioDetails(id: Option<MunicipioId>) -> impl IntoView {
    let vm = MunicipioDetailsVm::new(id);
    vm.load();

    let navigate = use_navigate();
    let fields = vm.fields;
    let form = vm.form;
    let max_date = today().format(DATE_FORMAT).to_string();
    let range_caption = format!("Entre 01/01/1800 y {}", format_date(&max_date));

    let on_close = Callback::new(move |_| {
        if let Some(route) = form.dismiss_dialog() {
            navigate(&route, Default::default());
        }
    });

    view! {
        <PageFrame page_id="a001_municipio--detail" category=PAGE_CAT_DETAIL>
            <PageHeader title=vm.title()>
                {()}
            </PageHeader>

            <div class="page__content">
                <Card class="details-card">
                    <div class="details-form">
                        <FormField label="Nombre" required=true hint=Signal::derive(move || form.hint(NOMBRE))>
                            <Input value=fields.nombre placeholder="Nombre del municipio" />
                        </FormField>

                        <FormField
                            label="Densidad de población"
                            required=true
                            hint=Signal::derive(move || form.hint(DENSIDAD))
                        >
                            <Input value=fields.densidad input_type=InputType::Number placeholder="Habitantes por km²" />
                        </FormField>

                        <FormField
                            label="Fecha de fundación"
                            required=true
                            hint=Signal::derive(move || form.hint(FUNDACION))
                        >
                            <DateInput
                                value=fields.fundacion
                                min="1800-01-01".to_string()
                                max=max_date
                                invalid=Signal::derive(move || form.hint(FUNDACION).is_some())
                            />
                            <div class="form__caption">{range_caption}</div>
                        </FormField>

                        <FormField
                            label="Gobierno de coalición"
                            required=true
                            hint=Signal::derive(move || form.hint(COALICION))
                        >
                            <Select value=fields.coalicion>
                                <option value="">"Seleccione..."</option>
                                <option value="true">"Sí"</option>
                                <option value="false">"No"</option>
                            </Select>
                        </FormField>
                    </div>

                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save_command()
                            disabled=vm.is_save_disabled()
                        >
                            {icon("save")}
                            {move || if form.is_in_flight() { " Guardando..." } else { " Guardar" }}
                        </Button>
                    </div>
                </Card>
            </div>

            <ResultDialog message=Signal::derive(move || form.dialog()) on_close=on_close />
        </PageFrame>
    }
}
