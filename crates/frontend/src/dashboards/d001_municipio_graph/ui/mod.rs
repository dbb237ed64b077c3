use super::api::fetch_graph;
use crate::shared::components::{PageHeader, StatusMessage};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use contracts::dashboards::d001_municipio_graph::{arc_path, pie_arcs, PieArc, EMPTY_MESSAGE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const SIZE: f64 = 400.0;
const CENTER: f64 = SIZE / 2.0;
const INNER_RADIUS: f64 = 80.0;
const OUTER_RADIUS: f64 = 150.0;
const LABEL_RADIUS: f64 = 175.0;
/// Slices below this share get no outer label (legend only)
const MIN_LABEL_PERCENT: f64 = 4.0;

#[component]
#[allow(non_snake_case)]
pub fn MunicipioGraphDashboard() -> impl IntoView {
    let result = RwSignal::new(None::<Result<Vec<PieArc>, String>>);

    spawn_local(async move {
        let arcs = fetch_graph().await.map(|slices| pie_arcs(&slices));
        if let Err(e) = &arcs {
            log::warn!("graph: {}", e);
        }
        // The screen may be gone by now
        let _ = result.try_set(Some(arcs));
    });

    view! {
        <PageFrame page_id="d001_municipio_graph--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Gráficas de municipios">
                {()}
            </PageHeader>

            <div class="page__content">
                {move || match result.get() {
                    None => view! { <Spinner /> }.into_any(),
                    Some(Err(message)) => view! { <StatusMessage text=message /> }.into_any(),
                    Some(Ok(arcs)) if arcs.is_empty() => {
                        view! { <StatusMessage text=EMPTY_MESSAGE /> }.into_any()
                    }
                    Some(Ok(arcs)) => view! { <DonutChart arcs=arcs /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

#[component]
fn DonutChart(arcs: Vec<PieArc>) -> impl IntoView {
    let hovered = RwSignal::new(None::<usize>);
    let legend = arcs.clone();

    view! {
        <div class="donut-chart">
            <svg
                class="donut-chart__svg"
                viewBox=format!("0 0 {} {}", SIZE, SIZE)
                preserveAspectRatio="xMidYMid meet"
            >
                {arcs.into_iter().enumerate().map(|(index, arc)| {
                    let path = arc_path(CENTER, CENTER, INNER_RADIUS, OUTER_RADIUS, arc.start_angle, arc.end_angle);
                    let (lx, ly) = arc.label_point(CENTER, CENTER, LABEL_RADIUS);
                    let anchor = if lx >= CENTER { "start" } else { "end" };
                    let tooltip = format!("{}: {} ({:.1}%)", arc.label, arc.value, arc.percent);
                    view! {
                        <g
                            class="donut-chart__slice"
                            class:donut-chart__slice--active=move || hovered.get() == Some(index)
                            on:mouseenter=move |_| hovered.set(Some(index))
                            on:mouseleave=move |_| hovered.set(None)
                        >
                            <title>{tooltip}</title>
                            <path d=path fill=arc.color stroke="#fff" stroke-width="1" />
                            {(arc.percent >= MIN_LABEL_PERCENT).then(|| view! {
                                <text
                                    x=format!("{:.1}", lx)
                                    y=format!("{:.1}", ly)
                                    text-anchor=anchor
                                    dominant-baseline="middle"
                                    class="donut-chart__label"
                                >
                                    {arc.label.clone()}
                                </text>
                            })}
                        </g>
                    }
                }).collect_view()}
            </svg>

            <ul class="donut-chart__legend">
                {legend.into_iter().map(|arc| view! {
                    <li class="donut-chart__legend-item">
                        <span class="donut-chart__swatch" style=format!("background: {};", arc.color)></span>
                        {format!("{} ({})", arc.label, arc.value)}
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}
