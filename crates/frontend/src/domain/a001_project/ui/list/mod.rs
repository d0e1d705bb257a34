//! Projects board: the whole portfolio is loaded up front, so search,
//! filters, sorting and paging all run in the table.

use crate::shared::components::data_table::{ColumnAlign, ColumnDef, DataTable};
use crate::shared::components::table::{format_money, format_percent};
use crate::shared::components::ui::Badge;
use crate::shared::config::use_dashboard_config;
use crate::shared::date_utils::format_date;
use crate::shared::hooks::use_client_pagination;
use crate::shared::page_frame::{PageFrame, PageHeader, PAGE_CAT_DETAIL, PAGE_CAT_LIST};
use contracts::domain::a001_project::{mock, Project};
use contracts::enums::ProjectStatus;
use contracts::shared::table::{SortDirection, SortingState};
use leptos::prelude::*;

/// Headline figures shown above the table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PortfolioSummary {
    pub active: usize,
    pub over_budget: usize,
    pub budget: f64,
    pub spent: f64,
}

impl PortfolioSummary {
    pub fn of(projects: &[Project]) -> Self {
        Self {
            active: projects
                .iter()
                .filter(|p| p.status == ProjectStatus::Active)
                .count(),
            over_budget: projects.iter().filter(|p| p.is_over_budget()).count(),
            budget: projects.iter().map(|p| p.budget).sum(),
            spent: projects.iter().map(|p| p.spent).sum(),
        }
    }
}

fn columns() -> Vec<ColumnDef<Project>> {
    vec![
        ColumnDef::text("code", "Code").sortable().min_width(90),
        ColumnDef::text("name", "Project").sortable().min_width(200),
        ColumnDef::text("client", "Client").sortable().filterable(),
        ColumnDef::text("site_manager", "Site manager").sortable(),
        ColumnDef::text("region", "Region").sortable().filterable(),
        ColumnDef::new("status", "Status", |p: &Project| {
            let status = p.status;
            view! { <Badge variant=status.badge_variant()>{status.display_name()}</Badge> }
                .into_any()
        })
        .sortable()
        .filter_options(
            ProjectStatus::all()
                .iter()
                .map(|s| s.display_name().to_string())
                .collect(),
        ),
        ColumnDef::new("budget", "Budget", |p: &Project| format_money(p.budget).into_any())
            .sortable()
            .not_searchable()
            .align(ColumnAlign::Right),
        ColumnDef::new("spent", "Spent", |p: &Project| {
            let class = if p.is_over_budget() { "text-error" } else { "" };
            view! { <span class=class>{format_money(p.spent)}</span> }.into_any()
        })
        .sortable()
        .not_searchable()
        .align(ColumnAlign::Right),
        ColumnDef::new("start_date", "Start", |p: &Project| format_date(&p.start_date).into_any())
            .sortable()
            .not_searchable(),
        ColumnDef::new("progress", "Progress", |p: &Project| {
            let width = format!("width: {}%;", p.progress.min(100));
            view! {
                <div class="progress">
                    <div class="progress__bar" style=width></div>
                    <span class="progress__label">{format!("{}%", p.progress)}</span>
                </div>
            }
            .into_any()
        })
        .sortable()
        .not_searchable()
        .align(ColumnAlign::Right),
    ]
}

#[component]
pub fn ProjectList() -> impl IntoView {
    let config = use_dashboard_config();
    let projects = RwSignal::new(mock::dataset());
    let pagination = use_client_pagination(projects.into(), config.table.default_page_size);
    let selected = RwSignal::new(None::<Project>);

    let summary = Memo::new(move |_| projects.with(|p| PortfolioSummary::of(p)));

    view! {
        <PageFrame page_id="a001_project--list" category=PAGE_CAT_LIST>
            <PageHeader title="Projects" subtitle="Active and planned construction sites">
                <div class="page__stats">
                    <span>{move || format!("{} active", summary.get().active)}</span>
                    <span>{move || format!("{} over budget", summary.get().over_budget)}</span>
                    <span>
                        {move || {
                            let s = summary.get();
                            let ratio = if s.budget > 0.0 { s.spent / s.budget } else { 0.0 };
                            format!("{} spent of {} ({})", format_money(s.spent), format_money(s.budget), format_percent(ratio))
                        }}
                    </span>
                </div>
            </PageHeader>

            <div class="page__content">
                <DataTable
                    columns=columns()
                    data=projects
                    pagination=pagination
                    enable_global_search=true
                    enable_column_filters=true
                    enable_column_visibility=true
                    search_placeholder="Search code, project, client, manager..."
                    initial_sorting=SortingState::by("code", SortDirection::Asc)
                    on_row_click=Callback::new(move |project: Project| selected.set(Some(project)))
                />

                {move || selected.get().map(|p| view! {
                    <PageFrame page_id="a001_project--detail" category=PAGE_CAT_DETAIL>
                        <div class="detail-card">
                            <div class="detail-card__header">
                                <h2>{format!("{} {}", p.code, p.name)}</h2>
                                <button class="detail-card__close" on:click=move |_| selected.set(None)>
                                    {crate::shared::icons::icon("x")}
                                </button>
                            </div>
                            <dl class="detail-card__grid">
                                <dt>"Client"</dt><dd>{p.client.clone()}</dd>
                                <dt>"Site manager"</dt><dd>{p.site_manager.clone()}</dd>
                                <dt>"Region"</dt><dd>{p.region.clone()}</dd>
                                <dt>"Budget burn"</dt><dd>{format_percent(p.burn_rate())}</dd>
                                <dt>"Progress"</dt><dd>{format!("{}%", p.progress)}</dd>
                            </dl>
                        </div>
                    </PageFrame>
                })}
            </div>
        </PageFrame>
    }
}
