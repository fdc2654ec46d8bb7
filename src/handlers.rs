use crate::errors::AppError;
use crate::models::{Dashboard, DateRange, Profiles, RangeQuery, RangeResponse};
use crate::state::AppState;
use crate::stats::{build_dashboard, build_profiles};
use crate::ui::render_index;
use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::NaiveDate;
use tracing::debug;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(state.table.bounds()))
}

pub async fn get_range(State(state): State<AppState>) -> Json<RangeResponse> {
    let bounds = state.table.bounds();
    Json(RangeResponse {
        min: bounds.start,
        max: bounds.end,
        records: state.table.len(),
    })
}

pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> Result<Json<Dashboard>, AppError> {
    let range = resolve_range(&query, state.table.bounds())?;
    let dashboard = build_dashboard(&state.table, range);
    debug!(
        "dashboard for {} to {}: {} records",
        range.start, range.end, dashboard.record_count
    );
    Ok(Json(dashboard))
}

pub async fn get_profiles(State(state): State<AppState>) -> Json<Profiles> {
    Json(build_profiles(&state.table))
}

/// Missing ends default to the table bounds; supplied ends are clamped into them.
fn resolve_range(query: &RangeQuery, bounds: DateRange) -> Result<DateRange, AppError> {
    let start = parse_bound(query.start.as_deref(), "start")?.unwrap_or(bounds.start);
    let end = parse_bound(query.end.as_deref(), "end")?.unwrap_or(bounds.end);

    let requested = DateRange::new(start, end);
    let range = requested.clamp_to(bounds);
    if range != requested {
        debug!("clamped {start} to {end} into {} to {}", bounds.start, bounds.end);
    }
    if range.is_reversed() {
        debug!("reversed range {} to {}, nothing selected", range.start, range.end);
    }
    Ok(range)
}

fn parse_bound(value: Option<&str>, name: &str) -> Result<Option<NaiveDate>, AppError> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| AppError::bad_request(format!("{name} must be a YYYY-MM-DD date"))),
    }
}
