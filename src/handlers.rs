use crate::aggregate::{aggregate, build_index, classify};
use crate::errors::AppError;
use crate::models::{
    CategoriesData, DayView, DeleteRequest, DeleteResponse, LogEntry, LogPayload, MonthlyReport,
};
use crate::state::AppState;
use crate::storage::persist_data;
use crate::ui::render_index;
use axum::{
    extract::{Path, Query, State},
    response::Html,
    Json,
};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct PeriodQuery {
    pub month: Option<String>,
    pub date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MonthQuery {
    pub month: String,
}

#[derive(Debug, Deserialize)]
pub struct DayQuery {
    pub date: String,
}

pub async fn index() -> Html<String> {
    Html(render_index(&today_string()))
}

pub async fn get_categories(State(state): State<AppState>) -> Json<CategoriesData> {
    let data = state.data.lock().await;
    Json(data.categories.clone())
}

pub async fn list_logs(
    State(state): State<AppState>,
    Query(query): Query<PeriodQuery>,
) -> Result<Json<Vec<LogEntry>>, AppError> {
    let data = state.data.lock().await;
    let logs = match (&query.month, &query.date) {
        (Some(month), _) => {
            check_month(month)?;
            month_logs(&data.logs, month)
        }
        (None, Some(date)) => {
            check_date(date)?;
            day_logs(&data.logs, date)
        }
        (None, None) => data.logs.clone(),
    };

    Ok(Json(logs))
}

pub async fn get_report(
    State(state): State<AppState>,
    Query(query): Query<MonthQuery>,
) -> Result<Json<MonthlyReport>, AppError> {
    check_month(&query.month)?;
    let data = state.data.lock().await;

    let monthly = month_logs(&data.logs, &query.month);
    let index = build_index(&data.categories);
    let summary = aggregate(&monthly, &index);
    let events = classify(&monthly, &index);

    Ok(Json(MonthlyReport { summary, events }))
}

pub async fn get_day(
    State(state): State<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<DayView>, AppError> {
    check_date(&query.date)?;
    let data = state.data.lock().await;

    let logs = day_logs(&data.logs, &query.date);
    let index = build_index(&data.categories);
    let events = classify(&logs, &index);

    Ok(Json(DayView { logs, events }))
}

pub async fn create_log(
    State(state): State<AppState>,
    Json(payload): Json<LogPayload>,
) -> Result<Json<LogEntry>, AppError> {
    check_payload(&payload)?;
    let mut data = state.data.lock().await;

    let entry = LogEntry {
        id: Uuid::new_v4().to_string(),
        date: payload.date,
        category_ids: payload.category_ids,
        memo: payload.memo,
    };
    data.logs.push(entry.clone());

    persist_data(&state.data_path, &data).await?;

    Ok(Json(entry))
}

pub async fn update_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<LogPayload>,
) -> Result<Json<LogEntry>, AppError> {
    check_payload(&payload)?;
    let mut data = state.data.lock().await;

    let updated = {
        let entry = data
            .logs
            .iter_mut()
            .find(|log| log.id == id)
            .ok_or_else(|| AppError::not_found("no log with that id"))?;
        entry.date = payload.date;
        entry.category_ids = payload.category_ids;
        entry.memo = payload.memo;
        entry.clone()
    };

    persist_data(&state.data_path, &data).await?;

    Ok(Json(updated))
}

pub async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut data = state.data.lock().await;

    let before = data.logs.len();
    data.logs.retain(|log| log.id != id);
    if data.logs.len() == before {
        return Err(AppError::not_found("no log with that id"));
    }

    persist_data(&state.data_path, &data).await?;

    Ok(Json(DeleteResponse { deleted: 1 }))
}

pub async fn delete_logs(
    State(state): State<AppState>,
    Json(request): Json<DeleteRequest>,
) -> Result<Json<DeleteResponse>, AppError> {
    let mut data = state.data.lock().await;

    let before = data.logs.len();
    data.logs.retain(|log| !request.ids.contains(&log.id));
    let deleted = before - data.logs.len();
    if deleted > 0 {
        persist_data(&state.data_path, &data).await?;
    }

    Ok(Json(DeleteResponse { deleted }))
}

// Callers of the aggregation pass pre-filter entries to the target period;
// a month matches on the YYYY-MM prefix, a day on the full date.
fn month_logs(logs: &[LogEntry], month: &str) -> Vec<LogEntry> {
    logs.iter()
        .filter(|log| log.date.starts_with(month))
        .cloned()
        .collect()
}

fn day_logs(logs: &[LogEntry], date: &str) -> Vec<LogEntry> {
    logs.iter()
        .filter(|log| log.date == date)
        .cloned()
        .collect()
}

fn check_payload(payload: &LogPayload) -> Result<(), AppError> {
    check_date(&payload.date)?;
    if payload.category_ids.is_empty() {
        return Err(AppError::bad_request("select at least one category"));
    }
    if let Some(memo) = &payload.memo {
        if memo.chars().count() > 1000 {
            return Err(AppError::bad_request("memo must be 1000 characters or fewer"));
        }
    }

    Ok(())
}

fn check_date(date: &str) -> Result<(), AppError> {
    if NaiveDate::parse_from_str(date, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("date must be formatted as YYYY-MM-DD"));
    }

    Ok(())
}

fn check_month(month: &str) -> Result<(), AppError> {
    let first_day = format!("{month}-01");
    if month.len() != 7 || NaiveDate::parse_from_str(&first_day, "%Y-%m-%d").is_err() {
        return Err(AppError::bad_request("month must be formatted as YYYY-MM"));
    }

    Ok(())
}

fn today_string() -> String {
    Local::now().date_naive().to_string()
}
