use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Positive,
    Negative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub kind: CategoryKind,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoriesData {
    pub data: Vec<Category>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: String,
    pub date: String,
    pub category_ids: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppData {
    pub categories: CategoriesData,
    pub logs: Vec<LogEntry>,
}

#[derive(Debug, Deserialize)]
pub struct LogPayload {
    pub date: String,
    pub category_ids: Vec<u32>,
    #[serde(default)]
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct DeleteRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub deleted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryInfo {
    pub kind: CategoryKind,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassifiedEvent {
    pub date: String,
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyAggregate {
    pub id: String,
    pub date: String,
    pub positive: u64,
    pub negative: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodAggregate {
    pub daily: Vec<DailyAggregate>,
    pub total_positive: u64,
    pub total_negative: u64,
    pub total_days: u64,
    pub unknown_categories: u64,
}

#[derive(Debug, Serialize)]
pub struct MonthlyReport {
    pub summary: PeriodAggregate,
    pub events: Vec<ClassifiedEvent>,
}

#[derive(Debug, Serialize)]
pub struct DayView {
    pub logs: Vec<LogEntry>,
    pub events: Vec<ClassifiedEvent>,
}
