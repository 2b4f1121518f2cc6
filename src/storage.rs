use crate::errors::AppError;
use crate::models::{AppData, CategoriesData, Category, CategoryKind};
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/tracker.json"))
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse data file: {err}");
                AppData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => starter_data(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    fs::write(path, payload).await.map_err(AppError::internal)?;
    Ok(())
}

// First-run catalog. Categories are managed by editing the data file.
fn starter_data() -> AppData {
    let category = |id, name: &str, kind| Category {
        id,
        name: name.to_string(),
        kind,
    };

    AppData {
        categories: CategoriesData {
            data: vec![
                category(1, "Slept well", CategoryKind::Positive),
                category(2, "Exercised", CategoryKind::Positive),
                category(3, "Ate healthy", CategoryKind::Positive),
                category(4, "Stayed up late", CategoryKind::Negative),
                category(5, "Argument", CategoryKind::Negative),
                category(6, "Skipped meals", CategoryKind::Negative),
            ],
        },
        logs: Vec::new(),
    }
}
