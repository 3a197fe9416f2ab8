use serde_json::Value;

use crate::domain::entities::ArtisanCounts;
use crate::domain::errors::StatsError;
use crate::domain::ports::ArtisanDirectory;

// Artisan counts use case with injected dependencies.
pub struct ArtisanCountsUseCase<D> {
    pub directory: D,
}

impl<D> ArtisanCountsUseCase<D>
where
    D: ArtisanDirectory,
{
    pub async fn execute(&self) -> Result<ArtisanCounts, StatsError> {
        let rows = self
            .directory
            .available_specialties()
            .await
            .map_err(StatsError::StorageFailure)?;

        let mut counts = ArtisanCounts {
            total: rows.len() as u64,
            ..Default::default()
        };

        for raw in rows.iter().flatten() {
            for key in specialty_keys(raw) {
                *counts.by_specialty.entry(key).or_insert(0) += 1;
            }
        }

        Ok(counts)
    }
}

// Specialty keys listed by one artisan. Unparseable columns contribute nothing.
fn specialty_keys(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    let parsed: Value = match serde_json::from_str(raw) {
        Ok(value) => value,
        Err(err) => {
            tracing::debug!(error = %err, "skipping unparseable specialties column");
            return Vec::new();
        }
    };

    match parsed {
        Value::Array(items) => items.iter().filter_map(specialty_key).collect(),
        other => specialty_key(&other).into_iter().collect(),
    }
}

fn specialty_key(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };

    let key = text.trim().to_lowercase();
    if key.is_empty() { None } else { Some(key) }
}
