use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Служебные поля, которые админское API отдаёт для каждой записи
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminMeta {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
