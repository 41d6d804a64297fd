use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Departments offered by the add-employee form.
pub const DEPARTMENTS: &[&str] = &[
    "Engineering",
    "Product",
    "Design",
    "Marketing",
    "Sales",
    "Human Resources",
    "Finance",
    "Operations",
    "Customer Support",
    "Legal",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_present: u32,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub total_absent: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEmployee {
    pub employee_id: String,
    pub full_name: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl AttendanceStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AttendanceStatus::Present => "✓",
            AttendanceStatus::Absent => "✕",
        }
    }

    pub fn badge_class(self) -> &'static str {
        match self {
            AttendanceStatus::Present => {
                "inline-flex items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-semibold bg-status-success-bg text-status-success-text"
            }
            AttendanceStatus::Absent => {
                "inline-flex items-center gap-1 rounded-full px-2.5 py-0.5 text-xs font-semibold bg-status-error-bg text-status-error-text"
            }
        }
    }
}

impl std::fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAttendance {
    pub employee_id: String,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
}

/// Inclusive date bounds for the attendance history endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttendanceQuery {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl AttendanceQuery {
    pub fn new(date_from: Option<NaiveDate>, date_to: Option<NaiveDate>) -> Self {
        Self { date_from, date_to }
    }

    pub fn is_empty(&self) -> bool {
        self.date_from.is_none() && self.date_to.is_none()
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(from) = self.date_from {
            params.push(("date_from", from.format("%Y-%m-%d").to_string()));
        }
        if let Some(to) = self.date_to {
            params.push(("date_to", to.format("%Y-%m-%d").to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_employees: u32,
    pub present_today: u32,
    pub absent_today: u32,
    #[serde(default)]
    pub departments: Vec<String>,
}

impl DashboardSummary {
    pub fn unmarked_today(&self) -> u32 {
        self.total_employees
            .saturating_sub(self.present_today)
            .saturating_sub(self.absent_today)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{}", .detail.as_deref().unwrap_or("request was rejected"))]
    Status { status: u16, detail: Option<String> },
    #[error("failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Builds a status error from a raw error body, keeping `detail` only when
    /// the backend sent it as plain text.
    pub fn from_body(status: u16, body: &str) -> Self {
        let detail = serde_json::from_str::<Value>(body)
            .ok()
            .and_then(|value| {
                value
                    .get("detail")
                    .and_then(|d| d.as_str())
                    .map(str::to_string)
            })
            .filter(|d| !d.trim().is_empty());
        Self::Status { status, detail }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    pub fn message_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<u32>::deserialize(deserializer)?.unwrap_or_default())
}
