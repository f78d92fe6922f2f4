use crate::utils::time::parse_time;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Theme {
    Default,
    Tet,
    Noel,
    NationalDay,
    Liberation,
    Custom,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Default => "Default",
            Theme::Tet => "Tet",
            Theme::Noel => "Noel",
            Theme::NationalDay => "NationalDay",
            Theme::Liberation => "Liberation",
            Theme::Custom => "Custom",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "default" => Some(Theme::Default),
            "tet" => Some(Theme::Tet),
            "noel" => Some(Theme::Noel),
            "nationalday" => Some(Theme::NationalDay),
            "liberation" => Some(Theme::Liberation),
            "custom" => Some(Theme::Custom),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "vi")]
    Vi,
    #[serde(rename = "en")]
    En,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Vi => "vi",
            Language::En => "en",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "vi" => Some(Language::Vi),
            "en" => Some(Language::En),
            _ => None,
        }
    }
}

/// Global application settings, stored as one blob. Every field carries a
/// default so a snapshot written by an older version still loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_clock_in")]
    pub default_clock_in: String,
    #[serde(default = "default_clock_out")]
    pub default_clock_out: String,
    #[serde(default = "default_lunch_start")]
    pub lunch_start: String,
    #[serde(default = "default_lunch_end")]
    pub lunch_end: String,
    #[serde(default = "default_departments")]
    pub departments: Vec<String>,
    #[serde(default = "default_theme")]
    pub theme: Theme,
    #[serde(default = "default_language")]
    pub language: Language,
    pub custom_logo: Option<String>,
    pub primary_color: Option<String>,
    pub accent_color: Option<String>,
}

fn default_clock_in() -> String {
    "08:00".to_string()
}
fn default_clock_out() -> String {
    "17:00".to_string()
}
fn default_lunch_start() -> String {
    "11:45".to_string()
}
fn default_lunch_end() -> String {
    "13:15".to_string()
}
fn default_departments() -> Vec<String> {
    [
        "C/O",
        "HR",
        "IT",
        "Accountant",
        "Logistics",
        "Delivery",
        "Warehouse",
        "Marketing",
        "Customer Support",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}
fn default_theme() -> Theme {
    Theme::Default
}
fn default_language() -> Language {
    Language::Vi
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_clock_in: default_clock_in(),
            default_clock_out: default_clock_out(),
            lunch_start: default_lunch_start(),
            lunch_end: default_lunch_end(),
            departments: default_departments(),
            theme: default_theme(),
            language: default_language(),
            custom_logo: None,
            primary_color: Some("#1e293b".to_string()),
            accent_color: Some("#f97316".to_string()),
        }
    }
}

impl AppSettings {
    pub fn has_department(&self, name: &str) -> bool {
        self.departments.iter().any(|d| d == name)
    }

    /// Calculation policy derived from the stored times. Malformed values
    /// degrade to the built-in defaults instead of failing.
    pub fn policy(&self) -> WorkPolicy {
        WorkPolicy {
            cutoff: parse_time(&self.default_clock_out)
                .unwrap_or_else(|| NaiveTime::from_hms_opt(17, 0, 0).unwrap()),
            lunch_start: parse_time(&self.lunch_start)
                .unwrap_or_else(|| NaiveTime::from_hms_opt(11, 45, 0).unwrap()),
            lunch_end: parse_time(&self.lunch_end)
                .unwrap_or_else(|| NaiveTime::from_hms_opt(13, 15, 0).unwrap()),
        }
    }
}

/// The three wall-clock bounds the calculators need. Passed explicitly so the
/// arithmetic never reads global state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkPolicy {
    /// End of the regular day; overtime starts after this.
    pub cutoff: NaiveTime,
    pub lunch_start: NaiveTime,
    pub lunch_end: NaiveTime,
}
