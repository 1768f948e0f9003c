use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Persisted summary of one completed simulation run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultRecord {
    pub id: String,
    pub angle: f64,
    pub speed: f64,
    pub max_height: f64,
    pub range: f64,
    pub time: f64,
    pub scored: bool,
    pub timestamp: DateTime<Utc>,
}

impl ResultRecord {
    pub fn status(&self) -> ShotStatus {
        ShotStatus::from_scored(self.scored)
    }
}

// Validated launch summary, before the store assigns identity and time.
#[derive(Clone, Debug, PartialEq)]
pub struct NewResult {
    pub angle: f64,
    pub speed: f64,
    pub max_height: f64,
    pub range: f64,
    pub time: f64,
    pub scored: bool,
}

// Display label derived from the scored flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ShotStatus {
    Hit,
    Miss,
}

impl ShotStatus {
    pub fn from_scored(scored: bool) -> Self {
        if scored { Self::Hit } else { Self::Miss }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Miss => "Miss",
        }
    }
}
