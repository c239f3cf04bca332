use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Triage bucket derived from a lead score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Recommendation {
    Hot,
    Warm,
    Cold,
    Nurture,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown recommendation `{0}`, expected one of hot, warm, cold, nurture")]
pub struct UnknownRecommendation(pub String);

impl Recommendation {
    /// Every bucket, best first
    pub const ALL: [Recommendation; 4] = [
        Recommendation::Hot,
        Recommendation::Warm,
        Recommendation::Cold,
        Recommendation::Nurture,
    ];

    /// Bucket for a score
    /// Hot (80+), Warm (60-79), Cold (40-59), Nurture (0-39)
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=u8::MAX => Recommendation::Hot,
            60..=79 => Recommendation::Warm,
            40..=59 => Recommendation::Cold,
            _ => Recommendation::Nurture,
        }
    }

    /// Lowest score that falls into this bucket
    pub fn min_score(&self) -> u8 {
        match self {
            Recommendation::Hot => 80,
            Recommendation::Warm => 60,
            Recommendation::Cold => 40,
            Recommendation::Nurture => 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Hot => "hot",
            Recommendation::Warm => "warm",
            Recommendation::Cold => "cold",
            Recommendation::Nurture => "nurture",
        }
    }

    /// Badge color (for UI)
    pub fn color(&self) -> &'static str {
        match self {
            Recommendation::Hot => "red",
            Recommendation::Warm => "orange",
            Recommendation::Cold => "blue",
            Recommendation::Nurture => "gray",
        }
    }
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Recommendation {
    type Err = UnknownRecommendation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hot" => Ok(Recommendation::Hot),
            "warm" => Ok(Recommendation::Warm),
            "cold" => Ok(Recommendation::Cold),
            "nurture" => Ok(Recommendation::Nurture),
            _ => Err(UnknownRecommendation(s.to_string())),
        }
    }
}
