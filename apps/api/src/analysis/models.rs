use serde::{Deserialize, Serialize};

/// Typed outcome of one skill analysis. Immutable once constructed.
///
/// Serializes to exactly the four keys the model is asked to produce, so the same JSON
/// shape flows from the completion service through to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatchResult {
    matched_skills: Vec<String>,
    missing_skills: Vec<String>,
    additional_skills: Vec<String>,
    match_percentage: f64,
}

impl SkillMatchResult {
    pub fn new(
        matched_skills: Vec<String>,
        missing_skills: Vec<String>,
        additional_skills: Vec<String>,
        match_percentage: f64,
    ) -> Self {
        Self {
            matched_skills,
            missing_skills,
            additional_skills,
            match_percentage,
        }
    }

    /// Skills present in both the resume and the job description.
    pub fn matched_skills(&self) -> &[String] {
        &self.matched_skills
    }

    /// Skills the job description requires that the resume lacks.
    pub fn missing_skills(&self) -> &[String] {
        &self.missing_skills
    }

    /// Resume skills the job description does not ask for.
    pub fn additional_skills(&self) -> &[String] {
        &self.additional_skills
    }

    pub fn match_percentage(&self) -> f64 {
        self.match_percentage
    }

    pub fn band(&self) -> MatchBand {
        MatchBand::from_percentage(self.match_percentage)
    }

    /// Returns a copy with each skill list sorted alphabetically, for display.
    pub fn sorted(&self) -> Self {
        let sort = |skills: &[String]| {
            let mut skills = skills.to_vec();
            skills.sort();
            skills
        };
        Self {
            matched_skills: sort(&self.matched_skills),
            missing_skills: sort(&self.missing_skills),
            additional_skills: sort(&self.additional_skills),
            match_percentage: self.match_percentage,
        }
    }
}

/// Coarse classification of a match percentage.
/// Strong ≥ 70, Moderate ≥ 50, Weak below that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchBand {
    Strong,
    Moderate,
    Weak,
}

impl MatchBand {
    pub const STRONG_THRESHOLD: f64 = 70.0;
    pub const MODERATE_THRESHOLD: f64 = 50.0;

    pub fn from_percentage(percentage: f64) -> Self {
        if percentage >= Self::STRONG_THRESHOLD {
            MatchBand::Strong
        } else if percentage >= Self::MODERATE_THRESHOLD {
            MatchBand::Moderate
        } else {
            MatchBand::Weak
        }
    }
}
