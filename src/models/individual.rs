//! The Individual entity

use crate::models::types::Gender;
use serde::{Deserialize, Serialize};

/// A member of the population to be assigned a group
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Individual {
    /// Stable identifier used by class rosters and sibling relations
    pub id: String,
    /// Secondary identifier carried through to exports, if any
    pub external_id: Option<String>,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Gender of the individual
    pub gender: Gender,
    /// Cohort tag (grade level), if known
    pub grade: Option<String>,
}

impl Individual {
    /// Create a new Individual with minimal required information
    #[must_use]
    pub fn new(id: impl Into<String>, gender: Gender) -> Self {
        Self {
            id: id.into(),
            external_id: None,
            first_name: String::new(),
            last_name: String::new(),
            gender,
            grade: None,
        }
    }

    /// Full display name
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}
