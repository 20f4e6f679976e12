//! Summary statistics for the overview page

use serde::{Deserialize, Serialize};

use crate::student::StudentRecord;

/// Aggregates over the full record collection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub total_count: usize,
    /// Mean GPA rounded to two decimals, 0 when empty
    pub average_gpa: f64,
    /// Most frequent major, first encountered wins ties, "" when empty
    pub top_major: String,
    pub graduating_this_year: usize,
}

impl Overview {
    /// Computes the overview in one pass over `records`.
    pub fn compute(records: &[StudentRecord], current_year: i32) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let mut gpa_sum = 0.0;
        let mut graduating = 0;
        // (major, count) in first-seen order
        let mut majors: Vec<(&str, usize)> = Vec::new();

        for record in records {
            let profile = &record.profile;
            gpa_sum += profile.gpa;
            if profile.graduation_year == current_year {
                graduating += 1;
            }
            match majors.iter_mut().find(|(m, _)| *m == profile.major) {
                Some((_, count)) => *count += 1,
                None => majors.push((profile.major.as_str(), 1)),
            }
        }

        let mut top: Option<(&str, usize)> = None;
        for (major, count) in majors {
            if top.map_or(true, |(_, best)| count > best) {
                top = Some((major, count));
            }
        }

        Self {
            total_count: records.len(),
            average_gpa: round2(gpa_sum / records.len() as f64),
            top_major: top.map(|(m, _)| m.to_string()).unwrap_or_default(),
            graduating_this_year: graduating,
        }
    }

    /// Average GPA as displayed on the card, always two decimals
    pub fn average_gpa_display(&self) -> String {
        format!("{:.2}", self.average_gpa)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
