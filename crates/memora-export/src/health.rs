//! Daily health summary over the medication schedule and the day's routine.

use std::collections::HashMap;

use jiff::Timestamp;
use memora_core::models::health::{ActivityKind, DailyActivity, Medication};
use serde::Serialize;

use crate::labels;

/// Completion rate (0–1) below which the routine is judged too heavy.
const COMPLETION_TARGET: f64 = 0.7;

/// Fewer cognitive activities than this earns a recommendation.
const MIN_COGNITIVE_ACTIVITIES: usize = 2;

/// How many activity types [`HealthSummary::top_activity_types`] keeps.
const TOP_TYPES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthSummary {
    pub total_medications: usize,
    /// Names of medications whose next dose is overdue.
    pub overdue_medications: Vec<String>,
    pub total_activities: usize,
    pub completed_activities: usize,
    /// Percentage of activities completed, 0 when none are planned.
    pub completion_rate: f64,
    /// Portuguese names of the most planned activity types, most frequent
    /// first. Ties keep first-seen order.
    pub top_activity_types: Vec<&'static str>,
    pub recommendations: Vec<String>,
}

impl HealthSummary {
    pub fn new(medications: &[Medication], activities: &[DailyActivity], now: Timestamp) -> Self {
        let overdue_medications: Vec<String> = medications
            .iter()
            .filter(|m| m.is_overdue(now))
            .map(|m| m.name.clone())
            .collect();

        let completed = activities.iter().filter(|a| a.completed).count();
        let ratio = if activities.is_empty() {
            0.0
        } else {
            completed as f64 / activities.len() as f64
        };
        let cognitive = activities
            .iter()
            .filter(|a| a.kind == ActivityKind::Cognitive)
            .count();

        let mut recommendations = Vec::new();
        if !overdue_medications.is_empty() {
            recommendations.push("Importante regularizar horários das medicações".to_string());
        }
        if ratio < COMPLETION_TARGET {
            recommendations.push("Considerar simplificar a rotina diária".to_string());
        }
        if cognitive < MIN_COGNITIVE_ACTIVITIES {
            recommendations.push("Aumentar atividades de estimulação cognitiva".to_string());
        }

        Self {
            total_medications: medications.len(),
            overdue_medications,
            total_activities: activities.len(),
            completed_activities: completed,
            completion_rate: ratio * 100.0,
            top_activity_types: top_activity_types(activities),
            recommendations,
        }
    }
}

fn top_activity_types(activities: &[DailyActivity]) -> Vec<&'static str> {
    let mut first_seen: Vec<ActivityKind> = Vec::new();
    let mut counts: HashMap<ActivityKind, usize> = HashMap::new();
    for activity in activities {
        let count = counts.entry(activity.kind).or_insert(0);
        if *count == 0 {
            first_seen.push(activity.kind);
        }
        *count += 1;
    }

    // Stable sort keeps first-seen order among equal counts.
    first_seen.sort_by_key(|kind| std::cmp::Reverse(counts[kind]));
    first_seen
        .into_iter()
        .take(TOP_TYPES)
        .map(labels::activity)
        .collect()
}
