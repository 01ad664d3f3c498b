use std::cmp::Reverse;

use jiff::{SignedDuration, Span, Timestamp, ToSpan, Zoned};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// How far ahead [`upcoming_medications`] looks.
pub const UPCOMING_WINDOW: SignedDuration = SignedDuration::from_hours(1);

/// Sort key for activities without a scheduled time.
const END_OF_DAY: &str = "23:59";

/// A medication on the patient's current schedule.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    #[serde(default)]
    pub time_of_day: Vec<String>,
    #[serde(default)]
    pub instructions: String,
    pub last_taken: Option<jiff::Timestamp>,
    pub next_due: Option<jiff::Timestamp>,
}

impl Medication {
    /// Whether the next dose is due before `now`.
    pub fn is_overdue(&self, now: jiff::Timestamp) -> bool {
        self.next_due.is_some_and(|due| due < now)
    }

    /// Whether the next dose is overdue or due within `window` of `now`.
    pub fn is_due_within(&self, now: Timestamp, window: SignedDuration) -> bool {
        self.next_due.is_some_and(|due| due.duration_since(now) <= window)
    }

    pub fn dose_frequency(&self) -> DoseFrequency {
        DoseFrequency::parse(&self.frequency)
    }

    /// Record a dose taken at `now` and schedule the next one.
    ///
    /// Day, week and month steps follow the calendar of `now`'s time zone.
    pub fn mark_taken(&mut self, now: &Zoned) -> Result<(), CoreError> {
        let next = now.checked_add(self.dose_frequency().interval())?;
        self.last_taken = Some(now.timestamp());
        self.next_due = Some(next.timestamp());
        Ok(())
    }
}

/// Dosing interval parsed from a medication's free-text frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DoseFrequency {
    Daily,
    TwiceDaily,
    Weekly,
    Monthly,
}

impl DoseFrequency {
    /// Case-insensitive. Anything unrecognized is treated as daily.
    pub fn parse(frequency: &str) -> Self {
        match frequency.trim().to_lowercase().as_str() {
            "twice daily" | "2x/dia" | "duas vezes ao dia" | "12/12h" => Self::TwiceDaily,
            "weekly" | "semanal" | "1x/semana" => Self::Weekly,
            "monthly" | "mensal" | "1x/mês" => Self::Monthly,
            _ => Self::Daily,
        }
    }

    pub fn interval(self) -> Span {
        match self {
            Self::Daily => 1.day(),
            Self::TwiceDaily => 12.hours(),
            Self::Weekly => 1.week(),
            Self::Monthly => 1.month(),
        }
    }
}

/// Medications whose next dose is overdue or due within [`UPCOMING_WINDOW`].
pub fn upcoming_medications(medications: &[Medication], now: Timestamp) -> Vec<&Medication> {
    medications
        .iter()
        .filter(|m| m.is_due_within(now, UPCOMING_WINDOW))
        .collect()
}

/// Medications ordered by next due time. Unscheduled ones come last.
pub fn medication_schedule(medications: &[Medication]) -> Vec<&Medication> {
    let mut schedule: Vec<&Medication> = medications.iter().collect();
    schedule.sort_by_key(|m| (m.next_due.is_none(), m.next_due));
    schedule
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DailyActivity {
    pub id: Uuid,
    pub kind: ActivityKind,
    pub name: String,
    pub completed: bool,
    pub time_completed: Option<jiff::Timestamp>,
    pub notes: Option<String>,
    pub importance: Importance,
    pub scheduled_time: Option<String>,
}

impl DailyActivity {
    /// Mark done at `now`. Existing notes are kept when `notes` is `None`.
    pub fn mark_completed(&mut self, now: Timestamp, notes: Option<String>) {
        self.completed = true;
        self.time_completed = Some(now);
        if notes.is_some() {
            self.notes = notes;
        }
    }

    /// Back to pending for a new day.
    pub fn reset(&mut self) {
        self.completed = false;
        self.time_completed = None;
        self.notes = None;
    }
}

/// Activities still to do, earliest scheduled first. Unscheduled ones sort
/// as end of day.
pub fn pending_activities(activities: &[DailyActivity]) -> Vec<&DailyActivity> {
    let mut pending: Vec<&DailyActivity> = activities.iter().filter(|a| !a.completed).collect();
    pending.sort_by(|a, b| {
        let a = a.scheduled_time.as_deref().unwrap_or(END_OF_DAY);
        let b = b.scheduled_time.as_deref().unwrap_or(END_OF_DAY);
        a.cmp(b)
    });
    pending
}

/// Completed activities, most recent first.
pub fn completed_activities(activities: &[DailyActivity]) -> Vec<&DailyActivity> {
    let mut done: Vec<&DailyActivity> = activities.iter().filter(|a| a.completed).collect();
    done.sort_by_key(|a| Reverse(a.time_completed));
    done
}

pub fn activities_of_kind(activities: &[DailyActivity], kind: ActivityKind) -> Vec<&DailyActivity> {
    activities.iter().filter(|a| a.kind == kind).collect()
}

pub fn reset_daily_activities(activities: &mut [DailyActivity]) {
    activities.iter_mut().for_each(DailyActivity::reset);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ActivityKind {
    Hygiene,
    Meal,
    Exercise,
    Social,
    Cognitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Importance {
    Low,
    Medium,
    High,
}
