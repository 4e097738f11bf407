use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Jours chômés supplémentaires fournis par l'appelant (entrées uniques,
/// ordre indifférent). Toujours passé explicitement, jamais implicite.
pub type ExtraHolidays = BTreeSet<NaiveDate>;

/// Code pays pour la résolution des jours fériés (ex. `KR`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country(String);

impl Country {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().trim().to_ascii_uppercase())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Demande de congé : un bloc contigu de `leave_days` jours posés à partir
/// de `leave_start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub leave_start: NaiveDate,
    pub leave_days: u32,
}

impl LeaveRequest {
    /// Crée une demande en validant `leave_days >= 1`.
    pub fn new(leave_start: NaiveDate, leave_days: u32) -> Result<Self, String> {
        if leave_days < 1 {
            return Err("leave_days must be at least 1".to_string());
        }
        Ok(Self {
            leave_start,
            leave_days,
        })
    }

    /// Dernier jour de congé consommé.
    pub fn leave_end(&self) -> NaiveDate {
        self.leave_start + Duration::days(i64::from(self.leave_days) - 1)
    }
}

/// Période de repos effective autour d'une fenêtre de congé.
///
/// Invariants : `rest_start <= leave_start <= leave_end <= rest_end` et
/// `total_rest_days = (rest_end - rest_start en jours) + 1 >= leave_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RestPeriod {
    pub leave_start: NaiveDate,
    pub leave_end: NaiveDate,
    pub rest_start: NaiveDate,
    pub rest_end: NaiveDate,
    pub leave_days: u32,
    pub total_rest_days: i64,
}

/// Plage de recherche `[start, end]` en dates calendaires.
///
/// Une plage inversée (`end < start`) n'est pas une erreur : elle ne contient
/// aucun départ candidat.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SearchRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Longueur en jours, bornes incluses (négative ou nulle si inversée).
    pub fn len_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days() + 1
    }
}
