use crate::holiday::HolidayError;
use thiserror::Error;

/// Options de calcul
#[derive(Debug, Clone, Copy)]
pub struct PlanOptions {
    /// Nombre de recommandations retournées au maximum.
    pub top_k: usize,
    /// Borne de marche par direction lors de l'extension d'une fenêtre.
    pub max_expansion_days: u32,
    /// Longueur maximale de la plage balayée, en jours.
    pub max_range_days: u32,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            top_k: 3,
            max_expansion_days: 60,
            max_range_days: 730,
        }
    }
}

#[derive(Error, Debug)]
pub enum PlanError {
    #[error("invalid leave duration: {0} day(s), must be >= 1")]
    InvalidLeaveDays(u32),
    #[error("search range spans {got} days, cap is {cap}")]
    RangeTooLarge { got: i64, cap: u32 },
    #[error("rest expansion exceeded {0} days on one side of the leave window")]
    ExpansionBoundExceeded(u32),
    #[error(transparent)]
    Holiday(#[from] HolidayError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
