mod expand;
mod search;
mod types;

pub use types::{PlanError, PlanOptions};

use crate::holiday::{is_weekend, HolidayError, HolidayProvider};
use crate::model::{Country, ExtraHolidays, LeaveRequest, RestPeriod, SearchRange};
use chrono::NaiveDate;

/// Planner : façade du calcul de repos, autour d'un fournisseur de fériés
/// injecté et d'un pays fixé à la construction.
#[derive(Debug)]
pub struct Planner<'p> {
    provider: &'p dyn HolidayProvider,
    country: Country,
}

impl<'p> Planner<'p> {
    pub fn new(provider: &'p dyn HolidayProvider, country: Country) -> Self {
        Self { provider, country }
    }

    pub fn country(&self) -> &Country {
        &self.country
    }

    /// Vrai si `date` est chômé : week-end, férié national, ou présent dans
    /// `extra`. Pur, sans effet de bord.
    pub fn is_non_working_day(
        &self,
        date: NaiveDate,
        extra: &ExtraHolidays,
    ) -> Result<bool, HolidayError> {
        if is_weekend(date) {
            return Ok(true);
        }
        if self.provider.is_holiday(date, &self.country)? {
            return Ok(true);
        }
        Ok(extra.contains(&date))
    }

    /// Période de repos contiguë maximale contenant la fenêtre demandée.
    pub fn rest_period(
        &self,
        request: &LeaveRequest,
        extra: &ExtraHolidays,
        opts: PlanOptions,
    ) -> Result<RestPeriod, PlanError> {
        expand::rest_period(self, request, extra, opts)
    }

    /// Meilleures fenêtres de congé dans une plage, triées par repos total
    /// décroissant (départ le plus tôt d'abord à égalité).
    pub fn recommend(
        &self,
        range: SearchRange,
        leave_days: u32,
        extra: &ExtraHolidays,
        opts: PlanOptions,
    ) -> Result<Vec<RestPeriod>, PlanError> {
        search::recommend(self, range, leave_days, extra, opts)
    }
}
