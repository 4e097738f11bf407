use super::{types::PlanError, PlanOptions, Planner};
use crate::model::{ExtraHolidays, LeaveRequest, RestPeriod, SearchRange};
use anyhow::Context;
use chrono::Duration;

pub(super) fn recommend(
    planner: &Planner<'_>,
    range: SearchRange,
    leave_days: u32,
    extra: &ExtraHolidays,
    opts: PlanOptions,
) -> Result<Vec<RestPeriod>, PlanError> {
    if leave_days < 1 {
        return Err(PlanError::InvalidLeaveDays(leave_days));
    }

    let span = range.len_days();
    if span > i64::from(opts.max_range_days) {
        return Err(PlanError::RangeTooLarge {
            got: span,
            cap: opts.max_range_days,
        });
    }

    // Balayage exhaustif au pas d'un jour : tout départ dont la fenêtre
    // tient entière dans la plage. Une plage inversée ne produit rien.
    let offset = Duration::days(i64::from(leave_days) - 1);
    let mut results = Vec::new();
    let mut cur = range.start;
    loop {
        let Some(leave_end) = cur.checked_add_signed(offset) else {
            break;
        };
        if leave_end > range.end {
            break;
        }
        let request = LeaveRequest::new(cur, leave_days).map_err(anyhow::Error::msg)?;
        results.push(planner.rest_period(&request, extra, opts)?);
        cur = cur.succ_opt().context("date overflow")?;
    }

    // Tri stable sur l'ordre d'insertion croissant par date : à repos égal,
    // le départ le plus tôt reste devant.
    results.sort_by(|a, b| b.total_rest_days.cmp(&a.total_rest_days));
    results.truncate(opts.top_k);
    Ok(results)
}
