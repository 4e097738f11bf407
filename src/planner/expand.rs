use super::{types::PlanError, PlanOptions, Planner};
use crate::model::{ExtraHolidays, LeaveRequest, RestPeriod};
use chrono::Duration;

pub(super) fn rest_period(
    planner: &Planner<'_>,
    request: &LeaveRequest,
    extra: &ExtraHolidays,
    opts: PlanOptions,
) -> Result<RestPeriod, PlanError> {
    let leave_end = request.leave_end();

    // Extension vers l'arrière : tant que la veille est chômée.
    let mut rest_start = request.leave_start;
    let mut walked = 0u32;
    while planner.is_non_working_day(rest_start - Duration::days(1), extra)? {
        if walked >= opts.max_expansion_days {
            return Err(PlanError::ExpansionBoundExceeded(opts.max_expansion_days));
        }
        rest_start -= Duration::days(1);
        walked += 1;
    }

    // Extension vers l'avant : tant que le lendemain est chômé.
    let mut rest_end = leave_end;
    walked = 0;
    while planner.is_non_working_day(rest_end + Duration::days(1), extra)? {
        if walked >= opts.max_expansion_days {
            return Err(PlanError::ExpansionBoundExceeded(opts.max_expansion_days));
        }
        rest_end += Duration::days(1);
        walked += 1;
    }

    let total_rest_days = rest_end.signed_duration_since(rest_start).num_days() + 1;

    Ok(RestPeriod {
        leave_start: request.leave_start,
        leave_end,
        rest_start,
        rest_end,
        leave_days: request.leave_days,
        total_rest_days,
    })
}
