//! Salary with overtime.

use crate::error::{PrimerError, Result};

/// Hours paid at the base rate before overtime starts.
pub const REGULAR_HOURS: i64 = 40;

/// Overtime hours are paid at this multiple of the base rate.
pub const OVERTIME_MULTIPLIER: i64 = 2;

/// Weekly pay for `hours_worked` at `hourly_rate`.
///
/// Hours up to [`REGULAR_HOURS`] are paid at the base rate, every hour beyond
/// at [`OVERTIME_MULTIPLIER`] times the base rate.
pub fn salary(hours_worked: i64, hourly_rate: i64) -> Result<i64> {
    let pay = if hours_worked <= REGULAR_HOURS {
        hours_worked.checked_mul(hourly_rate)
    } else {
        overtime_pay(hours_worked, hourly_rate)
    };
    pay.ok_or_else(|| PrimerError::overflow("the salary"))
}

fn overtime_pay(hours_worked: i64, hourly_rate: i64) -> Option<i64> {
    let regular = REGULAR_HOURS.checked_mul(hourly_rate)?;
    let extra_hours = hours_worked - REGULAR_HOURS;
    let extra_rate = hourly_rate.checked_mul(OVERTIME_MULTIPLIER)?;
    regular.checked_add(extra_hours.checked_mul(extra_rate)?)
}
