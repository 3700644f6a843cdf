//! Audit calendar arithmetic.
//!
//! The audit year runs 1 April to 31 March: a date in January-March belongs
//! to the audit year that started the previous April. Submissions are only
//! accepted for a bounded window of audit years, so resolution outside that
//! window is an error rather than a silent extrapolation.

use chrono::{Datelike, Days, Months, NaiveDate};
use smallvec::SmallVec;

use crate::error::{AuditError, Result};

/// First day of the earliest supported audit year.
pub const AUDIT_WINDOW_START: NaiveDate = match NaiveDate::from_ymd_opt(2024, 4, 1) {
    Some(date) => date,
    None => panic!("invalid audit window start"),
};

/// Last day of the latest supported audit year.
pub const AUDIT_WINDOW_END: NaiveDate = match NaiveDate::from_ymd_opt(2027, 3, 31) {
    Some(date) => date,
    None => panic!("invalid audit window end"),
};

/// Inclusive start and end dates of one audit quarter.
pub type QuarterRange = (NaiveDate, NaiveDate);

/// Resolves the audit period (start and end dates, inclusive) containing
/// `date`.
///
/// Returns [`AuditError::UnsupportedAuditDate`] for dates before
/// [`AUDIT_WINDOW_START`] or after [`AUDIT_WINDOW_END`].
pub fn audit_period_for_date(date: NaiveDate) -> Result<(NaiveDate, NaiveDate)> {
    if date < AUDIT_WINDOW_START || date > AUDIT_WINDOW_END {
        return Err(AuditError::UnsupportedAuditDate(date));
    }

    let audit_year = if date.month() < 4 {
        date.year() - 1
    } else {
        date.year()
    };

    // 1 April / 31 March exist for every year
    let start = NaiveDate::from_ymd_opt(audit_year, 4, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(audit_year + 1, 3, 31).unwrap();
    Ok((start, end))
}

/// Splits an audit period into successive three-month quarters.
///
/// Each quarter spans `[cursor, cursor + 3 months - 1 day]`, with the final
/// quarter clipped to `audit_end_date`. A standard April-March audit year
/// yields exactly four quarters.
#[must_use]
pub fn quarters_for_audit_period(
    audit_start_date: NaiveDate,
    audit_end_date: NaiveDate,
) -> SmallVec<[QuarterRange; 4]> {
    let mut quarters = SmallVec::new();
    let mut cursor = audit_start_date;
    while cursor <= audit_end_date {
        let next = cursor + Months::new(3);
        let quarter_end = (next - Days::new(1)).min(audit_end_date);
        quarters.push((cursor, quarter_end));
        cursor = next;
    }
    quarters
}

/// Returns the 1-based quarter number of `date` within its own audit period.
pub fn quarter_for_visit_date(date: NaiveDate) -> Result<u8> {
    let (start, end) = audit_period_for_date(date)?;
    for (index, (quarter_start, quarter_end)) in
        quarters_for_audit_period(start, end).iter().enumerate()
    {
        if date >= *quarter_start && date <= *quarter_end {
            return Ok(index as u8 + 1);
        }
    }
    Err(AuditError::QuarterOutOfRange(date))
}

/// Start date of the audit year containing `today`.
pub fn current_audit_year_start_date(today: NaiveDate) -> Result<NaiveDate> {
    audit_period_for_date(today).map(|(start, _)| start)
}
