//! Date range of the stats report.

use super::{non_empty, FormError};
use crate::models::ReportWindow;
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize)]
pub struct ReportRangeQuery {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl ReportRangeQuery {
    /// Both dates give `[start 00:00:00, end 23:59:59]` in UTC; anything less
    /// is the all-time report.
    pub fn window(&self) -> Result<ReportWindow, FormError> {
        let (Some(start), Some(end)) = (non_empty(&self.start), non_empty(&self.end)) else {
            return Ok(ReportWindow::ALL_TIME);
        };
        let start = parse_date(start)?;
        let end = parse_date(end)?;
        if start > end {
            return Err(FormError::InvertedRange);
        }

        Ok(ReportWindow {
            start_time: start.and_time(NaiveTime::MIN).and_utc().timestamp(),
            end_time: end
                .and_hms_opt(23, 59, 59)
                .ok_or(FormError::InvalidDate)?
                .and_utc()
                .timestamp(),
        })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, FormError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT).map_err(|_| FormError::InvalidDate)
}
