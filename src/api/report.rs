// Reporting endpoint envelopes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::audit::{IntervalCount, RawLogin};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyActiveUserReportResponse {
    pub daily_active_users: Vec<IntervalCount>,
    pub total: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoginReportResponse {
    pub logins: Vec<IntervalCount>,
    pub total: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyActiveUserReportResponse {
    pub monthly_active_users: Vec<IntervalCount>,
    pub total: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationReportResponse {
    pub registrations: Vec<IntervalCount>,
    pub total: i64,
}

/// Lifetime login and registration counts for one application.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Totals {
    pub logins: i64,
    pub registrations: i64,
}

/// The totals report: per-application counts plus the global registration
/// count.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TotalsReportResponse {
    pub application_totals: BTreeMap<Uuid, Totals>,
    pub global_registrations: i64,
}

/// One page of a user's login history, most recent first.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserLoginReportResponse {
    pub logins: Vec<RawLogin>,
}
