// Search criteria for the paginated query endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Sort direction for paginated queries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sort {
    #[default]
    Asc,
    Desc,
}

/// Criteria for the user search endpoint. `query_string`,
/// `number_of_results`, and `start_row` drive the free-text variant; the
/// remaining fields narrow structured searches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSearchCriteria {
    pub email: Option<String>,
    pub from_last_login_instant: Option<DateTime<Utc>>,
    pub full_name: Option<String>,
    pub id: Option<Uuid>,
    pub number_of_results: u32,
    pub query_string: Option<String>,
    pub sort: Sort,
    pub start_row: u32,
    pub to_last_login_instant: Option<DateTime<Utc>>,
    pub username: Option<String>,
}

impl Default for UserSearchCriteria {
    fn default() -> Self {
        UserSearchCriteria {
            email: None,
            from_last_login_instant: None,
            full_name: None,
            id: None,
            number_of_results: 25,
            query_string: None,
            sort: Sort::Asc,
            start_row: 0,
            to_last_login_instant: None,
            username: None,
        }
    }
}

impl UserSearchCriteria {
    pub fn with_query_string(query_string: impl Into<String>) -> Self {
        UserSearchCriteria {
            query_string: Some(query_string.into()),
            ..UserSearchCriteria::default()
        }
    }
}

/// Criteria for the audit log search endpoint.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AuditLogSearchCriteria {
    pub end: Option<DateTime<Utc>>,
    pub message: Option<String>,
    pub number_of_results: u32,
    pub order_by: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub start_row: u32,
    pub user: Option<String>,
}

impl Default for AuditLogSearchCriteria {
    fn default() -> Self {
        AuditLogSearchCriteria {
            end: None,
            message: None,
            number_of_results: 25,
            order_by: None,
            start: None,
            start_row: 0,
            user: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_paginate_from_the_first_row() {
        let criteria = UserSearchCriteria::default();
        assert_eq!(criteria.start_row, 0);
        assert_eq!(criteria.number_of_results, 25);
        assert_eq!(criteria.sort, Sort::Asc);
    }
}
