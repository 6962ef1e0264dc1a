/**
 * REST Gateway Operations
 *
 * Thin helpers over `/rest/v1/{table}`. All of them run with the service-role
 * key: this service only touches tables on behalf of trusted server code, and
 * the login lookup must not expose `profiles` to anonymous clients.
 *
 * Filters use the gateway's operator syntax, e.g. `("username", "eq.ana")`
 * or `("attempted_at", "gte.2024-01-01T00:00:00Z")`.
 */

use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::backend::platform::client::{send_empty, send_json, Credential, PlatformClient};
use crate::backend::platform::error::PlatformError;

/// Equality filter value
pub fn eq(value: impl std::fmt::Display) -> String {
    format!("eq.{}", value)
}

/// Greater-or-equal filter value
pub fn gte(value: impl std::fmt::Display) -> String {
    format!("gte.{}", value)
}

impl PlatformClient {
    /// Insert one row without asking for it back
    pub async fn insert<T: Serialize + ?Sized>(&self, table: &str, row: &T) -> Result<(), PlatformError> {
        let path = format!("/rest/v1/{}", table);
        let request = self
            .request(Method::POST, &path, Credential::ServiceRole)
            .header("Prefer", "return=minimal")
            .json(row);
        send_empty(request).await
    }

    /// Select rows matching all `filters`
    ///
    /// `columns` is passed as the `select` parameter; `limit` caps the number
    /// of rows returned.
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        columns: &str,
        filters: &[(&str, String)],
        limit: Option<usize>,
    ) -> Result<Vec<T>, PlatformError> {
        let path = format!("/rest/v1/{}", table);
        let mut query: Vec<(&str, String)> = Vec::with_capacity(filters.len() + 2);
        query.push(("select", columns.to_string()));
        query.extend(filters.iter().cloned());
        if let Some(limit) = limit {
            query.push(("limit", limit.to_string()));
        }

        let request = self
            .request(Method::GET, &path, Credential::ServiceRole)
            .query(&query);
        send_json(request).await
    }
}
