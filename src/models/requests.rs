//! Request DTOs for the search client
//!
//! Defines the parameters callers pass to each search operation and how
//! they are flattened onto the wire.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::Result;

/// Sort direction shared by pet and message search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Filters for pet search (`GET /pets`).
///
/// Every field is optional. Absent fields and empty strings are dropped
/// before the request is issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PetSearchFilters {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pet_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breed: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    /// Free-text query
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl PetSearchFilters {
    /// Flattens the filters into string-valued query parameters.
    ///
    /// Parameters come out sorted by name, so identical filters always
    /// produce identical requests.
    pub fn to_query_params(&self) -> Result<Vec<(String, String)>> {
        let Value::Object(fields) = serde_json::to_value(self)? else {
            return Ok(Vec::new());
        };

        let mut params: Vec<(String, String)> = fields
            .into_iter()
            .filter_map(|(name, value)| {
                let rendered = match value {
                    Value::Null => return None,
                    Value::String(s) if s.is_empty() => return None,
                    Value::String(s) => s,
                    other => other.to_string(),
                };
                Some((name, rendered))
            })
            .collect();
        params.sort();
        Ok(params)
    }
}

/// Per-call switches shared by the cached search operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// Consult and populate the result cache (default: true)
    pub use_cache: bool,
}

impl SearchOptions {
    /// Options that skip the cache entirely.
    pub fn bypass_cache() -> Self {
        Self { use_cache: false }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self { use_cache: true }
    }
}

/// Message search ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageSortBy {
    Relevance,
    Date,
    Sender,
}

impl MessageSortBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageSortBy::Relevance => "relevance",
            MessageSortBy::Date => "date",
            MessageSortBy::Sender => "sender",
        }
    }
}

/// Parameters for message search (`GET /messages`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageSearchOptions {
    pub query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<MessageSortBy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_order: Option<SortOrder>,
}

impl MessageSearchOptions {
    /// Creates options for the given query with everything else unset.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// Builds the query string parameters in a fixed order.
    ///
    /// Dates are rendered as ISO-8601 with millisecond precision; empty
    /// strings and zero page/limit are treated as absent.
    pub fn to_query_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("q".to_string(), self.query.clone())];

        let mut push = |name: &str, value: Option<String>| {
            if let Some(value) = value.filter(|v| !v.is_empty()) {
                params.push((name.to_string(), value));
            }
        };

        push("conversationId", self.conversation_id.clone());
        push("senderId", self.sender_id.clone());
        push("startDate", self.start_date.as_ref().map(iso_millis));
        push("endDate", self.end_date.as_ref().map(iso_millis));
        push("messageType", self.message_type.clone());
        push("page", self.page.filter(|p| *p > 0).map(|p| p.to_string()));
        push("limit", self.limit.filter(|l| *l > 0).map(|l| l.to_string()));
        push("sortBy", self.sort_by.map(|s| s.as_str().to_string()));
        push("sortOrder", self.sort_order.map(|o| o.as_str().to_string()));

        params
    }
}

fn iso_millis(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Inclusive date window for faceted search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Geographic center and radius for proximity search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    pub radius: f64,
}

/// Optional refinements for faceted search.
///
/// Serialized verbatim next to the query in the POST body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedSearchOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_filters: Option<HashMap<String, Value>>,
    /// Facet names the backend should aggregate
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facets: Option<Vec<String>>,
    /// Per-field relevance weights
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boost: Option<HashMap<String, f64>>,
}

/// POST body for faceted search: the query plus the flattened options.
#[derive(Debug, Serialize)]
pub(crate) struct FacetedSearchRequest<'a> {
    pub query: &'a str,
    #[serde(flatten)]
    pub options: &'a AdvancedSearchOptions,
}

/// Which corpus suggestions are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionScope {
    Pets,
    Messages,
    #[default]
    All,
}

impl SuggestionScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            SuggestionScope::Pets => "pets",
            SuggestionScope::Messages => "messages",
            SuggestionScope::All => "all",
        }
    }
}

impl fmt::Display for SuggestionScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SuggestionScope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "pets" => Ok(SuggestionScope::Pets),
            "messages" => Ok(SuggestionScope::Messages),
            "all" => Ok(SuggestionScope::All),
            other => Err(format!("unknown suggestion scope '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_pet_filters_drop_absent_and_empty() {
        let filters = PetSearchFilters {
            pet_type: Some("dog".to_string()),
            breed: Some(String::new()),
            page: Some(1),
            limit: Some(12),
            ..Default::default()
        };

        let params = filters.to_query_params().unwrap();
        assert_eq!(
            params,
            vec![
                ("limit".to_string(), "12".to_string()),
                ("page".to_string(), "1".to_string()),
                ("type".to_string(), "dog".to_string()),
            ]
        );
    }

    #[test]
    fn test_pet_filters_empty() {
        let params = PetSearchFilters::default().to_query_params().unwrap();
        assert!(params.is_empty());
    }

    #[test]
    fn test_pet_filters_sort_order_wire_name() {
        let filters = PetSearchFilters {
            age_group: Some("young".to_string()),
            sort_order: Some(SortOrder::Desc),
            ..Default::default()
        };

        let params = filters.to_query_params().unwrap();
        assert!(params.contains(&("ageGroup".to_string(), "young".to_string())));
        assert!(params.contains(&("sortOrder".to_string(), "DESC".to_string())));
    }

    #[test]
    fn test_message_params_fixed_order_and_iso_dates() {
        let options = MessageSearchOptions {
            start_date: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
            end_date: Some(Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap()),
            sort_by: Some(MessageSortBy::Relevance),
            page: Some(0),
            ..MessageSearchOptions::new("test")
        };

        let params = options.to_query_params();
        assert_eq!(
            params,
            vec![
                ("q".to_string(), "test".to_string()),
                ("startDate".to_string(), "2024-01-01T00:00:00.000Z".to_string()),
                ("endDate".to_string(), "2024-01-31T00:00:00.000Z".to_string()),
                ("sortBy".to_string(), "relevance".to_string()),
            ]
        );
    }

    #[test]
    fn test_faceted_request_flattens_options() {
        let options = AdvancedSearchOptions {
            include_types: Some(vec!["pet".to_string()]),
            location: Some(GeoLocation {
                lat: 40.7128,
                lng: -74.006,
                radius: 50.0,
            }),
            ..Default::default()
        };
        let body = serde_json::to_value(FacetedSearchRequest {
            query: "friendly dog",
            options: &options,
        })
        .unwrap();

        assert_eq!(body["query"], "friendly dog");
        assert_eq!(body["includeTypes"][0], "pet");
        assert_eq!(body["location"]["radius"], 50.0);
        assert!(body.get("facets").is_none());
    }

    #[test]
    fn test_suggestion_scope_parse() {
        assert_eq!("pets".parse::<SuggestionScope>(), Ok(SuggestionScope::Pets));
        assert_eq!(SuggestionScope::default(), SuggestionScope::All);
        assert!("everything".parse::<SuggestionScope>().is_err());
    }

    #[test]
    fn test_search_options_default_uses_cache() {
        assert!(SearchOptions::default().use_cache);
        assert!(!SearchOptions::bypass_cache().use_cache);
    }
}
