//! HTTP response types for the Webex API SDK.
//!
//! This module provides the [`HttpResponse`] type, a raw
//! status/headers/body triple with the Webex-relevant headers parsed out,
//! and [`PaginationInfo`] for the RFC 5988 `Link` header.

use std::collections::HashMap;

use serde_json::Value;

use crate::clients::errors::MalformedResponseError;

/// Wait used when a 429 response carries no usable `Retry-After` header.
pub const DEFAULT_RETRY_AFTER: u64 = 15;

/// Pagination links parsed from the `Link` header.
///
/// Webex uses opaque cursor URLs: each `rel="next"` link is a complete,
/// absolute URL for the following page, so no query reconstruction is
/// needed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PaginationInfo {
    /// URL of the previous page, if available.
    pub prev_url: Option<String>,
    /// URL of the next page, if available.
    pub next_url: Option<String>,
}

impl PaginationInfo {
    /// Parses pagination links from a `Link` header value.
    ///
    /// The header format is `<url>; rel="next", <url>; rel="prev"`. Commas
    /// inside the angle brackets belong to the URL and do not split links.
    ///
    /// # Example
    ///
    /// ```rust
    /// use webex_api::clients::PaginationInfo;
    ///
    /// let info = PaginationInfo::parse_link_header(
    ///     r#"<https://webexapis.com/v1/rooms?cursor=abc>; rel="next""#,
    /// );
    /// assert_eq!(info.next_url.as_deref(), Some("https://webexapis.com/v1/rooms?cursor=abc"));
    /// ```
    #[must_use]
    pub fn parse_link_header(header_value: &str) -> Self {
        let mut result = Self::default();

        for link in split_links(header_value) {
            let mut parts = link.split(';');

            let url = parts
                .next()
                .map(str::trim)
                .filter(|s| s.starts_with('<') && s.ends_with('>'))
                .map(|s| s.trim_start_matches('<').trim_end_matches('>'));

            let rels: Vec<&str> = parts
                .filter_map(|part| {
                    let (key, value) = part.split_once('=')?;
                    (key.trim().eq_ignore_ascii_case("rel")).then(|| value.trim().trim_matches('"'))
                })
                .flat_map(str::split_whitespace)
                .collect();

            if let Some(url) = url {
                for rel in rels {
                    match rel.to_ascii_lowercase().as_str() {
                        "next" => result.next_url = Some(url.to_string()),
                        "prev" | "previous" => result.prev_url = Some(url.to_string()),
                        _ => {}
                    }
                }
            }
        }

        result
    }
}

/// Splits a `Link` header into individual link values, ignoring commas
/// that appear inside `<...>`.
fn split_links(header_value: &str) -> Vec<&str> {
    let mut links = Vec::new();
    let mut depth = 0usize;
    let mut start = 0usize;

    for (index, ch) in header_value.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                links.push(header_value[start..index].trim());
                start = index + 1;
            }
            _ => {}
        }
    }
    links.push(header_value[start..].trim());

    links.into_iter().filter(|l| !l.is_empty()).collect()
}

/// A raw HTTP response from the Webex API.
///
/// Header names are stored lowercased; a header may carry several values.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// The HTTP reason phrase, if known.
    pub reason: Option<String>,
    /// Response headers (lowercase names, possibly multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Pagination links from the `Link` header.
    pub pagination: PaginationInfo,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the `Link` header.
    ///
    /// Header names are lowercased; values of names that differ only in
    /// case are merged.
    #[must_use]
    pub fn new(
        code: u16,
        reason: Option<String>,
        headers: HashMap<String, Vec<String>>,
        body: String,
    ) -> Self {
        let mut normalized: HashMap<String, Vec<String>> = HashMap::with_capacity(headers.len());
        for (name, values) in headers {
            normalized
                .entry(name.to_ascii_lowercase())
                .or_default()
                .extend(values);
        }
        let headers = normalized;

        let pagination = headers
            .get("link")
            .map(|values| PaginationInfo::parse_link_header(&values.join(", ")))
            .unwrap_or_default();

        Self {
            code,
            reason,
            headers,
            body,
            pagination,
        }
    }

    /// Returns the first value of a header, looked up case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns `true` if the `Content-Type` header declares JSON.
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.header("content-type")
            .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
    }

    /// Returns the URL of the next page, if the response has one.
    #[must_use]
    pub fn next_url(&self) -> Option<&str> {
        self.pagination.next_url.as_deref()
    }

    /// Returns the `Retry-After` wait in seconds.
    ///
    /// Absent or non-numeric values fall back to [`DEFAULT_RETRY_AFTER`];
    /// the result is never less than one second.
    #[must_use]
    pub fn retry_after(&self) -> u64 {
        self.header("retry-after")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_RETRY_AFTER)
            .max(1)
    }

    /// Returns the `trackingId` response header, if present.
    #[must_use]
    pub fn tracking_id(&self) -> Option<&str> {
        self.header("trackingid")
    }

    /// Decodes the body as JSON, preserving key order.
    ///
    /// # Errors
    ///
    /// Returns [`MalformedResponseError`] if the body is empty or is not
    /// valid JSON.
    pub fn json(&self) -> Result<Value, MalformedResponseError> {
        if self.body.trim().is_empty() {
            return Err(MalformedResponseError {
                status_code: self.code,
                reason: "expected a JSON body but the response was empty".to_string(),
            });
        }
        serde_json::from_str(&self.body).map_err(|e| MalformedResponseError {
            status_code: self.code,
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response_with(headers: &[(&str, &str)], body: &str) -> HttpResponse {
        let mut map: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            map.entry(name.to_ascii_lowercase())
                .or_default()
                .push((*value).to_string());
        }
        HttpResponse::new(200, Some("OK".to_string()), map, body.to_string())
    }

    #[test]
    fn test_link_header_parsing() {
        let link = r#"<https://webexapis.com/v1/rooms?max=2&cursor=n1>; rel="next", <https://webexapis.com/v1/rooms?max=2&cursor=p1>; rel="prev""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(
            info.next_url.as_deref(),
            Some("https://webexapis.com/v1/rooms?max=2&cursor=n1")
        );
        assert_eq!(
            info.prev_url.as_deref(),
            Some("https://webexapis.com/v1/rooms?max=2&cursor=p1")
        );

        let info = PaginationInfo::parse_link_header(
            r#"<https://webexapis.com/v1/rooms?cursor=only>; rel="next""#,
        );
        assert!(info.prev_url.is_none());

        let info = PaginationInfo::parse_link_header(
            r#"<https://webexapis.com/v1/rooms?cursor=p>; rel="previous""#,
        );
        assert!(info.next_url.is_none());
    }

    #[test]
    fn test_link_header_with_comma_in_url() {
        let link = r#"<https://webexapis.com/v1/people?id=a,b&cursor=x>; rel="next""#;
        let info = PaginationInfo::parse_link_header(link);
        assert_eq!(
            info.next_url.as_deref(),
            Some("https://webexapis.com/v1/people?id=a,b&cursor=x")
        );
    }

    #[test]
    fn test_link_header_ignores_unknown_relations() {
        let info = PaginationInfo::parse_link_header(r#"<https://x.test/a>; rel="first""#);
        assert_eq!(info, PaginationInfo::default());
        assert_eq!(PaginationInfo::parse_link_header(""), PaginationInfo::default());
    }

    #[test]
    fn test_response_exposes_next_url() {
        let response = response_with(
            &[("Link", r#"<https://webexapis.com/v1/teams?cursor=2>; rel="next""#)],
            "{}",
        );
        assert_eq!(
            response.next_url(),
            Some("https://webexapis.com/v1/teams?cursor=2")
        );
    }

    #[test]
    fn test_retry_after_parsing() {
        assert_eq!(response_with(&[("Retry-After", "2")], "").retry_after(), 2);
        assert_eq!(response_with(&[("Retry-After", "0")], "").retry_after(), 1);
        assert_eq!(response_with(&[("Retry-After", "soon")], "").retry_after(), 15);
        assert_eq!(response_with(&[], "").retry_after(), 15);
    }

    #[test]
    fn test_is_json_checks_content_type() {
        assert!(response_with(&[("Content-Type", "application/json;charset=UTF-8")], "").is_json());
        assert!(!response_with(&[("Content-Type", "text/html")], "").is_json());
        assert!(!response_with(&[], "").is_json());
    }

    #[test]
    fn test_json_preserves_key_order() {
        let response = response_with(&[], r#"{"zeta":1,"alpha":2,"mid":3}"#);
        let value = response.json().unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["zeta", "alpha", "mid"]);
        assert_eq!(value, json!({"zeta": 1, "alpha": 2, "mid": 3}));
    }

    #[test]
    fn test_json_rejects_empty_and_invalid_bodies() {
        assert!(response_with(&[], "").json().is_err());
        assert!(response_with(&[], "not json").json().is_err());
    }

    #[test]
    fn test_new_lowercases_mixed_case_header_names() {
        let mut headers = HashMap::new();
        headers.insert(
            "Link".to_string(),
            vec![r#"<https://webexapis.com/v1/rooms?cursor=2>; rel="next""#.to_string()],
        );
        headers.insert("Retry-After".to_string(), vec!["2".to_string()]);
        headers.insert("X-Custom".to_string(), vec!["a".to_string()]);
        headers.insert("x-custom".to_string(), vec!["b".to_string()]);

        let response = HttpResponse::new(429, None, headers, String::new());

        assert_eq!(
            response.next_url(),
            Some("https://webexapis.com/v1/rooms?cursor=2")
        );
        assert_eq!(response.retry_after(), 2);
        assert!(response.headers.contains_key("retry-after"));
        assert!(!response.headers.contains_key("Retry-After"));

        let mut merged = response.headers["x-custom"].clone();
        merged.sort();
        assert_eq!(merged, ["a", "b"]);
    }

    #[test]
    fn test_tracking_id_header() {
        let response = response_with(&[("TrackingID", "ROUTER_123")], "");
        assert_eq!(response.tracking_id(), Some("ROUTER_123"));
    }
}
