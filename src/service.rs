//! Request/response boundary over the data layer.
//!
//! `GET` returns every record in file order, `POST {"sortBy": mode}` returns
//! them re-ordered, anything else is `405`. Failures carry a status and a
//! JSON error body; they are never reported as success.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::data::{self, Record, SortMode};
use crate::error::ServiceError;

pub const ALLOWED_METHODS: &str = "GET, POST";

// ---------------------------------------------------------------------------
// Request
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Other(String),
}

impl Method {
    /// Method names are case-sensitive: `get` is not `GET`.
    pub fn parse(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "POST" => Method::Post,
            _ => Method::Other(s.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
            Method::Other(m) => f.write_str(m),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataRequest {
    pub method: Method,
    /// Raw JSON body, if any.
    pub body: Option<String>,
}

/// Body of a sort request.
#[derive(Debug, Serialize, Deserialize)]
struct SortBody {
    #[serde(rename = "sortBy")]
    sort_by: String,
}

impl DataRequest {
    pub fn new(method: Method, body: Option<String>) -> Self {
        Self { method, body }
    }

    pub fn get() -> Self {
        Self::new(Method::Get, None)
    }

    pub fn sort(mode: SortMode) -> Self {
        let body = serde_json::json!({ "sortBy": mode }).to_string();
        Self::new(Method::Post, Some(body))
    }

    fn sort_mode(&self) -> Result<SortMode, ServiceError> {
        let raw = self
            .body
            .as_deref()
            .ok_or_else(|| ServiceError::BadRequest("missing request body".into()))?;
        let body: SortBody = serde_json::from_str(raw)
            .map_err(|e| ServiceError::BadRequest(format!("invalid sort body: {e}")))?;
        Ok(body.sort_by.parse::<SortMode>()?)
    }
}

// ---------------------------------------------------------------------------
// Response
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error_type: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataResponse {
    pub status: u16,
    /// Set on `405` responses.
    pub allow: Option<&'static str>,
    pub body: Option<String>,
}

impl DataResponse {
    fn json(status: u16, body: String) -> Self {
        Self {
            status,
            allow: None,
            body: Some(body),
        }
    }

    fn records_ok(records: &[Record]) -> Self {
        match serde_json::to_string(records) {
            Ok(body) => Self::json(200, body),
            Err(e) => {
                log::error!("Serializing records failed: {e}");
                Self::error_body(500, "internal", &e.to_string())
            }
        }
    }

    fn from_error(err: &ServiceError) -> Self {
        Self::error_body(err.status(), err.error_type(), &err.to_string())
    }

    fn error_body(status: u16, error_type: &str, message: &str) -> Self {
        let body = ErrorBody {
            error_type: error_type.to_string(),
            message: message.to_string(),
        };
        // Two plain strings always serialize.
        let text = serde_json::to_string(&body).unwrap_or_default();
        Self::json(status, text)
    }

    fn method_not_allowed() -> Self {
        Self {
            status: 405,
            allow: Some(ALLOWED_METHODS),
            body: None,
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the records of a success body.
    pub fn records(&self) -> serde_json::Result<Vec<Record>> {
        serde_json::from_str(self.body.as_deref().unwrap_or("null"))
    }

    /// Decode the error body of a failed response.
    pub fn error(&self) -> Option<ErrorBody> {
        if self.is_success() {
            return None;
        }
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

// ---------------------------------------------------------------------------
// Service
// ---------------------------------------------------------------------------

/// Stateless front for the data file. Every call re-reads the file.
#[derive(Debug, Clone)]
pub struct DataService {
    config: Config,
}

impl DataService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// All records in file order.
    pub fn fetch_all(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(data::load(&self.config.data_path)?)
    }

    /// All records in the given order.
    pub fn fetch_sorted(&self, mode: SortMode) -> Result<Vec<Record>, ServiceError> {
        let records = self.fetch_all()?;
        if self.config.strict_dates {
            Ok(data::sort_records_strict(&records, mode)?)
        } else {
            Ok(data::sort_records(&records, mode))
        }
    }

    pub fn handle(&self, request: &DataRequest) -> DataResponse {
        let result = match &request.method {
            Method::Get => self.fetch_all(),
            Method::Post => request.sort_mode().and_then(|mode| self.fetch_sorted(mode)),
            Method::Other(method) => {
                log::warn!("Rejected {method} request");
                return DataResponse::method_not_allowed();
            }
        };

        match result {
            Ok(records) => DataResponse::records_ok(&records),
            Err(err) => {
                if err.status() >= 500 {
                    log::error!("{} request failed: {err}", request.method);
                } else {
                    log::warn!("{} request rejected: {err}", request.method);
                }
                DataResponse::from_error(&err)
            }
        }
    }
}
