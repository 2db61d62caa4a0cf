//! Spreadsheet proxy client
//!
//! Implements the core's [`RequestSource`], [`BudgetSource`] and
//! [`StatusUpdater`] ports over the proxy's query-string protocol.

use async_trait::async_trait;
use mountview_core::{BudgetSource, RequestSource, StatusUpdater};
use mountview_domain::{
    MountviewError, RawBudgetSnapshot, RawRequest, RequestStatus, Result, SheetsConfig,
};
use reqwest::{Method, Response, StatusCode};
use serde_json::Value;
use tracing::{debug, info, instrument};
use url::Url;

use super::errors::SheetsError;
use crate::http::HttpClient;

const ACTION_LIST: &str = "list";
const ACTION_GET_COMPANY: &str = "getCompany";
const ACTION_UPDATE_STATUS: &str = "updateStatus";

/// Spreadsheet proxy client
pub struct SheetsClient {
    http: HttpClient,
    endpoint: Url,
    spreadsheet_id: Option<String>,
}

impl SheetsClient {
    /// Create a client with an HTTP client tuned by `config`.
    ///
    /// # Errors
    /// Returns `MountviewError::Config` if the endpoint is blank or not a URL.
    pub fn new(config: &SheetsConfig) -> Result<Self> {
        Self::with_http_client(config, HttpClient::from_config(config)?)
    }

    /// Create a client around an existing HTTP client.
    pub fn with_http_client(config: &SheetsConfig, http: HttpClient) -> Result<Self> {
        let endpoint = config.endpoint.trim();
        if endpoint.is_empty() {
            return Err(MountviewError::Config("Missing sheets endpoint".into()));
        }

        let endpoint = Url::parse(endpoint).map_err(|e| {
            MountviewError::Config(format!("Invalid sheets endpoint {endpoint}: {e}"))
        })?;
        let spreadsheet_id = config
            .spreadsheet_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);

        Ok(Self { http, endpoint, spreadsheet_id })
    }

    /// Fetch all request rows.
    ///
    /// A non-array body yields no rows; array elements that are not objects
    /// are skipped.
    #[instrument(skip(self))]
    pub async fn fetch_requests(&self) -> std::result::Result<Vec<RawRequest>, SheetsError> {
        let response = self.get(self.action_url(ACTION_LIST, &[])).await?;
        let response = ensure_success(response, ACTION_LIST).await?;
        let body = read_json(response).await?;

        let rows = match body {
            Value::Array(items) => items
                .into_iter()
                .filter(Value::is_object)
                .filter_map(|item| serde_json::from_value::<RawRequest>(item).ok())
                .collect::<Vec<_>>(),
            other => {
                debug!(kind = json_kind(&other), "list returned a non-array body");
                Vec::new()
            }
        };

        info!(request_count = rows.len(), "fetched request rows");
        Ok(rows)
    }

    /// Fetch the budget record for `company_id`.
    ///
    /// A 404, `null` or non-object body means the company is unknown.
    #[instrument(skip(self))]
    pub async fn fetch_company(
        &self,
        company_id: &str,
    ) -> std::result::Result<Option<RawBudgetSnapshot>, SheetsError> {
        let url = self.action_url(ACTION_GET_COMPANY, &[("companyId", company_id)]);
        let response = self.get(url).await?;
        if response.status() == StatusCode::NOT_FOUND {
            debug!("company not found");
            return Ok(None);
        }

        let response = ensure_success(response, ACTION_GET_COMPANY).await?;
        let body = read_json(response).await?;
        if !body.is_object() {
            debug!(kind = json_kind(&body), "getCompany returned no record");
            return Ok(None);
        }

        serde_json::from_value(body)
            .map(Some)
            .map_err(|e| SheetsError::Decode(format!("company record: {e}")))
    }

    /// Post an approver's decision.
    #[instrument(skip(self))]
    pub async fn post_status(
        &self,
        request_id: &str,
        status: RequestStatus,
    ) -> std::result::Result<(), SheetsError> {
        let mut form = vec![
            ("action", ACTION_UPDATE_STATUS),
            ("requestId", request_id),
            ("status", status.as_str()),
        ];
        if let Some(spreadsheet_id) = self.spreadsheet_id.as_deref() {
            form.push(("spreadsheetId", spreadsheet_id));
        }

        let request = self.http.request(Method::POST, self.endpoint.clone()).form(&form);
        let response = self.http.send(request).await?;
        ensure_success(response, ACTION_UPDATE_STATUS).await?;
        Ok(())
    }

    fn action_url(&self, action: &str, params: &[(&str, &str)]) -> Url {
        let mut url = self.endpoint.clone();
        {
            let mut query = url.query_pairs_mut();
            query.append_pair("action", action);
            for (key, value) in params {
                query.append_pair(key, value);
            }
            if let Some(spreadsheet_id) = self.spreadsheet_id.as_deref() {
                query.append_pair("spreadsheetId", spreadsheet_id);
            }
        }
        url
    }

    async fn get(&self, url: Url) -> std::result::Result<Response, SheetsError> {
        Ok(self.http.send(self.http.request(Method::GET, url)).await?)
    }
}

async fn ensure_success(
    response: Response,
    action: &str,
) -> std::result::Result<Response, SheetsError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let err = SheetsError::from_status(status, action, body.trim());
    debug!(action, %status, retryable = err.should_retry(), "proxy call failed");
    Err(err)
}

async fn read_json(response: Response) -> std::result::Result<Value, SheetsError> {
    let text = response.text().await.map_err(|e| SheetsError::Network(e.to_string()))?;
    serde_json::from_str(&text).map_err(|e| SheetsError::Decode(e.to_string()))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[async_trait]
impl RequestSource for SheetsClient {
    async fn list_requests(&self) -> Result<Vec<RawRequest>> {
        Ok(self.fetch_requests().await?)
    }
}

#[async_trait]
impl BudgetSource for SheetsClient {
    async fn budget_snapshot(&self, company_id: &str) -> Result<Option<RawBudgetSnapshot>> {
        Ok(self.fetch_company(company_id).await?)
    }
}

#[async_trait]
impl StatusUpdater for SheetsClient {
    async fn update_status(&self, request_id: &str, status: RequestStatus) -> Result<()> {
        Ok(self.post_status(request_id, status).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(endpoint: &str, spreadsheet_id: Option<&str>) -> Result<SheetsClient> {
        let mut config = SheetsConfig::new(endpoint);
        config.spreadsheet_id = spreadsheet_id.map(str::to_string);
        SheetsClient::new(&config)
    }

    #[test]
    fn blank_endpoint_is_config_error() {
        let err = client("   ", None).err().unwrap();
        assert_eq!(err, MountviewError::Config("Missing sheets endpoint".into()));
    }

    #[test]
    fn invalid_endpoint_is_config_error() {
        assert!(matches!(client("not a url", None), Err(MountviewError::Config(_))));
    }

    #[test]
    fn action_url_appends_spreadsheet_id() {
        let client = client("https://proxy.test/exec?key=abc", Some("sheet-1")).unwrap();

        let url = client.action_url(ACTION_GET_COMPANY, &[("companyId", "acme")]);

        assert_eq!(
            url.as_str(),
            "https://proxy.test/exec?key=abc&action=getCompany&companyId=acme&spreadsheetId=sheet-1"
        );
    }

    #[test]
    fn blank_spreadsheet_id_is_omitted() {
        let client = client("https://proxy.test/exec", Some("  ")).unwrap();
        assert_eq!(client.action_url(ACTION_LIST, &[]).as_str(), "https://proxy.test/exec?action=list");
    }
}
