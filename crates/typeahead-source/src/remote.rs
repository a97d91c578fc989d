//! Remote HTTP endpoint source.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use typeahead_core::{Record, Result, TypeaheadError};
use typeahead_parser::ResponseParser;

use crate::source::ResultSource;

/// Result source backed by a remote HTTP endpoint.
///
/// The query is appended as a URL parameter (named `query` unless
/// overridden) and the response body is run through the configured
/// [`ResponseParser`]. Transport failures and non-success statuses are
/// [`TransportError`](TypeaheadError::TransportError); an empty body is a
/// [`NullResponse`](TypeaheadError::NullResponse), distinct from a parse
/// error.
#[derive(Debug)]
pub struct RemoteSource {
    client: reqwest::Client,
    endpoint: String,
    query_param: String,
    extra_params: Vec<(String, String)>,
    timeout: Option<Duration>,
    parser: ResponseParser,
}

impl RemoteSource {
    pub fn new(endpoint: impl Into<String>, parser: ResponseParser) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            query_param: "query".to_string(),
            extra_params: Vec::new(),
            timeout: None,
            parser,
        }
    }

    /// Override the name of the URL parameter carrying the query.
    pub fn with_query_param(mut self, name: impl Into<String>) -> Self {
        self.query_param = name.into();
        self
    }

    /// Append a fixed parameter to every request.
    pub fn with_extra_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_params.push((name.into(), value.into()));
        self
    }

    /// Fail requests that take longer than `timeout`. Off by default.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn parser(&self) -> &ResponseParser {
        &self.parser
    }
}

#[async_trait]
impl ResultSource for RemoteSource {
    async fn query(&self, text: &str) -> Result<Vec<Record>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[(self.query_param.as_str(), text)]);
        for (name, value) in &self.extra_params {
            request = request.query(&[(name.as_str(), value.as_str())]);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        debug!(endpoint = %self.endpoint, query = %text, "issuing remote request");
        let response = request
            .send()
            .await
            .map_err(|e| TypeaheadError::TransportError(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TypeaheadError::TransportError(format!(
                "endpoint returned status {status}"
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TypeaheadError::TransportError(e.to_string()))?;
        if body.is_empty() {
            return Err(TypeaheadError::NullResponse);
        }

        self.parser.parse(&body)
    }

    fn name(&self) -> &str {
        "remote"
    }
}
