use std::time::Instant;

use serde::Serialize;

use crate::assertion::{check_all, Assertion};
use crate::client::{ApiClient, Endpoint, ResponseSnapshot};
use crate::error::{ErrorKind, HarnessError};
use crate::schema::{validate, SchemaStore};

/// One request, the literal expectations on its response, and optionally
/// the schema the whole body must conform to.
#[derive(Debug, Clone)]
pub struct ContractCase {
    pub name: String,
    pub endpoint: Endpoint,
    pub assertions: Vec<Assertion>,
    pub schema: Option<String>,
}

impl ContractCase {
    pub fn new(name: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            name: name.into(),
            endpoint,
            assertions: Vec::new(),
            schema: None,
        }
    }

    pub fn expect(mut self, assertion: Assertion) -> Self {
        self.assertions.push(assertion);
        self
    }

    pub fn expect_all(mut self, assertions: impl IntoIterator<Item = Assertion>) -> Self {
        self.assertions.extend(assertions);
        self
    }

    pub fn schema(mut self, name: impl Into<String>) -> Self {
        self.schema = Some(name.into());
        self
    }

    /// Call once, assert in order, then validate against the schema.
    /// Returns the response that passed.
    ///
    /// The schema is loaded fresh for this run only.
    pub async fn execute<S>(
        &self,
        client: &ApiClient,
        store: &S,
    ) -> Result<ResponseSnapshot, HarnessError>
    where
        S: SchemaStore + ?Sized,
    {
        let snapshot = client.send(&self.endpoint).await?;
        check_all(&self.assertions, &snapshot)?;

        if let Some(name) = &self.schema {
            let schema = store.load(name)?;
            validate(name, &schema, snapshot.json())?;
        }

        Ok(snapshot)
    }

    /// Like [`ContractCase::execute`] but never returns an error: the result
    /// is folded into a [`CaseOutcome`].
    pub async fn run<S>(&self, client: &ApiClient, store: &S) -> CaseOutcome
    where
        S: SchemaStore + ?Sized,
    {
        let started = Instant::now();
        let result = self.execute(client, store).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(_) => {
                tracing::info!(case = %self.name, elapsed_ms, "case passed");
                CaseOutcome {
                    name: self.name.clone(),
                    passed: true,
                    error: None,
                    elapsed_ms,
                }
            }
            Err(e) => {
                tracing::warn!(case = %self.name, kind = ?e.kind(), error = %e, "case failed");
                CaseOutcome {
                    name: self.name.clone(),
                    passed: false,
                    error: Some(CaseFailure::from(&e)),
                    elapsed_ms,
                }
            }
        }
    }
}

/// Why a case failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&HarnessError> for CaseFailure {
    fn from(e: &HarnessError) -> Self {
        Self {
            kind: e.kind(),
            message: e.to_string(),
        }
    }
}

/// Binary pass/fail result of one case.
#[derive(Debug, Clone, Serialize)]
pub struct CaseOutcome {
    pub name: String,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CaseFailure>,
    pub elapsed_ms: u64,
}

impl CaseOutcome {
    pub fn kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }
}
