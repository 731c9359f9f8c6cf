use serde::Serialize;

use crate::assertion::Assertion;
use crate::case::{CaseOutcome, ContractCase};
use crate::client::{ApiClient, Endpoint, ResponseSnapshot};
use crate::error::HarnessError;
use crate::schema::SchemaStore;

const USERS: &str = "/api/users";
const UNKNOWN_RESOURCE: &str = "/api/unknown";
const REGISTER: &str = "/api/register";

/// Existing user targeted by the update and delete cases.
///
/// Both PUT/PATCH and DELETE hit the same id. That only stays
/// order-independent because the demo service does not persist writes.
const MUTABLE_USER: &str = "/api/users/2";

const CREATE_USER_FORM: [(&str, &str); 2] = [("name", "morpheus"), ("job", "leader")];
const PUT_USER_FORM: [(&str, &str); 2] = [("name", "morpheus"), ("job", "zion resident")];
const PATCH_USER_FORM: [(&str, &str); 2] = [("name", "morpheus jr."), ("job", "assistant")];
const REGISTER_OK_FORM: [(&str, &str); 2] =
    [("email", "eve.holt@reqres.in"), ("password", "pistol")];
const REGISTER_MISSING_PASSWORD_FORM: [(&str, &str); 1] = [("email", "eve.holted@reqres.in")];

const REGISTER_TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// The reqres.in scenario catalog, in reading order.
///
/// No case depends on another having run.
pub fn reqres_cases() -> Vec<ContractCase> {
    vec![
        ContractCase::new(
            "get_list_of_users",
            Endpoint::get(USERS).query("page", "2").query("per_page", "3"),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::field("/data/0/first_name", "Eve"))
        .expect(Assertion::field("/data/0/last_name", "Holt"))
        .expect(Assertion::array_len("/data", 3))
        .schema("users_list"),
        ContractCase::new("get_single_user", Endpoint::get("/api/users/3"))
            .expect(Assertion::status(200))
            .expect(Assertion::field("/data/first_name", "Emma"))
            .expect(Assertion::field("/data/last_name", "Wong"))
            .schema("get_single_user"),
        ContractCase::new("create_user", Endpoint::post(USERS).with_form(&CREATE_USER_FORM))
            .expect(Assertion::status(201))
            .expect_all(Assertion::echoes(&CREATE_USER_FORM))
            .schema("post_users"),
        ContractCase::new("single_user_not_found", Endpoint::get("/api/users/23"))
            .expect(Assertion::status(404)),
        ContractCase::new(
            "list_resource",
            Endpoint::get(UNKNOWN_RESOURCE).query("per_page", "3"),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::field("/data/0/id", 1))
        .expect(Assertion::field("/data/0/name", "cerulean"))
        .expect(Assertion::array_len("/data", 3))
        .schema("list_resource"),
        ContractCase::new(
            "update_users_by_put",
            Endpoint::put(MUTABLE_USER).with_form(&PUT_USER_FORM),
        )
        .expect(Assertion::status(200))
        .expect_all(Assertion::echoes(&PUT_USER_FORM))
        .schema("update_users"),
        ContractCase::new(
            "update_users_by_patch",
            Endpoint::patch(MUTABLE_USER).with_form(&PATCH_USER_FORM),
        )
        .expect(Assertion::status(200))
        .expect_all(Assertion::echoes(&PATCH_USER_FORM))
        .schema("update_user_by_patch"),
        ContractCase::new("delete_user", Endpoint::delete(MUTABLE_USER))
            .expect(Assertion::status(204))
            .expect(Assertion::EmptyBody),
        ContractCase::new(
            "register_successful",
            Endpoint::post(REGISTER).with_form(&REGISTER_OK_FORM),
        )
        .expect(Assertion::status(200))
        .expect(Assertion::field("/id", 4))
        .expect(Assertion::field("/token", REGISTER_TOKEN))
        .schema("successful_register"),
        ContractCase::new(
            "register_unsuccessful",
            Endpoint::post(REGISTER).with_form(&REGISTER_MISSING_PASSWORD_FORM),
        )
        .expect(Assertion::status(400))
        .expect(Assertion::field("/error", "Missing password"))
        .schema("unsuccessful_register"),
    ]
}

/// An ordered set of independent contract cases sharing one client and
/// one schema store.
pub struct Suite<S> {
    client: ApiClient,
    store: S,
    cases: Vec<ContractCase>,
}

impl<S: SchemaStore> Suite<S> {
    pub fn new(client: ApiClient, store: S, cases: Vec<ContractCase>) -> Self {
        Self { client, store, cases }
    }

    /// The full reqres.in catalog.
    pub fn reqres(client: ApiClient, store: S) -> Self {
        Self::new(client, store, reqres_cases())
    }

    pub fn cases(&self) -> &[ContractCase] {
        &self.cases
    }

    pub fn case_names(&self) -> Vec<&str> {
        self.cases.iter().map(|c| c.name.as_str()).collect()
    }

    /// Run every case sequentially. A failing case never stops the rest.
    pub async fn run(&self) -> SuiteReport {
        self.run_selected(|_| true).await
    }

    /// Run a single case by exact name. `None` if no such case exists.
    pub async fn run_case(&self, name: &str) -> Option<CaseOutcome> {
        let case = self.cases.iter().find(|c| c.name == name)?;
        Some(case.run(&self.client, &self.store).await)
    }

    /// Execute a single case by name and hand back the response it accepted.
    pub async fn fetch(&self, name: &str) -> Option<Result<ResponseSnapshot, HarnessError>> {
        let case = self.cases.iter().find(|c| c.name == name)?;
        Some(case.execute(&self.client, &self.store).await)
    }

    /// Run cases whose name contains any of `filters`; all cases when empty.
    pub async fn run_matching(&self, filters: &[String]) -> SuiteReport {
        self.run_selected(|case| {
            filters.is_empty() || filters.iter().any(|f| case.name.contains(f.as_str()))
        })
        .await
    }

    async fn run_selected<F>(&self, select: F) -> SuiteReport
    where
        F: Fn(&ContractCase) -> bool,
    {
        let mut outcomes = Vec::new();
        for case in self.cases.iter().filter(|c| select(c)) {
            outcomes.push(case.run(&self.client, &self.store).await);
        }
        let report = SuiteReport { outcomes };
        tracing::info!(
            passed = report.passed(),
            failed = report.failed(),
            "suite finished"
        );
        report
    }
}

/// Outcomes of one suite run, in execution order.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn outcome(&self, name: &str) -> Option<&CaseOutcome> {
        self.outcomes.iter().find(|o| o.name == name)
    }
}
