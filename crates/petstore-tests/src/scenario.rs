//! Test scenarios: a request plus its expected outcome.

use crate::assertions::{
    check_body_contains, check_status, Mismatch, StepReport, KNOWN_GAP_PREFIX,
};
use crate::fixtures::{ApiRequest, ApiResponse, PetStoreClient, PetStoreClientError};

/// One named request with the status and body fragments it must produce.
///
/// Scenarios are built once and never mutated while running.
#[derive(Debug, Clone)]
pub struct Scenario {
    name: String,
    request: ApiRequest,
    expected_status: u16,
    expected_fragments: Vec<String>,
    known_gap: Option<String>,
}

impl Scenario {
    /// Create a scenario expecting status 200 and no particular body.
    pub fn new(name: impl Into<String>, request: ApiRequest) -> Self {
        Self {
            name: name.into(),
            request,
            expected_status: 200,
            expected_fragments: Vec::new(),
            known_gap: None,
        }
    }

    pub fn expect_status(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    pub fn expect_body_contains(mut self, fragment: impl Into<String>) -> Self {
        self.expected_fragments.push(fragment.into());
        self
    }

    /// Mark the expectation as desired behavior the API is known not to have.
    pub fn known_gap(mut self, note: impl Into<String>) -> Self {
        self.known_gap = Some(note.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn request(&self) -> &ApiRequest {
        &self.request
    }

    pub fn expected_status(&self) -> u16 {
        self.expected_status
    }

    pub fn expected_fragments(&self) -> &[String] {
        &self.expected_fragments
    }

    pub fn known_gap_note(&self) -> Option<&str> {
        self.known_gap.as_deref()
    }

    /// Compare a response against every expectation, collecting all mismatches.
    pub fn check(&self, response: &ApiResponse) -> Result<(), Vec<Mismatch>> {
        let mismatches: Vec<Mismatch> = std::iter::once(check_status(response, self.expected_status))
            .chain(
                self.expected_fragments
                    .iter()
                    .map(|fragment| check_body_contains(response, fragment)),
            )
            .filter_map(Result::err)
            .collect();

        if mismatches.is_empty() {
            Ok(())
        } else {
            Err(mismatches)
        }
    }

    /// Render a failure message; known-gap scenarios are prefixed so they stand
    /// apart from regressions.
    pub fn failure_message(&self, failures: &[String]) -> String {
        let message = format!("Scenario '{}' failed: {}", self.name, failures.join("; "));

        match &self.known_gap {
            Some(note) => format!("{}: {} [{}]", KNOWN_GAP_PREFIX, message, note),
            None => message,
        }
    }

    /// Panic unless the response meets every expectation.
    pub fn verify(&self, response: &ApiResponse) {
        if let Err(mismatches) = self.check(response) {
            let failures: Vec<String> = mismatches.iter().map(ToString::to_string).collect();
            panic!("{}", self.failure_message(&failures));
        }
    }

    /// Send the request.
    pub async fn run(&self, client: &PetStoreClient) -> Result<ApiResponse, PetStoreClientError> {
        tracing::info!(
            scenario = %self.name,
            method = %self.request.method(),
            path = %self.request.path(),
            "Running scenario"
        );
        client.send(&self.request).await
    }

    /// Send the request and verify the response, panicking on any failure.
    pub async fn execute(&self, client: &PetStoreClient) -> ApiResponse {
        let response = match self.run(client).await {
            Ok(response) => response,
            Err(e) => panic!("{}", self.failure_message(&[e.to_string()])),
        };

        self.verify(&response);
        response
    }

    /// Run as one step of a larger scenario, recording instead of panicking.
    pub async fn run_step(&self, client: &PetStoreClient, report: &mut StepReport) {
        let failures = match self.run(client).await {
            Ok(response) => match self.check(&response) {
                Ok(()) => Vec::new(),
                Err(mismatches) => mismatches.iter().map(ToString::to_string).collect(),
            },
            Err(e) => vec![e.to_string()],
        };

        report.record(self.name.clone(), failures);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn response(status: u16, body: &str) -> ApiResponse {
        ApiResponse {
            status,
            body: body.to_string(),
        }
    }

    #[test]
    fn test_new_scenario_defaults_to_200() {
        let scenario = Scenario::new("logout", ApiRequest::get("user/logout"));

        assert_eq!(scenario.expected_status(), 200);
        assert!(scenario.expected_fragments().is_empty());
        assert!(scenario.known_gap_note().is_none());
    }

    #[test]
    fn test_check_collects_all_mismatches() {
        let scenario = Scenario::new("add pet", ApiRequest::post("pet"))
            .expect_body_contains("898888")
            .expect_body_contains("new_dog");

        let mismatches = scenario.check(&response(500, "error")).unwrap_err();

        assert_eq!(mismatches.len(), 3);
        assert!(matches!(mismatches[0], Mismatch::Status { actual: 500, .. }));
    }

    #[test]
    fn test_check_passes_on_match() {
        let scenario = Scenario::new("find", ApiRequest::get("pet/findByStatus"))
            .expect_body_contains("available");

        assert!(scenario
            .check(&response(200, r#"[{"status":"available"}]"#))
            .is_ok());
    }

    #[test]
    fn test_failure_message_prefixes_known_gap() {
        let scenario = Scenario::new("weak password", ApiRequest::post("user"))
            .expect_status(404)
            .known_gap("API accepts weak passwords");

        let message = scenario.failure_message(&["expected status 404, got 200".to_string()]);

        assert!(message.starts_with("KNOWN GAP: Scenario 'weak password' failed"));
        assert!(message.contains("API accepts weak passwords"));
    }

    #[test]
    fn test_failure_message_without_known_gap() {
        let scenario = Scenario::new("logout", ApiRequest::get("user/logout"));

        let message = scenario.failure_message(&["boom".to_string()]);

        assert_eq!(message, "Scenario 'logout' failed: boom");
    }

    #[test]
    #[should_panic(expected = "KNOWN GAP")]
    fn test_verify_known_gap_panics_with_prefix() {
        let scenario = Scenario::new("duplicate id", ApiRequest::post("user"))
            .expect_status(404)
            .known_gap("API accepts duplicate ids");

        scenario.verify(&response(200, "{}"));
    }

    #[tokio::test]
    async fn test_execute_returns_matching_response() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/logout"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"code":200,"message":"ok"}"#),
            )
            .mount(&server)
            .await;

        let client = PetStoreClient::new(server.uri());
        let response = Scenario::new("logout", ApiRequest::get("user/logout"))
            .expect_body_contains("ok")
            .execute(&client)
            .await;

        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_login_step_transport_failure_hides_password() {
        use crate::catalog;
        use crate::fixtures::User;

        let client = PetStoreClient::new("http://127.0.0.1:9/");
        let credentials = User::seed().credentials();
        let mut report = StepReport::new("user lifecycle");

        catalog::login(&credentials)
            .run_step(&client, &mut report)
            .await;

        let outcome = &report.steps()[0];
        assert!(!outcome.passed(), "Connection should fail");
        for failure in &outcome.failures {
            assert!(
                !failure.contains(&credentials.password),
                "password leaked into step failure: {}",
                failure
            );
        }
    }

    #[tokio::test]
    async fn test_run_step_does_not_short_circuit() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/user/rostestuser"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/user/logout"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let client = PetStoreClient::new(server.uri());
        let mut report = StepReport::new("flow");

        Scenario::new("fetch", ApiRequest::get("user/rostestuser"))
            .run_step(&client, &mut report)
            .await;
        Scenario::new("logout", ApiRequest::get("user/logout"))
            .run_step(&client, &mut report)
            .await;

        assert_eq!(report.steps().len(), 2);
        assert_eq!(report.failed_steps(), vec!["fetch"]);
    }
}
