//! Behavior-driven tests for fatal failures and recovery
//!
//! These tests verify which failures end a run, which are retried, and that
//! the token never leaks into error text.

use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use secscout_core::{
    ApiToken, HttpClient, HttpError, HttpRequest, HttpResponse, Pipeline, PipelineError,
    ReqwestHttpClient, ResolverError, RetryConfig, ScriptedPrompt, SelectionError, Settings,
};

/// Replays a fixed script of transport results in order.
struct ScriptedHttpClient {
    script: Mutex<VecDeque<Result<HttpResponse, HttpError>>>,
    calls: Mutex<usize>,
}

impl ScriptedHttpClient {
    fn new(script: Vec<Result<HttpResponse, HttpError>>) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(script.into()),
            calls: Mutex::new(0),
        })
    }

    fn calls(&self) -> usize {
        *self.calls.lock().expect("counter should not be poisoned")
    }
}

impl HttpClient for ScriptedHttpClient {
    fn execute<'a>(
        &'a self,
        _request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        *self.calls.lock().expect("counter should not be poisoned") += 1;
        let next = self
            .script
            .lock()
            .expect("script should not be poisoned")
            .pop_front()
            .unwrap_or_else(|| Err(HttpError::non_retryable("script exhausted")));
        Box::pin(async move { next })
    }
}

fn pipeline(client: &Arc<ScriptedHttpClient>, retry: RetryConfig) -> Pipeline {
    let settings = Settings::new(ApiToken::new("secret-token"))
        .with_api_base("https://api.example.test")
        .with_retry(retry);
    Pipeline::new(Arc::clone(client) as Arc<dyn HttpClient>, &settings)
}

const TWO_LISTED: &str = r#"[
    {"Name": "Alpha One", "Ticker": "AONE", "CIK": "11"},
    {"Name": "Alpha Two", "Ticker": "ATWO", "CIK": "22"}
]"#;

const ONE_LISTED: &str = r#"[{"Name": "Alpha One", "Ticker": "AONE", "CIK": "11"}]"#;

const ONE_FILING: &str = r#"{"filings": [{"linkToTxt": "https://sec.gov/a1.txt"}]}"#;

// =============================================================================
// Error Handling: Transport Failures
// =============================================================================

#[tokio::test]
async fn when_mapping_endpoint_is_unreachable_run_fails_with_transport_error() {
    // Given: The mapping endpoint refuses connections
    let client = ScriptedHttpClient::new(vec![Err(HttpError::connect("connection refused"))]);

    // When: A lookup runs without retries
    let error = pipeline(&client, RetryConfig::no_retry())
        .run("Alpha", &mut ScriptedPrompt::default())
        .await
        .expect_err("transport failure is fatal");

    // Then: The caller receives a typed transport error
    assert!(matches!(
        error,
        PipelineError::Resolver(ResolverError::Transport(_))
    ));
    assert!(error.is_transport());
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn when_filing_search_is_unreachable_run_fails_after_resolution() {
    // Given: Resolution works but the search endpoint times out
    let client = ScriptedHttpClient::new(vec![
        Ok(HttpResponse::ok_json(ONE_LISTED)),
        Err(HttpError::timeout("request timeout")),
    ]);

    // When: A lookup runs
    let error = pipeline(&client, RetryConfig::no_retry())
        .run("Alpha", &mut ScriptedPrompt::default())
        .await
        .expect_err("search failure is fatal");

    // Then: The failure names the filing search stage
    assert!(matches!(error, PipelineError::FilingSearch(_)));
    assert!(error.is_transport());
    assert!(error.to_string().contains("filing search"));
}

#[tokio::test]
async fn a_single_transient_failure_is_retried_transparently() {
    // Given: The first mapping attempt drops, the rest succeed
    let client = ScriptedHttpClient::new(vec![
        Err(HttpError::connect("reset by peer")),
        Ok(HttpResponse::ok_json(ONE_LISTED)),
        Ok(HttpResponse::ok_json(ONE_FILING)),
    ]);

    // When: A lookup runs with one retry allowed
    let outcome = pipeline(&client, RetryConfig::fixed(Duration::from_millis(1), 1))
        .run("Alpha", &mut ScriptedPrompt::default())
        .await
        .expect("retry recovers");

    // Then: The success path is unchanged
    assert_eq!(outcome.link(), Some("https://sec.gov/a1.txt"));
    assert_eq!(client.calls(), 3);
}

#[tokio::test]
async fn repeated_failures_exhaust_the_single_retry() {
    let client = ScriptedHttpClient::new(vec![
        Err(HttpError::connect("down")),
        Err(HttpError::connect("still down")),
        Ok(HttpResponse::ok_json(ONE_LISTED)),
    ]);

    let error = pipeline(&client, RetryConfig::fixed(Duration::from_millis(1), 1))
        .run("Alpha", &mut ScriptedPrompt::default())
        .await
        .expect_err("two failures exhaust retries");

    assert!(error.is_transport());
    assert_eq!(client.calls(), 2);
}

// =============================================================================
// Error Handling: Selection
// =============================================================================

#[tokio::test]
async fn when_user_picks_out_of_range_option_run_fails_without_search() {
    // Given: Two listed candidates
    let client = ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_json(TWO_LISTED))]);

    // When: The user answers 3
    let error = pipeline(&client, RetryConfig::no_retry())
        .run("Alpha", &mut ScriptedPrompt::new(["3"]))
        .await
        .expect_err("out of range is fatal");

    // Then: A selection error is raised and no filing search happens
    assert!(matches!(
        error,
        PipelineError::Selection(SelectionError::OutOfRange { choice: 3, max: 2 })
    ));
    assert!(!error.is_transport());
    assert_eq!(client.calls(), 1);
}

#[tokio::test]
async fn when_user_types_text_instead_of_number_run_fails() {
    let client = ScriptedHttpClient::new(vec![Ok(HttpResponse::ok_json(TWO_LISTED))]);

    let error = pipeline(&client, RetryConfig::no_retry())
        .run("Alpha", &mut ScriptedPrompt::new(["first"]))
        .await
        .expect_err("non-numeric is fatal");

    assert!(matches!(
        error,
        PipelineError::Selection(SelectionError::NotANumber { .. })
    ));
}

// =============================================================================
// Security: Token Handling
// =============================================================================

#[tokio::test]
async fn reqwest_transport_errors_never_carry_the_token() {
    // Given: A request carrying the token to a port nothing listens on
    let request = HttpRequest::get("http://127.0.0.1:1/mapping/name/Alpha/")
        .with_query("token", "secret-xyz")
        .with_timeout_ms(2_000);

    // When: The production client sends it
    let error = ReqwestHttpClient::new()
        .execute(request)
        .await
        .expect_err("connection is refused");

    // Then: The error describes the failure without the URL or its token
    assert!(!error.to_string().contains("secret-xyz"));
    assert!(!error.message().contains("token="));
}

#[tokio::test]
async fn failed_lookup_over_reqwest_does_not_leak_the_token() {
    let settings = Settings::new(ApiToken::new("secret-xyz"))
        .with_api_base("http://127.0.0.1:1")
        .with_retry(RetryConfig::no_retry());
    let pipeline = Pipeline::new(Arc::new(ReqwestHttpClient::new()), &settings);

    let error = pipeline
        .run("Alpha", &mut ScriptedPrompt::default())
        .await
        .expect_err("mapping endpoint unreachable");

    assert!(error.is_transport());
    assert!(!error.to_string().contains("secret-xyz"));
    assert!(!format!("{error:?}").contains("secret-xyz"));
}

#[test]
fn settings_debug_output_hides_token() {
    let settings = Settings::new(ApiToken::new("secret-token"));
    let rendered = format!("{settings:?}");
    assert!(!rendered.contains("secret-token"));
    assert!(rendered.contains("ApiToken(***)"));
}
