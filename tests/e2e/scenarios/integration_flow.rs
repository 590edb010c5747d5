use crate::harness::platform::VALID_CODE;
use crate::harness::{Assertion, Scenario, SESSION_ID, TOKEN};
use classroom_core::SuiteKind;
use serde_json::json;

#[test]
fn test_integration_flow() {
    Scenario::new("integration_flow")
        .healthy_platform()
        .operator_answers(VALID_CODE)
        .run_suite(SuiteKind::Integration)
        .assert_passed("Register")
        .assert_passed("Verify Email")
        .assert_passed("Start Session")
        .assert_passed("Stop Session")
        .assert(Assertion::Paused(1))
        .assert(Assertion::SessionHeld(SESSION_ID))
        .assert_token(TOKEN)
        .assert_summary("Total: 7/7 tests passed")
        .assert_exit_code(0)
        .run()
        .unwrap();
}

#[test]
fn test_integration_stops_without_code() {
    Scenario::new("integration_without_code")
        .healthy_platform()
        .operator_skips()
        .run_suite(SuiteKind::Integration)
        .assert_failed("Verify Email", "Skipped (no code provided)")
        .assert_not_run("Login")
        .assert_not_run("Stop Session")
        .assert_not_hit("POST", "/auth/login")
        .assert(Assertion::Paused(0))
        .assert_summary("Total: 1/7 tests passed")
        .assert_exit_code(1)
        .run()
        .unwrap();
}

#[test]
fn test_integration_stops_at_workspace_failure() {
    // Installed before the healthy routes so it answers the create call
    Scenario::new("integration_workspace_failure")
        .platform_answers_bearer(
            "POST",
            "/workspaces",
            TOKEN,
            500,
            json!({"detail": "Internal Server Error"}),
        )
        .healthy_platform()
        .operator_answers(VALID_CODE)
        .run_suite(SuiteKind::Integration)
        .assert_passed("Login")
        .assert_failed("Create Workspace", "Expected 201, got 500")
        .assert_not_run("Create Session")
        .assert_not_hit("POST", "/workspaces/10/sessions")
        .assert(Assertion::RecordCount(4))
        .assert_summary("Total: 3/7 tests passed")
        .run()
        .unwrap();
}
