use crate::harness::platform::VALID_CODE;
use crate::harness::{Assertion, Scenario, TOKEN};
use classroom_core::{SuiteKind, SuiteReport};

#[test]
fn test_full_suite_all_green() {
    Scenario::new("full_suite_all_green")
        .healthy_platform()
        .operator_answers(VALID_CODE)
        .run_suite(SuiteKind::Full)
        .assert_prompted("Enter verification code")
        .assert_passed("Registration")
        .assert_passed("Email Verification")
        .assert_passed("Restore Workspace")
        .assert_summary("Total: 18/18 tests passed")
        .assert_exit_code(0)
        .assert_token(TOKEN)
        .assert_hit("DELETE", "/sessions/20")
        .assert_hit("POST", "/workspaces/10/restore")
        .assert(Assertion::Paused(0))
        .run()
        .expect("scenario should pass");
}

#[test]
fn test_full_suite_continues_past_missing_code() {
    // Login still issues a token, so everything after verification passes
    Scenario::new("full_suite_missing_code")
        .healthy_platform()
        .operator_skips()
        .run_suite(SuiteKind::Full)
        .assert_failed("Email Verification", "No verification code provided")
        .assert_passed("Login")
        .assert_passed("Delete Workspace")
        .assert(Assertion::RecordCount(18))
        .assert_summary("Total: 17/18 tests passed")
        .assert_exit_code(1)
        .run()
        .unwrap();
}

#[test]
fn test_full_suite_wrong_code_reports_status() {
    Scenario::new("full_suite_wrong_code")
        .healthy_platform()
        .operator_answers("999999")
        .run_suite(SuiteKind::Full)
        .assert_failed("Email Verification", "Expected 200, got 501")
        .assert_passed("Get Profile")
        .assert_exit_code(1)
        .run()
        .unwrap();
}

#[test]
fn test_full_suite_down_platform_fails_everything() {
    // Nothing stubbed: every request gets mockito's 501
    Scenario::new("full_suite_down_platform")
        .operator_answers(VALID_CODE)
        .run_suite(SuiteKind::Full)
        .assert_failed("Registration", "Expected 201, got 501")
        .assert_failed("Create Session", "No workspace ID available")
        .assert_failed("Stop Session", "No session ID available")
        .assert_summary("Total: 0/18 tests passed")
        .assert(Assertion::Custom(Box::new(|report: &SuiteReport| {
            anyhow::ensure!(report.failed() == 18, "expected 18 failures");
            anyhow::ensure!(report.verdict() == "18 test(s) failed");
            Ok(())
        })))
        .run()
        .unwrap();
}
