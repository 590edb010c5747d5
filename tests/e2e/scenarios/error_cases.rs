use crate::harness::{Scenario, TOKEN};
use classroom_core::SuiteKind;
use serde_json::json;

/// A platform that rejects every bad request the error suite sends.
fn strict_platform(scenario: Scenario) -> Scenario {
    let rejected = json!({"detail": "rejected"});
    scenario
        .platform_answers_request(
            "POST",
            "/auth/register",
            json!({"email": "invalid-email"}),
            422,
            rejected.clone(),
        )
        .platform_answers_request(
            "POST",
            "/auth/register",
            json!({"password": "short"}),
            422,
            rejected.clone(),
        )
        // First registration of an address succeeds, the repeat is refused
        .platform_answers("POST", "/auth/register", 201, json!({"user_id": 5, "email": "x@example.com"}))
        .platform_answers("POST", "/auth/register", 400, json!({"detail": "Email already registered"}))
        .platform_answers_request(
            "POST",
            "/auth/verify-email",
            json!({"code": "000000"}),
            400,
            json!({"detail": "Invalid verification code"}),
        )
        .platform_answers_anonymous("GET", "/users/me", 401, rejected.clone())
        .platform_answers_bearer("GET", "/users/me", "invalid_token_12345", 401, rejected.clone())
        .platform_answers_bearer("GET", "/workspaces/99999", TOKEN, 404, rejected.clone())
        .platform_answers_bearer("GET", "/sessions/99999", TOKEN, 404, rejected)
}

#[test]
fn test_error_suite_with_token() {
    strict_platform(Scenario::new("errors_with_token"))
        .with_token(TOKEN)
        .run_suite(SuiteKind::Errors)
        .assert_passed("Invalid Email Format")
        .assert_passed("Short Password")
        .assert_passed("Duplicate Email")
        .assert_passed("Invalid Verification Code")
        .assert_passed("Unauthorized Access")
        .assert_passed("Invalid Token")
        .assert_passed("Nonexistent Workspace")
        .assert_passed("Nonexistent Session")
        .assert_summary("Total: 8/8 tests passed")
        .assert_exit_code(0)
        .run()
        .unwrap();
}

#[test]
fn test_error_suite_without_token_skips_lookups() {
    strict_platform(Scenario::new("errors_without_token"))
        .run_suite(SuiteKind::Errors)
        .assert_passed("Unauthorized Access")
        .assert_skipped("Nonexistent Workspace")
        .assert_skipped("Nonexistent Session")
        .assert_not_hit("GET", "/workspaces/99999")
        .assert_summary("Total: 8/8 tests passed")
        .run()
        .unwrap();
}

#[test]
fn test_lenient_platform_is_reported() {
    Scenario::new("lenient_platform")
        .platform_answers("POST", "/auth/register", 201, json!({"user_id": 5, "email": "x@example.com"}))
        .run_suite(SuiteKind::Errors)
        .assert_failed("Invalid Email Format", "Expected 422, got 201")
        .assert_failed("Short Password", "Expected 422, got 201")
        .assert_failed("Duplicate Email", "Expected 400, got 201")
        .assert_exit_code(1)
        .run()
        .unwrap();
}
