//! Negative cases: the platform must refuse these requests with a specific status.

use crate::config::generate_email;
use crate::endpoint::Endpoint;
use crate::error::Result;
use crate::models::{Credentials, VerifyEmail};
use crate::plan::Check;
use crate::report::CheckOutcome;
use crate::runner::{CheckContext, SuiteState};
use reqwest::StatusCode;

pub fn suite() -> Vec<Check> {
    vec![
        Check::new("Invalid Email Format", invalid_email_format),
        Check::new("Short Password", short_password),
        Check::new("Duplicate Email", duplicate_email),
        Check::new("Invalid Verification Code", invalid_verification_code),
        Check::new("Unauthorized Access", unauthorized_access),
        Check::new("Invalid Token", invalid_token),
        Check::new("Nonexistent Workspace", nonexistent_workspace),
        Check::new("Nonexistent Session", nonexistent_session),
    ]
}

/// Token the platform cannot have issued.
const BOGUS_TOKEN: &str = "invalid_token_12345";

/// Code that no verification flow ever hands out.
const BOGUS_CODE: &str = "000000";

/// A fresh address on the same domain as the run's email.
fn sibling_email(state: &SuiteState, prefix: &str) -> String {
    let domain = state
        .email
        .rsplit_once('@')
        .map(|(_, domain)| domain)
        .filter(|domain| !domain.is_empty())
        .unwrap_or("example.com");
    generate_email(prefix, domain)
}

fn invalid_email_format(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let body = Credentials {
        email: "invalid-email".to_string(),
        password: "test123".to_string(),
    };
    ctx.client
        .without_token()
        .send_json(Endpoint::Register, &body)?
        .ensure(StatusCode::UNPROCESSABLE_ENTITY)?;
    Ok(CheckOutcome::pass("Correctly rejected invalid email"))
}

fn short_password(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let body = Credentials {
        email: "test@example.com".to_string(),
        password: "short".to_string(),
    };
    ctx.client
        .without_token()
        .send_json(Endpoint::Register, &body)?
        .ensure(StatusCode::UNPROCESSABLE_ENTITY)?;
    Ok(CheckOutcome::pass("Correctly rejected short password"))
}

fn duplicate_email(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let client = ctx.client.without_token();
    let body = Credentials {
        email: sibling_email(ctx.state, "duplicate_"),
        password: ctx.state.password.clone(),
    };

    // The first registration only sets up the duplicate; its status is irrelevant.
    client.send_json(Endpoint::Register, &body)?;
    client
        .send_json(Endpoint::Register, &body)?
        .ensure(StatusCode::BAD_REQUEST)?;
    Ok(CheckOutcome::pass("Correctly rejected duplicate email"))
}

fn invalid_verification_code(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let client = ctx.client.without_token();
    let email = sibling_email(ctx.state, "invalid_code_");

    client.send_json(
        Endpoint::Register,
        &Credentials {
            email: email.clone(),
            password: ctx.state.password.clone(),
        },
    )?;
    client
        .send_json(
            Endpoint::VerifyEmail,
            &VerifyEmail {
                email,
                code: BOGUS_CODE.to_string(),
            },
        )?
        .ensure(StatusCode::BAD_REQUEST)?;
    Ok(CheckOutcome::pass("Correctly rejected invalid code"))
}

fn unauthorized_access(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    ctx.client
        .without_token()
        .send(Endpoint::GetProfile)?
        .ensure(StatusCode::UNAUTHORIZED)?;
    Ok(CheckOutcome::pass("Correctly rejected unauthorized access"))
}

fn invalid_token(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    ctx.client
        .with_token(BOGUS_TOKEN)
        .send(Endpoint::GetProfile)?
        .ensure(StatusCode::UNAUTHORIZED)?;
    Ok(CheckOutcome::pass("Correctly rejected invalid token"))
}

fn nonexistent_workspace(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    if !ctx.has_token() {
        return Ok(CheckOutcome::skip("No access token"));
    }
    ctx.client
        .send(Endpoint::GetWorkspace(ctx.run.nonexistent_id))?
        .ensure(StatusCode::NOT_FOUND)?;
    Ok(CheckOutcome::pass(
        "Correctly returned 404 for nonexistent workspace",
    ))
}

fn nonexistent_session(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    if !ctx.has_token() {
        return Ok(CheckOutcome::skip("No access token"));
    }
    ctx.client
        .send(Endpoint::GetSession(ctx.run.nonexistent_id))?
        .ensure(StatusCode::NOT_FOUND)?;
    Ok(CheckOutcome::pass("Correctly returned 404 for nonexistent session"))
}
