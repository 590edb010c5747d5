//! Registration, email verification and login.

use crate::error::Result;
use crate::models::{Credentials, ResendCode, VerifyEmail};
use crate::plan::Check;
use crate::report::CheckOutcome;
use crate::runner::{CheckContext, SuiteState};

/// Register, then verify with a code the operator reads from the platform's logs.
///
/// An empty first answer asks the platform to resend the code and prompts once more.
pub fn suite() -> Vec<Check> {
    vec![
        Check::new("User Registration", register),
        Check::new("Resend Verification Code", resend_unless_code_given),
        Check::new("Email Verification", verify_pending_code),
        Check::new("User Login", login_if_verified),
    ]
}

pub(crate) fn credentials(state: &SuiteState) -> Credentials {
    Credentials {
        email: state.email.clone(),
        password: state.password.clone(),
    }
}

pub fn register(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let reply = ctx.client.register(&credentials(ctx.state))?;
    ctx.state.user_id = Some(reply.user_id);

    Ok(CheckOutcome::pass(format!("User registered: {}", reply.email))
        .with_detail(format!("User ID: {}", reply.user_id))
        .with_detail(format!(
            "Verification code sent: {}",
            reply.verification_code_sent
        )))
}

/// Prompt for the code and verify; an empty answer fails the check.
pub fn verify_email(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    ctx.note("Note: In development mode, verification code is logged to console");
    ctx.note("Please check the API logs for the verification code");

    match ctx.prompt.ask("  Enter verification code: ")? {
        Some(code) => submit_code(ctx, &code),
        None => Ok(CheckOutcome::fail("No verification code provided")),
    }
}

/// Verify `code` for the run's email and keep the issued token.
pub(crate) fn submit_code(ctx: &mut CheckContext<'_>, code: &str) -> Result<CheckOutcome> {
    let token = ctx.client.verify_email(&VerifyEmail {
        email: ctx.state.email.clone(),
        code: code.to_string(),
    })?;
    ctx.adopt_token(&token.access_token);

    Ok(CheckOutcome::pass("Email verified and token received")
        .with_detail(format!("Access token: {}", token.preview())))
}

pub fn login(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let token = ctx.client.login(&credentials(ctx.state))?;
    ctx.adopt_token(&token.access_token);

    Ok(CheckOutcome::pass("Login successful")
        .with_detail(format!("Access token: {}", token.preview())))
}

fn resend_unless_code_given(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    if let Some(code) = ctx
        .prompt
        .ask("Enter verification code (or press Enter to skip): ")?
    {
        ctx.state.pending_code = Some(code);
        return Ok(CheckOutcome::skip("Verification code provided"));
    }

    ctx.client.resend_code(&ResendCode {
        email: ctx.state.email.clone(),
    })?;
    Ok(CheckOutcome::pass("Code resent"))
}

fn verify_pending_code(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let code = match ctx.state.pending_code.take() {
        Some(code) => Some(code),
        None => ctx.prompt.ask("Enter new verification code: ")?,
    };

    match code {
        Some(code) => submit_code(ctx, &code),
        None => Ok(CheckOutcome::skip("No verification code provided")),
    }
}

fn login_if_verified(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    if !ctx.has_token() {
        return Ok(CheckOutcome::skip("Email not verified; no access token"));
    }
    login(ctx)
}
