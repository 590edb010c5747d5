//! The signed-in user's profile.

use crate::error::Result;
use crate::models::ProfileUpdate;
use crate::plan::Check;
use crate::report::CheckOutcome;
use crate::runner::CheckContext;

pub fn suite() -> Vec<Check> {
    vec![
        Check::new("Get User Profile", get_profile),
        Check::new("Update User Profile", update_profile),
    ]
}

pub fn get_profile(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let profile = ctx.client.profile()?;

    Ok(CheckOutcome::pass(format!("Profile retrieved: {}", profile.email))
        .with_detail(format!("Name: {}", profile.display_name())))
}

pub fn update_profile(ctx: &mut CheckContext<'_>) -> Result<CheckOutcome> {
    let update = ProfileUpdate {
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        avatar_url: "https://example.com/avatar.jpg".to_string(),
    };
    let profile = ctx.client.update_profile(&update)?;

    if profile.first_name.is_none() {
        return Ok(CheckOutcome::fail("Update profile failed")
            .with_detail("Response has no first_name"));
    }
    Ok(CheckOutcome::pass("Profile updated")
        .with_detail(format!("Name: {}", profile.display_name())))
}
