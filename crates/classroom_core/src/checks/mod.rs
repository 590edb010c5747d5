//! The checks each suite is made of.
//!
//! Every check issues one call (two for the duplicate/invalid-code cases),
//! compares the status against one expected value, and reads a few fields.

pub mod auth;
pub mod errors;
pub mod integration;
pub mod sessions;
pub mod users;
pub mod workspaces;

use crate::plan::Check;

/// Registration through restore, in the order a first-time user would go.
pub fn full_suite() -> Vec<Check> {
    vec![
        Check::new("Registration", auth::register),
        Check::new("Email Verification", auth::verify_email),
        Check::new("Login", auth::login),
        Check::new("Get Profile", users::get_profile),
        Check::new("Update Profile", users::update_profile),
        Check::new("Create Workspace", workspaces::create),
        Check::new("List Workspaces", workspaces::list),
        Check::new("Get Workspace", workspaces::get),
        Check::new("Create Session", sessions::create),
        Check::new("List Sessions", sessions::list),
        Check::new("Start Session", sessions::start),
        Check::new("Stop Session", sessions::stop),
        Check::new("Archive Workspace", workspaces::archive),
        Check::new("Unarchive Workspace", workspaces::unarchive),
        Check::new("Delete Session", sessions::delete),
        Check::new("Restore Session", sessions::restore),
        Check::new("Delete Workspace", workspaces::delete),
        Check::new("Restore Workspace", workspaces::restore),
    ]
}

/// `value`, or `N/A` when the server left it out.
pub(crate) fn shown<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| "N/A".to_string(), |v| v.to_string())
}
