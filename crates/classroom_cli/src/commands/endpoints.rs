//! Endpoint catalogue command.

use anyhow::Result;
use classroom_core::Endpoint;
use console::style;

/// Print every route the checks exercise.
pub fn run() -> Result<()> {
    let catalog = Endpoint::catalog();

    println!("{}", style("Classroom Platform Endpoints:").bold());
    println!();
    for entry in &catalog {
        let auth = if entry.auth {
            style("auth").yellow()
        } else {
            style("open").green()
        };
        println!(
            "  {:<7} {:<40} {}  {}  {}",
            style(entry.method.as_str()).cyan(),
            entry.path,
            entry.success.as_u16(),
            auth,
            style(entry.notes).dim()
        );
    }
    println!();
    println!("  {} endpoints", style(catalog.len()).cyan());

    Ok(())
}
