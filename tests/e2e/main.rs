//! End-to-end scenarios: whole suites against a mock platform.
