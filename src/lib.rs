//! txpulse: transaction health classification and alerting.
//!
//! `domain` holds the pure classifier and its ports, `infrastructure` the
//! record sources and notification channels, `application` the config and
//! batch orchestration, `presentation` the CLI.

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
