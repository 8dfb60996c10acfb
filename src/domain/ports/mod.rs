pub mod notifier;
pub mod source;

pub use notifier::{NotificationError, Notifier};
pub use source::{RecordSource, SourceError};
