//! Shared UI components exported for routes.

pub mod layout;
pub mod ui;

pub use layout::AppShell;
pub use ui::{Alert, AlertKind, Button, Spinner};
