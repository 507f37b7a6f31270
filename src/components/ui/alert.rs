//! Alert banners for error and informational messages.

use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Info,
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, message: String) -> impl IntoView {
    let (class, icon) = match kind {
        AlertKind::Error => (
            "p-4 bg-red-100 text-red-700 rounded-lg border border-red-300 shadow-md",
            "⚠️",
        ),
        AlertKind::Info => (
            "p-4 bg-indigo-50 text-indigo-700 rounded-lg border border-indigo-200 shadow-md",
            "💡",
        ),
    };

    view! {
        <div class=class role="alert">
            <p class="font-medium flex items-center gap-2">
                <span>{icon}</span>
                {message}
            </p>
        </div>
    }
}
