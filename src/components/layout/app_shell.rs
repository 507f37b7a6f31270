//! Shared page frame. It centralizes the background and footer so routes
//! can focus on content; the explorer page brings its own sticky header
//! because the fetch controls live there.

use leptos::prelude::*;

/// Wraps routes with the page background and footer.
#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-blue-900 flex flex-col">
            {children()}
            <footer class="bg-gray-800 text-gray-300 text-center p-4 mt-auto">
                <p>{format!("Random User Explorer v{}", env!("CARGO_PKG_VERSION"))}</p>
            </footer>
        </div>
    }
}
