//! Minimalistic 404 page for unknown routes.

use crate::components::AppShell;
use leptos::prelude::*;
use leptos_router::components::A;

/// Renders a clean not-found page used as the top-level route fallback.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <main class="flex-grow flex flex-col items-center justify-center text-center px-4 py-20">
                <div class="relative">
                    <h1 class="text-9xl font-black text-white/10 select-none">"404"</h1>
                    <p class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 text-2xl font-bold text-white whitespace-nowrap">
                        "Page not found"
                    </p>
                </div>

                <div class="mt-4 space-y-6">
                    <p class="text-indigo-200 max-w-sm mx-auto">
                        "The page you requested does not exist."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A
                            href="/"
                            {..}
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-indigo-600 bg-white rounded-lg hover:bg-purple-100 focus:ring-4 focus:outline-none focus:ring-purple-300 transition-all"
                        >
                            "Go Home"
                        </A>
                        <button
                            on:click=move |_| {
                                let window = web_sys::window().expect("no window");
                                let history = window.history().expect("no history");
                                let _ = history.back();
                            }
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-white bg-white/10 border border-white/30 rounded-lg hover:bg-white/20 focus:ring-4 focus:ring-white/30 transition-all"
                        >
                            "Go Back"
                        </button>
                    </div>
                </div>
            </main>
        </AppShell>
    }
}
