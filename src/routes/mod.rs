mod explorer;
mod not_found;

pub use explorer::ExplorerPage;
pub use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=ExplorerPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
