//! Explorer page: the fetch controls, the profile card list, and the modal
//! detail view. The page owns the single [`ExplorerState`] signal; every
//! mutation goes through the state's transition methods so the lifecycle
//! stays testable away from the browser.

use crate::app_lib::format::{capitalize, format_date, gender_icon, nationality_flag};
use crate::components::{Alert, AlertKind, AppShell, Button, Spinner};
use crate::features::users::client;
use crate::features::users::state::ExplorerState;
use crate::features::users::types::User;
use leptos::{prelude::*, task::spawn_local};

/// Starts a fetch for the currently requested count and settles the state
/// when the response arrives. Stale settlements are discarded by the state,
/// so overlapping fetches need no coordination here.
fn dispatch_fetch(state: RwSignal<ExplorerState>) {
    let count = state.with_untracked(|s| s.requested_count());
    let Some(seq) = state.try_update(|s| s.start_fetch()) else {
        return;
    };

    spawn_local(async move {
        let outcome = client::fetch_users(count).await;
        state.update(|s| s.resolve_fetch(seq, outcome));
    });
}

#[component]
pub fn ExplorerPage() -> impl IntoView {
    let state = RwSignal::new(ExplorerState::new());
    dispatch_fetch(state);

    view! {
        <AppShell>
            <header class="bg-gradient-to-r from-indigo-600 to-purple-600 text-white p-4 shadow-lg sticky top-0 z-10">
                <div class="max-w-6xl mx-auto flex flex-col items-center gap-3">
                    <h1 class="text-3xl font-bold tracking-tight animate-float flex items-center gap-2">
                        <span>"😊"</span>
                        "Random User Explorer"
                    </h1>
                    <div class="flex items-center gap-4">
                        <div class="flex items-center bg-white/20 p-2 rounded-lg shadow-inner">
                            <label
                                for="user-count"
                                class="mr-2 text-sm font-medium text-indigo-100"
                            >
                                "Users:"
                            </label>
                            <input
                                id="user-count"
                                type="number"
                                min="1"
                                max="50"
                                class="px-2 py-1 border-0 bg-white/30 text-white rounded-md focus:outline-none focus:ring-2 focus:ring-purple-300 w-16 text-center appearance-none"
                                aria-label="Number of users to fetch"
                                prop:value=move || state.with(|s| s.requested_count().to_string())
                                on:input=move |event| {
                                    let Ok(raw) = event_target_value(&event).parse::<i64>() else {
                                        return;
                                    };
                                    let applied = state
                                        .try_update(|s| s.set_requested_count(raw))
                                        .unwrap_or(false);
                                    if applied {
                                        dispatch_fetch(state);
                                    }
                                }
                            />
                        </div>
                        <Button
                            disabled=Signal::derive(move || state.with(|s| s.is_loading()))
                            {..}
                            on:click=move |_| dispatch_fetch(state)
                        >
                            {move || {
                                if state.with(|s| s.is_loading()) {
                                    "Fetching..."
                                } else {
                                    "✨ Discover"
                                }
                            }}
                        </Button>
                    </div>
                </div>
            </header>

            <main class="max-w-6xl mx-auto p-4 sm:p-8 pt-8 w-full flex-grow">
                {move || {
                    state
                        .with(|s| s.error().map(str::to_string))
                        .map(|message| {
                            view! {
                                <div class="mb-8">
                                    <Alert kind=AlertKind::Error message=message />
                                </div>
                            }
                        })
                }}
                {move || {
                    if state.with(|s| s.is_loading()) {
                        view! {
                            <div class="flex flex-col items-center justify-center py-20">
                                <Spinner />
                                <p class="mt-4 text-indigo-100 font-medium text-lg">
                                    "Finding amazing people..."
                                </p>
                            </div>
                        }
                            .into_any()
                    } else if state.with(|s| s.users().is_empty() && s.error().is_none()) {
                        view! {
                            <Alert
                                kind=AlertKind::Info
                                message="No profiles to show. Try fetching a new batch.".to_string()
                            />
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="grid grid-cols-1 gap-6">
                                <For
                                    each=move || {
                                        state
                                            .with(|s| {
                                                s.users()
                                                    .iter()
                                                    .cloned()
                                                    .enumerate()
                                                    .collect::<Vec<_>>()
                                            })
                                    }
                                    key=|(_, user)| user.login.uuid.clone()
                                    children=move |(index, user)| {
                                        view! { <UserCard state=state index=index user=user /> }
                                    }
                                />
                            </div>
                        }
                            .into_any()
                    }
                }}
            </main>

            {move || {
                state
                    .with(|s| s.selected().cloned())
                    .map(|user| view! { <UserDetailModal state=state user=user /> })
            }}
        </AppShell>
    }
}

/// One card in the list. Clicking (or pressing Enter on) the card selects
/// the profile for the modal detail view.
#[component]
fn UserCard(state: RwSignal<ExplorerState>, index: usize, user: User) -> impl IntoView {
    let full_name = user.full_name();
    let aria_label = format!("View details for {full_name}");
    let flag = nationality_flag(&user.nat);
    let icon = gender_icon(&user.gender);
    let picture = user.picture.large.clone();
    let email = user.email.clone();
    let location_line = format!("{}, {}", user.location.city, user.location.country);
    let age_line = format!("{} years", user.dob.age);
    let phone = user.phone.clone();
    let delay = format!("animation-delay: {}ms", index * 80);

    let click_user = user.clone();
    let key_user = user;

    view! {
        <div
            class="bg-white rounded-xl shadow-lg overflow-hidden hover:shadow-xl transition-shadow duration-300 transform hover:-translate-y-1 cursor-pointer animate-fadeIn group border border-gray-200/50"
            style=delay
            tabindex="0"
            aria-label=aria_label
            on:click=move |_| state.update(|s| s.select_user(click_user.clone()))
            on:keydown=move |event| {
                if event.key() == "Enter" {
                    state.update(|s| s.select_user(key_user.clone()));
                }
            }
        >
            <table class="w-full border-collapse text-sm">
                <caption class="p-4 text-left bg-gradient-to-r from-indigo-50 to-purple-50 group-hover:from-indigo-100 group-hover:to-purple-100 transition-colors duration-300 border-b border-indigo-200">
                    <div class="flex items-center gap-4">
                        <img
                            src=picture
                            alt=full_name.clone()
                            class="w-16 h-16 rounded-full shadow-md border-2 border-white"
                        />
                        <div>
                            <h2 class="text-xl font-semibold text-indigo-800">
                                {full_name}
                                <span class="ml-2 text-lg">{icon}</span>
                                <span class="ml-1 text-lg">{flag}</span>
                            </h2>
                            <p class="text-indigo-600 font-medium">{email}</p>
                        </div>
                    </div>
                </caption>
                <tbody class="text-gray-700">
                    <tr class="group-hover:bg-gray-50/50 transition-colors duration-150">
                        <th class="p-3 text-left font-semibold w-1/5 bg-gray-50/70 border-r border-gray-200">
                            "📍 Location"
                        </th>
                        <td class="p-3">{location_line}</td>
                    </tr>
                    <tr class="group-hover:bg-gray-50/50 transition-colors duration-150">
                        <th class="p-3 text-left font-semibold w-1/5 bg-gray-50/70 border-r border-gray-200">
                            "🎂 Age"
                        </th>
                        <td class="p-3">{age_line}</td>
                    </tr>
                    <tr class="group-hover:bg-gray-50/50 transition-colors duration-150">
                        <th class="p-3 text-left font-semibold w-1/5 bg-gray-50/70 border-r border-gray-200">
                            "📱 Phone"
                        </th>
                        <td class="p-3">{phone}</td>
                    </tr>
                </tbody>
            </table>
        </div>
    }
}

/// Modal detail view for the selected profile. Only the close button
/// dismisses it; closing never touches the list or the fetch lifecycle.
#[component]
fn UserDetailModal(state: RwSignal<ExplorerState>, user: User) -> impl IntoView {
    let full_name = user.full_name();
    let flag = nationality_flag(&user.nat);
    let icon = gender_icon(&user.gender);
    let banner = user.picture.large.clone();
    let portrait = user.picture.large.clone();
    let email = user.email.clone();
    let phone = user.phone.clone();
    let cell = user.cell.clone();
    let born = format!("{} ({} years)", format_date(&user.dob.date), user.dob.age);
    let gender_label = capitalize(&user.gender);
    let street_line = format!(
        "{} {},",
        user.location.street.number, user.location.street.name
    );
    let city_line = format!(
        "{}, {}, {}",
        user.location.city, user.location.state, user.location.postcode
    );
    let country = user.location.country.clone();
    let username = user.login.username.clone();
    let password = user.login.password.clone();

    view! {
        <div class="fixed inset-0 bg-black bg-opacity-70 flex items-center justify-center p-4 z-50 animate-fadeIn">
            <div class="bg-white rounded-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto shadow-2xl animate-scaleIn">
                <div class="relative">
                    <img
                        src=banner
                        alt=full_name.clone()
                        class="w-full h-64 object-cover rounded-t-2xl"
                    />
                    <button
                        class="absolute top-4 right-4 bg-black bg-opacity-50 text-white p-2 rounded-full hover:bg-opacity-70 transition-colors"
                        aria-label="Close details"
                        on:click=move |_| state.update(|s| s.clear_selection())
                    >
                        "✕"
                    </button>
                </div>

                <div class="p-6">
                    <div class="flex items-center gap-4 mb-6">
                        <div class="w-24 h-24 rounded-full border-4 border-white shadow-lg overflow-hidden -mt-16">
                            <img
                                src=portrait
                                alt=full_name.clone()
                                class="w-full h-full object-cover"
                            />
                        </div>
                        <div>
                            <h2 class="text-3xl font-bold text-gray-800 flex items-center gap-2">
                                {full_name}
                                <span>{icon}</span>
                                <span>{flag}</span>
                            </h2>
                            <p class="text-indigo-600">{email}</p>
                        </div>
                    </div>

                    <div class="grid grid-cols-1 md:grid-cols-2 gap-4 mb-6">
                        <div class="bg-gray-50 p-4 rounded-lg">
                            <h3 class="font-medium text-gray-700 mb-2">"Contact Details"</h3>
                            <div class="space-y-1">
                                <p class="text-gray-800 flex items-center gap-2">
                                    <span class="text-indigo-500">"📱"</span>
                                    {phone}
                                </p>
                                <p class="text-gray-800 flex items-center gap-2">
                                    <span class="text-indigo-500">"🏠"</span>
                                    {cell}
                                </p>
                            </div>
                        </div>
                        <div class="bg-gray-50 p-4 rounded-lg">
                            <h3 class="font-medium text-gray-700 mb-2">"Personal Details"</h3>
                            <div class="space-y-1">
                                <p class="text-gray-800 flex items-center gap-2">
                                    <span class="text-indigo-500">"🎂"</span>
                                    {born}
                                </p>
                                <p class="text-gray-800 flex items-center gap-2">
                                    <span class="text-indigo-500">"👤"</span>
                                    {gender_label}
                                </p>
                            </div>
                        </div>
                    </div>

                    <div class="bg-gray-50 p-4 rounded-lg mb-6">
                        <h3 class="font-medium text-gray-700 mb-2">"Address"</h3>
                        <p class="text-gray-800">
                            {street_line}
                            <br />
                            {city_line}
                            <br />
                            {country}
                        </p>
                    </div>

                    <div class="bg-indigo-50 p-4 rounded-lg">
                        <h3 class="font-medium text-indigo-700 mb-2">"Account Details"</h3>
                        <div class="space-y-1">
                            <p class="text-gray-800 flex items-center gap-2">
                                <span class="text-indigo-500">"👤"</span>
                                {username}
                            </p>
                            <p class="text-gray-800 flex items-center gap-2">
                                <span class="text-indigo-500">"🔑"</span>
                                {password}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
