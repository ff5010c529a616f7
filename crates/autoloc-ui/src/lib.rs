//! AutoLoc Admin — Leptos WebAssembly frontend
//!
//! Administrative dashboard for a car-rental REST backend:
//! - Compiles to WebAssembly, client-side rendered
//! - Four pages (dashboard, cars, reservations, users) sharing one
//!   load/mutate synchronization contract
//! - Every mutation is followed by a full reload; displayed state is
//!   always a pure function of the most recent successful read

use leptos::*;
use leptos_router::*;

use autoloc_core::ApiConfig;

pub mod api;
pub mod components;
pub mod notify;
pub mod pages;

pub use api::ApiClient;
use components::{Sidebar, TopBar};
use pages::{CarsPage, DashboardPage, ReservationsPage, UsersPage};

/// Main application component: fixed configuration, layout shell, routes.
#[component]
pub fn App() -> impl IntoView {
    // Initialize tracing for WASM
    tracing_wasm::set_as_global_default();

    // The backend origin is fixed here for the process lifetime.
    provide_context(ApiConfig::default());

    view! {
        <Router>
            <div class="app-container">
                <Sidebar/>
                <main class="main-content">
                    <TopBar/>
                    <Routes>
                        <Route path="/" view=DashboardPage/>
                        <Route path="/voitures" view=CarsPage/>
                        <Route path="/reservations" view=ReservationsPage/>
                        <Route path="/utilisateurs" view=UsersPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

/// Application entry point for WASM
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
