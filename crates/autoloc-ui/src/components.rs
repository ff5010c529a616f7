//! Reusable UI Components
//!
//! Layout shell pieces and small display widgets shared by the four pages.

use autoloc_core::ReservationStatus;
use leptos::*;
use leptos_router::*;

/// Side navigation, persistent across all routed pages.
#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="logo">"🚗 AutoLoc Admin"</div>
            <nav class="sidebar-nav">
                <A href="/" class="nav-item">"📊 Dashboard"</A>
                <A href="/voitures" class="nav-item">"🚙 Gestion Voitures"</A>
                <A href="/reservations" class="nav-item">"📅 Réservations"</A>
                <A href="/utilisateurs" class="nav-item">"👥 Utilisateurs"</A>
            </nav>
        </aside>
    }
}

/// Top bar above the routed page.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="topbar">
            <span class="topbar-title">"Espace administration"</span>
            <span class="topbar-user">"👤 Admin"</span>
        </header>
    }
}

/// Counter card used in every stats grid.
#[component]
pub fn StatCard(
    #[prop(into)] value: MaybeSignal<String>,
    label: &'static str,
    icon: &'static str,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div>
                <h3>{value}</h3>
                <p>{label}</p>
            </div>
            <div class="stat-icon">{icon}</div>
        </div>
    }
}

/// Loading spinner
#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="loading-spinner">
            <div class="spinner"></div>
            <span>"Chargement..."</span>
        </div>
    }
}

/// Load-failure banner, dismissed by retrying the load.
#[component]
pub fn ErrorBanner(
    #[prop(into)] message: String,
    #[prop(into)] on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-banner">
            <span class="error-icon">"⚠️"</span>
            <span class="error-message">{message}</span>
            <button class="btn" on:click=move |_| on_retry.call(())>"Recharger"</button>
        </div>
    }
}

/// Reservation status badge; unrecognized statuses render verbatim.
#[component]
pub fn StatusBadge(status: ReservationStatus) -> impl IntoView {
    view! {
        <span class=status.badge_class()>{status.label().to_string()}</span>
    }
}

/// Two-state badge for availability / active flags.
#[component]
pub fn FlagBadge(on: bool, on_label: &'static str, off_label: &'static str) -> impl IntoView {
    view! {
        <span class="badge" class:badge-success=on class:badge-danger=!on>
            {if on { on_label } else { off_label }}
        </span>
    }
}

/// Modal overlay shell.
#[component]
pub fn Modal(children: Children) -> impl IntoView {
    view! {
        <div class="modal-overlay">
            <div class="modal-content">
                {children()}
            </div>
        </div>
    }
}
