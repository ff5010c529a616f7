//! Page Components
//!
//! Each page owns its collection, derived statistics, loading flag and
//! load error as signals, and follows the same synchronization contract:
//! a load replaces the collection and recomputes statistics in full; a
//! mutation calls one accessor, surfaces a notice, then re-runs the load.
//! The collection is never patched in place, so the table always reflects
//! the most recent successful read. Overlapping reloads are superseded
//! through a per-page [`LoadSequence`]; the latest load wins.

use leptos::*;

use autoloc_core::{
    car_stats, dashboard_stats, fallback, format_amount, max_manufacture_year, revenue, user_stats,
    ApiConfig, CarDraft, CarRecord, CarStats, DashboardStats, FuelType, LoadSequence,
    ReservationRecord, ReservationStats, UserRecord, UserStats,
};

use crate::api::ApiClient;
use crate::components::*;
use crate::notify;

/// Dashboard: car count, reservation counters from the stats endpoint,
/// validated revenue, and the recent reservations table. The three reads
/// are issued concurrently and state updates only once all have settled.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = store_value(expect_context::<ApiConfig>());
    let seq = store_value(LoadSequence::new());
    let (reservations, set_reservations) = create_signal(Vec::<ReservationRecord>::new());
    let (stats, set_stats) = create_signal(DashboardStats::default());
    let (loading, set_loading) = create_signal(true);
    let (load_error, set_load_error) = create_signal::<Option<String>>(None);

    let load = move || {
        let Some(ticket) = seq.try_update_value(|s| s.begin()) else {
            return;
        };
        set_loading.set(true);
        set_load_error.set(None);
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            let (cars, list, wire) = futures::join!(
                client.list_cars(),
                client.list_reservations(),
                client.reservation_stats(),
            );
            if !seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match (cars, list, wire) {
                (Ok(cars), Ok(list), Ok(wire)) => {
                    set_stats.set(dashboard_stats(&cars, &list, &wire));
                    set_reservations.set(list);
                }
                (cars, list, wire) => {
                    if let Some(cause) = cars.err().or(list.err()).or(wire.err()) {
                        set_load_error.set(Some(cause.user_message()));
                    }
                    // Keep the page visually populated with the fixed
                    // illustrative dataset until a reload succeeds.
                    set_reservations.set(fallback::sample_reservations());
                    set_stats.set(fallback::sample_stats());
                }
            }
            set_loading.set(false);
        });
    };
    create_effect(move |_| load());

    view! {
        <div class="page dashboard-page">
            {move || load_error.get().map(|message| view! {
                <ErrorBanner message=message on_retry=move |_| load()/>
            })}

            <div class="stats-grid">
                <StatCard
                    value=Signal::derive(move || stats.get().cars.to_string())
                    label="Voitures"
                    icon="🚗"
                />
                <StatCard
                    value=Signal::derive(move || stats.get().reservations.to_string())
                    label="Réservations"
                    icon="📅"
                />
                <StatCard
                    value=Signal::derive(move || stats.get().pending.to_string())
                    label="En attente"
                    icon="⏳"
                />
                <StatCard
                    value=Signal::derive(move || {
                        format!("{} FCFA", format_amount(stats.get().revenue))
                    })
                    label="Revenus"
                    icon="💰"
                />
            </div>

            <h2>"Réservations Récentes"</h2>
            {move || loading.get().then(|| view! { <LoadingSpinner/> })}
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Client"</th>
                        <th>"Voiture"</th>
                        <th>"Début"</th>
                        <th>"Fin"</th>
                        <th>"Montant"</th>
                        <th>"Statut"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || reservations.get().into_iter().map(|r| {
                        let start = r.start_label();
                        let end = r.end_label();
                        let amount = format!("{} FCFA", format_amount(r.total_amount));
                        view! {
                            <tr>
                                <td>{r.id}</td>
                                <td>{r.client_name}</td>
                                <td>{r.car_name}</td>
                                <td>{start}</td>
                                <td>{end}</td>
                                <td>{amount}</td>
                                <td><StatusBadge status=r.status/></td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Cars: full CRUD plus availability toggle, with the modal create/edit
/// form and its draft lifecycle.
#[component]
pub fn CarsPage() -> impl IntoView {
    let config = store_value(expect_context::<ApiConfig>());
    let seq = store_value(LoadSequence::new());
    let (cars, set_cars) = create_signal(Vec::<CarRecord>::new());
    let (stats, set_stats) = create_signal(CarStats::default());
    let (loading, set_loading) = create_signal(true);
    let (load_error, set_load_error) = create_signal::<Option<String>>(None);
    let (show_modal, set_show_modal) = create_signal(false);
    let (edit_mode, set_edit_mode) = create_signal(false);
    let (selected, set_selected) = create_signal::<Option<CarRecord>>(None);
    let draft = create_rw_signal(CarDraft::default());

    let load = move || {
        let Some(ticket) = seq.try_update_value(|s| s.begin()) else {
            return;
        };
        set_loading.set(true);
        set_load_error.set(None);
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            let result = client.list_cars().await;
            if !seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(list) => {
                    set_stats.set(car_stats(&list));
                    set_cars.set(list);
                }
                Err(cause) => set_load_error.set(Some(cause.user_message())),
            }
            set_loading.set(false);
        });
    };
    create_effect(move |_| load());

    let close_modal = move || {
        set_show_modal.set(false);
        set_edit_mode.set(false);
        set_selected.set(None);
    };

    let open_create = move |_| {
        draft.set(CarDraft::for_create());
        set_edit_mode.set(false);
        set_selected.set(None);
        set_show_modal.set(true);
    };

    let open_edit = move |car: CarRecord| {
        draft.set(CarDraft::for_edit(&car));
        set_selected.set(Some(car));
        set_edit_mode.set(true);
        set_show_modal.set(true);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let payload = match draft.get().to_payload() {
            Ok(payload) => payload,
            Err(cause) => {
                notify::alert(&cause.to_string());
                return;
            }
        };
        let editing = edit_mode
            .get()
            .then(|| selected.get().map(|car| car.id))
            .flatten();
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            let result = match editing {
                Some(id) => client.update_car(id, &payload).await,
                None => client.create_car(&payload).await,
            };
            match result {
                Ok(()) => {
                    notify::alert(if editing.is_some() {
                        "Voiture modifiée !"
                    } else {
                        "Voiture créée !"
                    });
                    close_modal();
                    load();
                }
                Err(cause) => {
                    notify::alert(&format!("Échec de l'enregistrement : {}", cause.user_message()))
                }
            }
        });
    };

    let toggle_availability = move |id: i64| {
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            match client.toggle_car_availability(id).await {
                Ok(()) => {
                    notify::alert("Disponibilité modifiée !");
                    load();
                }
                Err(cause) => {
                    notify::alert(&format!("Échec de la modification : {}", cause.user_message()))
                }
            }
        });
    };

    let delete_car = move |id: i64| {
        if !notify::confirm("Supprimer cette voiture ?") {
            return;
        }
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            match client.delete_car(id).await {
                Ok(()) => {
                    notify::alert("Voiture supprimée !");
                    load();
                }
                Err(cause) => {
                    notify::alert(&format!("Échec de la suppression : {}", cause.user_message()))
                }
            }
        });
    };

    view! {
        <div class="page cars-page">
            <div class="page-header">
                <h1>"🚙 Gestion des Voitures"</h1>
                <button class="btn btn-primary" on:click=open_create>"➕ Ajouter une voiture"</button>
            </div>

            {move || load_error.get().map(|message| view! {
                <ErrorBanner message=message on_retry=move |_| load()/>
            })}

            <div class="stats-grid">
                <StatCard
                    value=Signal::derive(move || stats.get().total.to_string())
                    label="Total"
                    icon="🚗"
                />
                <StatCard
                    value=Signal::derive(move || stats.get().available.to_string())
                    label="Disponibles"
                    icon="✅"
                />
                <StatCard
                    value=Signal::derive(move || stats.get().unavailable.to_string())
                    label="Indisponibles"
                    icon="❌"
                />
            </div>

            {move || loading.get().then(|| view! { <LoadingSpinner/> })}
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Image"</th>
                        <th>"Marque"</th>
                        <th>"Modèle"</th>
                        <th>"Prix/Jour"</th>
                        <th>"Année"</th>
                        <th>"Carburant"</th>
                        <th>"Places"</th>
                        <th>"Statut"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || cars.get().into_iter().map(|car| {
                        let car_for_edit = car.clone();
                        let id = car.id;
                        let price = format!("{} FCFA", format_amount(car.price_per_day));
                        let year = car.year_label();
                        let thumb_alt = format!("{} {}", car.brand, car.model);
                        let thumb = match car.image.clone() {
                            Some(url) => view! {
                                <img class="car-thumb" src=url alt=thumb_alt/>
                            }
                            .into_view(),
                            None => view! { <span class="car-thumb-missing">"📷"</span> }
                                .into_view(),
                        };
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{thumb}</td>
                                <td>{car.brand}</td>
                                <td>{car.model}</td>
                                <td>{price}</td>
                                <td>{year}</td>
                                <td>{car.fuel_type.label()}</td>
                                <td>{car.seats}</td>
                                <td>
                                    <FlagBadge
                                        on=car.available
                                        on_label="Disponible"
                                        off_label="Indisponible"
                                    />
                                </td>
                                <td class="actions">
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| open_edit(car_for_edit.clone())
                                    >"✏️"</button>
                                    <button
                                        class="btn"
                                        on:click=move |_| toggle_availability(id)
                                    >{if car.available { "🔒" } else { "🔓" }}</button>
                                    <button
                                        class="btn btn-danger"
                                        on:click=move |_| delete_car(id)
                                    >"🗑️"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {move || show_modal.get().then(|| view! {
                <Modal>
                    <h2>{move || if edit_mode.get() {
                        "✏️ Modifier la voiture"
                    } else {
                        "➕ Ajouter une voiture"
                    }}</h2>
                    <form on:submit=submit>
                        <div class="form-field">
                            <label>"Marque *"</label>
                            <input
                                type="text"
                                required=true
                                prop:value=move || draft.with(|d| d.brand.clone())
                                on:input=move |ev| draft.update(|d| d.brand = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label>"Modèle *"</label>
                            <input
                                type="text"
                                required=true
                                prop:value=move || draft.with(|d| d.model.clone())
                                on:input=move |ev| draft.update(|d| d.model = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label>"Prix/Jour (FCFA) *"</label>
                            <input
                                type="number"
                                required=true
                                min="0"
                                prop:value=move || draft.with(|d| d.price_per_day.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.price_per_day = event_target_value(&ev))
                                }
                            />
                        </div>
                        <div class="form-field">
                            <label>"URL Image"</label>
                            <input
                                type="text"
                                placeholder="https://exemple.com/image.jpg"
                                prop:value=move || draft.with(|d| d.image.clone())
                                on:input=move |ev| draft.update(|d| d.image = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field">
                            <label>"Description"</label>
                            <textarea
                                rows=3
                                prop:value=move || draft.with(|d| d.description.clone())
                                on:input=move |ev| {
                                    draft.update(|d| d.description = event_target_value(&ev))
                                }
                            ></textarea>
                        </div>
                        <div class="form-row">
                            <div class="form-field">
                                <label>"Année"</label>
                                <input
                                    type="number"
                                    min="1900"
                                    max=max_manufacture_year().to_string()
                                    prop:value=move || draft.with(|d| d.manufacture_year.clone())
                                    on:input=move |ev| {
                                        draft.update(|d| d.manufacture_year = event_target_value(&ev))
                                    }
                                />
                            </div>
                            <div class="form-field">
                                <label>"Carburant"</label>
                                <select on:change=move |ev| {
                                    draft.update(|d| d.fuel_type = FuelType::parse(&event_target_value(&ev)))
                                }>
                                    {FuelType::ALL.into_iter().map(|fuel| view! {
                                        <option
                                            value=fuel.as_str()
                                            selected=move || draft.with(|d| d.fuel_type == fuel)
                                        >{fuel.label()}</option>
                                    }).collect_view()}
                                </select>
                            </div>
                        </div>
                        <div class="form-field">
                            <label>"Nombre de places"</label>
                            <input
                                type="number"
                                min="2"
                                max="9"
                                prop:value=move || draft.with(|d| d.seats.clone())
                                on:input=move |ev| draft.update(|d| d.seats = event_target_value(&ev))
                            />
                        </div>
                        <div class="form-field checkbox-field">
                            <input
                                type="checkbox"
                                id="available"
                                prop:checked=move || draft.with(|d| d.available)
                                on:change=move |ev| {
                                    draft.update(|d| d.available = event_target_checked(&ev))
                                }
                            />
                            <label for="available">"Disponible à la location"</label>
                        </div>
                        <div class="modal-actions">
                            <button type="button" class="btn" on:click=move |_| close_modal()>
                                "Annuler"
                            </button>
                            <button type="submit" class="btn btn-primary">
                                {move || if edit_mode.get() { "Modifier" } else { "Créer" }}
                            </button>
                        </div>
                    </form>
                </Modal>
            })}
        </div>
    }
}

/// Reservations: list plus the independent stats read; staff can validate
/// or refuse pending entries. Transition legality is enforced by the
/// backend only; the page merely hides the buttons once resolved.
#[component]
pub fn ReservationsPage() -> impl IntoView {
    let config = store_value(expect_context::<ApiConfig>());
    let seq = store_value(LoadSequence::new());
    let (reservations, set_reservations) = create_signal(Vec::<ReservationRecord>::new());
    let (stats, set_stats) = create_signal(ReservationStats::default());
    let (loading, set_loading) = create_signal(true);
    let (load_error, set_load_error) = create_signal::<Option<String>>(None);

    let load = move || {
        let Some(ticket) = seq.try_update_value(|s| s.begin()) else {
            return;
        };
        set_loading.set(true);
        set_load_error.set(None);
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            let list = client.list_reservations().await;
            let wire = client.reservation_stats().await;
            if !seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match (list, wire) {
                (Ok(list), Ok(wire)) => {
                    set_stats.set(wire);
                    set_reservations.set(list);
                }
                (list, wire) => {
                    if let Some(cause) = list.err().or(wire.err()) {
                        set_load_error.set(Some(cause.user_message()));
                    }
                }
            }
            set_loading.set(false);
        });
    };
    create_effect(move |_| load());

    let validate = move |id: i64| {
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            match client.validate_reservation(id).await {
                Ok(()) => {
                    notify::alert("Réservation validée !");
                    load();
                }
                Err(cause) => {
                    notify::alert(&format!("Échec de la validation : {}", cause.user_message()))
                }
            }
        });
    };

    let refuse = move |id: i64| {
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            match client.refuse_reservation(id).await {
                Ok(()) => {
                    notify::alert("Réservation refusée !");
                    load();
                }
                Err(cause) => {
                    notify::alert(&format!("Échec du refus : {}", cause.user_message()))
                }
            }
        });
    };

    let validated_revenue =
        Signal::derive(move || reservations.with(|list| revenue(list)));

    view! {
        <div class="page reservations-page">
            <div class="page-header">
                <h1>"📅 Gestion des Réservations"</h1>
            </div>

            {move || load_error.get().map(|message| view! {
                <ErrorBanner message=message on_retry=move |_| load()/>
            })}

            <div class="stats-grid">
                <StatCard
                    value=Signal::derive(move || stats.get().total.to_string())
                    label="Total"
                    icon="📅"
                />
                <StatCard
                    value=Signal::derive(move || stats.get().pending.to_string())
                    label="En attente"
                    icon="⏳"
                />
                <StatCard
                    value=Signal::derive(move || {
                        format!("{} FCFA", format_amount(validated_revenue.get()))
                    })
                    label="Revenus validés"
                    icon="💰"
                />
            </div>

            {move || loading.get().then(|| view! { <LoadingSpinner/> })}
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Client"</th>
                        <th>"Voiture"</th>
                        <th>"Début"</th>
                        <th>"Fin"</th>
                        <th>"Montant"</th>
                        <th>"Statut"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || reservations.get().into_iter().map(|r| {
                        let id = r.id;
                        let pending = r.status.is_pending();
                        let start = r.start_label();
                        let end = r.end_label();
                        let amount = format!("{} FCFA", format_amount(r.total_amount));
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{r.client_name}</td>
                                <td>{r.car_name}</td>
                                <td>{start}</td>
                                <td>{end}</td>
                                <td>{amount}</td>
                                <td><StatusBadge status=r.status/></td>
                                <td class="actions">
                                    {pending.then(|| view! {
                                        <button
                                            class="btn btn-success"
                                            on:click=move |_| validate(id)
                                        >"✅ Valider"</button>
                                        <button
                                            class="btn btn-danger"
                                            on:click=move |_| refuse(id)
                                        >"❌ Refuser"</button>
                                    })}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// Users: listing with active/inactive counters, activity toggle, delete,
/// and a read-only detail modal. There is no create or edit form.
#[component]
pub fn UsersPage() -> impl IntoView {
    let config = store_value(expect_context::<ApiConfig>());
    let seq = store_value(LoadSequence::new());
    let (users, set_users) = create_signal(Vec::<UserRecord>::new());
    let (stats, set_stats) = create_signal(UserStats::default());
    let (loading, set_loading) = create_signal(true);
    let (load_error, set_load_error) = create_signal::<Option<String>>(None);
    let (selected, set_selected) = create_signal::<Option<UserRecord>>(None);

    let load = move || {
        let Some(ticket) = seq.try_update_value(|s| s.begin()) else {
            return;
        };
        set_loading.set(true);
        set_load_error.set(None);
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            let result = client.list_users().await;
            if !seq.try_with_value(|s| s.is_current(ticket)).unwrap_or(false) {
                return;
            }
            match result {
                Ok(list) => {
                    set_stats.set(user_stats(&list));
                    set_users.set(list);
                }
                Err(cause) => set_load_error.set(Some(cause.user_message())),
            }
            set_loading.set(false);
        });
    };
    create_effect(move |_| load());

    let toggle_active = move |id: i64| {
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            match client.toggle_user_active(id).await {
                Ok(()) => {
                    notify::alert("Statut modifié !");
                    load();
                }
                Err(cause) => {
                    notify::alert(&format!("Échec de la modification : {}", cause.user_message()))
                }
            }
        });
    };

    let delete_user = move |id: i64| {
        if !notify::confirm("Supprimer cet utilisateur ?") {
            return;
        }
        let client = ApiClient::new(config.get_value());
        spawn_local(async move {
            match client.delete_user(id).await {
                Ok(()) => {
                    notify::alert("Utilisateur supprimé !");
                    load();
                }
                Err(cause) => {
                    notify::alert(&format!("Échec de la suppression : {}", cause.user_message()))
                }
            }
        });
    };

    view! {
        <div class="page users-page">
            <div class="page-header">
                <h1>"👥 Gestion des Utilisateurs"</h1>
            </div>

            {move || load_error.get().map(|message| view! {
                <ErrorBanner message=message on_retry=move |_| load()/>
            })}

            <div class="stats-grid">
                <StatCard
                    value=Signal::derive(move || stats.get().total.to_string())
                    label="Total"
                    icon="👥"
                />
                <StatCard
                    value=Signal::derive(move || stats.get().active.to_string())
                    label="Actifs"
                    icon="✅"
                />
                <StatCard
                    value=Signal::derive(move || stats.get().inactive.to_string())
                    label="Inactifs"
                    icon="❌"
                />
            </div>

            {move || loading.get().then(|| view! { <LoadingSpinner/> })}
            <table>
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Nom Complet"</th>
                        <th>"Email"</th>
                        <th>"Date Inscription"</th>
                        <th>"Réservations"</th>
                        <th>"Statut"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || users.get().into_iter().map(|user| {
                        let id = user.id;
                        let detail = user.clone();
                        let registered = user.registered_label();
                        view! {
                            <tr>
                                <td>{id}</td>
                                <td>{user.full_name}</td>
                                <td>{user.email}</td>
                                <td>{registered}</td>
                                <td><span class="badge badge-info">{user.reservation_count}</span></td>
                                <td>
                                    <FlagBadge
                                        on=user.active
                                        on_label="Actif"
                                        off_label="Inactif"
                                    />
                                </td>
                                <td class="actions">
                                    <button
                                        class="btn btn-primary"
                                        on:click=move |_| set_selected.set(Some(detail.clone()))
                                    >"👁️"</button>
                                    <button
                                        class="btn"
                                        on:click=move |_| toggle_active(id)
                                    >{if user.active { "🔒" } else { "🔓" }}</button>
                                    <button
                                        class="btn btn-danger"
                                        on:click=move |_| delete_user(id)
                                    >"🗑️"</button>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>

            {move || selected.get().map(|user| view! {
                <Modal>
                    <h2>"👤 Détails de l'utilisateur"</h2>
                    <div class="detail-list">
                        <div class="detail-item"><strong>"ID : "</strong>{user.id}</div>
                        <div class="detail-item"><strong>"Nom : "</strong>{user.full_name.clone()}</div>
                        <div class="detail-item"><strong>"Email : "</strong>{user.email.clone()}</div>
                        <div class="detail-item">
                            <strong>"Date d'inscription : "</strong>{user.registered_label()}
                        </div>
                        <div class="detail-item">
                            <strong>"Nombre de réservations : "</strong>{user.reservation_count}
                        </div>
                        <div class="detail-item">
                            <strong>"Statut : "</strong>
                            <FlagBadge on=user.active on_label="Actif" off_label="Inactif"/>
                        </div>
                    </div>
                    <div class="modal-actions">
                        <button class="btn btn-primary" on:click=move |_| set_selected.set(None)>
                            "Fermer"
                        </button>
                    </div>
                </Modal>
            })}
        </div>
    }
}
