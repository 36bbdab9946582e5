use std::sync::Arc;
use std::time::Instant;

use chrono::Local;
use dioxus::prelude::*;

use crate::domain::entities::table::{FetchPhase, SortConfig, SortDirection};
use crate::domain::entities::user::{User, UserKey};
use crate::infra::http::users::JsonPlaceholderClient;
use crate::ui::state::app_state::AppState;
use crate::usecase::ports::source::UserSource;
use crate::{api_base_url, PAGE_SIZE};

pub fn sort_indicator(config: Option<SortConfig>, key: UserKey) -> &'static str {
    match config {
        Some(SortConfig {
            key: active,
            direction,
        }) if active == key => match direction {
            SortDirection::Ascending => " ↑",
            SortDirection::Descending => " ↓",
        },
        _ => "",
    }
}

pub fn root_style() -> &'static str {
    "min-height: 100vh; display: flex; flex-direction: column; background: #111827; color: #f9fafb; font-family: sans-serif;"
}

pub fn table_header_cell_style() -> &'static str {
    "padding: 12px 16px; text-align: left; font-size: 14px; font-weight: 600; color: #ffffff; cursor: pointer; border-bottom: 1px solid #374151; white-space: nowrap;"
}

pub fn table_cell_style() -> &'static str {
    "padding: 14px 16px; font-size: 14px; color: #d1d5db; border-bottom: 1px solid #1f2937; white-space: nowrap;"
}

pub fn overlay_backdrop_style() -> &'static str {
    "position: fixed; inset: 0; background: rgba(107, 114, 128, 0.75); display: flex; align-items: center; justify-content: center; z-index: 1100;"
}

pub fn overlay_panel_style() -> &'static str {
    "background: #1f2937; color: #f9fafb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.35); width: 100%; max-width: 480px; margin: 16px; padding: 8px;"
}

#[component]
pub fn App() -> Element {
    let AppState {
        mut table,
        mut search_input,
        mut debouncer,
        mut pending_search,
        mut status,
    } = AppState::new();

    let source =
        use_hook(|| Arc::new(JsonPlaceholderClient::new(api_base_url())) as Arc<dyn UserSource>);
    let users = use_resource(move || {
        let source = source.clone();
        async move {
            log::info!("fetching users");
            source.fetch_users().await
        }
    });

    use_effect(move || match users.read().as_ref() {
        None => {
            table.write().mark_loading();
        }
        Some(Ok(list)) => {
            table.write().mark_ready();
            *status.write() = format!(
                "Loaded {} users at {}",
                list.len(),
                Local::now().format("%H:%M:%S")
            );
        }
        Some(Err(err)) => {
            log::error!("user fetch failed: {err}");
            table.write().mark_failed(err.to_string());
            *status.write() = format!("Failed to load users: {err}");
        }
    });

    use_drop(move || {
        if let Some(task) = pending_search.take() {
            task.cancel();
        }
    });

    let records: Vec<User> = users
        .read()
        .as_ref()
        .and_then(|fetched| fetched.as_ref().ok())
        .cloned()
        .unwrap_or_default();

    let view = table.read().page_view(&records);
    let phase = table.read().phase().clone();
    let sort_config = table.read().sort_config();
    let selected = table.read().selection().open().cloned();
    let is_loading = matches!(phase, FetchPhase::Loading);
    let fetch_error = match &phase {
        FetchPhase::Failed(message) => Some(message.clone()),
        _ => None,
    };
    let records_for_next = records.clone();

    rsx! {
        div { style: "{root_style()}",
            header {
                style: "display: flex; align-items: baseline; gap: 12px; padding: 16px 24px; border-bottom: 1px solid #1f2937;",
                h1 { style: "font-size: 20px; font-weight: 700; margin: 0;", "User Directory" }
                span { style: "font-size: 13px; color: #9ca3af;", " {status}" }
            }

            div { style: "padding: 24px 24px 0; max-width: 420px;",
                input {
                    r#type: "search",
                    value: "{search_input}",
                    placeholder: "Search by name or email",
                    style: "display: block; width: 100%; border: 0; border-radius: 6px; background: #374151; padding: 8px 12px; color: #d1d5db; font-size: 14px;",
                    oninput: move |event| {
                        let value = event.value();
                        search_input.set(value.clone());

                        if let Some(task) = pending_search.take() {
                            task.cancel();
                        }

                        let token = debouncer.write().note_input(Instant::now());
                        let delay = debouncer.peek().delay();
                        let task = spawn(async move {
                            tokio::time::sleep(delay).await;
                            if debouncer.peek().is_current(token) {
                                log::debug!("search committed: {value:?}");
                                table.write().apply_search(value);
                                pending_search.set(None);
                            }
                        });
                        pending_search.set(Some(task));
                    },
                }
            }

            div { style: "flex: 1; padding: 24px; overflow-x: auto;",
                table { style: "min-width: 100%; border-collapse: collapse;",
                    thead {
                        tr {
                            for key in UserKey::ALL {
                                th {
                                    style: "{table_header_cell_style()}",
                                    onclick: move |_| {
                                        log::debug!("sort toggled: {}", key.label());
                                        table.write().handle_sort(key);
                                    },
                                    {format!("{}{}", key.label(), sort_indicator(sort_config, key))}
                                }
                            }
                        }
                    }
                    tbody {
                        if let Some(message) = fetch_error.clone() {
                            tr {
                                td {
                                    style: "{table_cell_style()}",
                                    colspan: UserKey::ALL.len(),
                                    "Could not load users: {message}"
                                }
                            }
                        } else if !is_loading && view.rows.is_empty() {
                            tr {
                                td {
                                    style: "{table_cell_style()}",
                                    colspan: UserKey::ALL.len(),
                                    "No matching users"
                                }
                            }
                        } else {
                            {view.rows.iter().map(|user| {
                                let user = user.clone();
                                let row_key = user.row_key();
                                let user_for_click = user.clone();
                                rsx! {
                                    tr {
                                        key: "{row_key}",
                                        style: "cursor: pointer;",
                                        onclick: move |_| table.write().select(user_for_click.clone()),
                                        td { style: "{table_cell_style()} font-weight: 500; color: #ffffff;", "{user.name}" }
                                        td { style: "{table_cell_style()}", "{user.username}" }
                                        td { style: "{table_cell_style()}", "{user.email}" }
                                        td { style: "{table_cell_style()}", "{user.website}" }
                                    }
                                }
                            })}
                        }
                    }
                }

                if is_loading {
                    div { style: "display: flex; flex-direction: column; gap: 8px; padding-top: 8px;",
                        for slot in 0..PAGE_SIZE {
                            div {
                                key: "{slot}",
                                style: "width: 100%; padding: 24px; background: #1f2937; border-radius: 4px;",
                            }
                        }
                    }
                }
            }

            nav {
                style: "display: flex; align-items: center; justify-content: space-between; gap: 12px; padding: 12px 24px; background: #1f2937; border-top: 1px solid #374151;",
                p { style: "margin: 0; font-size: 13px; color: #9ca3af;",
                    "Showing {view.showing_from} to {view.showing_to} of {view.filtered_total} results · Page {view.current_page} of {view.total_pages}"
                }
                div { style: "display: flex; gap: 12px;",
                    button {
                        style: "padding: 8px 12px; border-radius: 6px; border: 1px solid #d1d5db; background: #ffffff; color: #111827; font-size: 14px; font-weight: 600;",
                        disabled: !view.has_prev,
                        onclick: move |_| table.write().prev_page(),
                        "Previous"
                    }
                    button {
                        style: "padding: 8px 12px; border-radius: 6px; border: 1px solid #d1d5db; background: #ffffff; color: #111827; font-size: 14px; font-weight: 600;",
                        disabled: !view.has_next,
                        onclick: {
                            let records = records_for_next.clone();
                            move |_| table.write().next_page(&records)
                        },
                        "Next"
                    }
                }
            }

            if let Some(user) = selected {
                div {
                    style: "{overlay_backdrop_style()}",
                    onclick: move |_| table.write().dismiss(),
                    div {
                        style: "{overlay_panel_style()}",
                        onclick: move |event| event.stop_propagation(),
                        div { style: "display: flex; justify-content: flex-end;",
                            button {
                                style: "border: 0; background: transparent; color: #d1d5db; font-size: 18px; cursor: pointer;",
                                onclick: move |_| table.write().dismiss(),
                                "×"
                            }
                        }
                        h1 { style: "font-size: 22px; font-weight: 800; text-align: center; margin: 0 0 16px;",
                            "{user.name}"
                        }
                        div { style: "display: grid; grid-template-columns: 110px 1fr; gap: 8px; padding: 0 24px 24px; font-size: 14px;",
                            span { style: "color: #9ca3af;", "Username" }
                            span { "{user.username}" }
                            span { style: "color: #9ca3af;", "Email" }
                            span { "{user.email}" }
                            span { style: "color: #9ca3af;", "Phone" }
                            span { "{user.phone}" }
                            span { style: "color: #9ca3af;", "Website" }
                            span { "{user.website}" }
                            span { style: "color: #9ca3af;", "Company" }
                            span { "{user.company.name}" }
                            span { style: "color: #9ca3af;", "City" }
                            span { "{user.address.city}" }
                        }
                    }
                }
            }
        }
    }
}
