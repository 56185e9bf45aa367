use dioxus::prelude::*;

use offsite_cost_calculator::{
    domain::AppState,
    infra::cost_table_store::{config_file, write_template, COST_TABLE_ENV},
    util::format::format_currency,
};

use crate::ui::components::toast::{push_toast, ToastKind, ToastMessage};

#[component]
pub fn AssumptionsPage() -> Element {
    let state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let profiles = state.with(|st| st.cost_table.profiles().to_vec());
    let config_path = config_file()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "unavailable".to_string());
    let config_exists = config_file().is_some_and(|path| path.exists());

    let on_write_template = move |_| match write_template(None) {
        Ok(path) => push_toast(
            toasts,
            ToastKind::Success,
            format!("Wrote cost table template to {}. Restart to apply edits.", path.display()),
        ),
        Err(err) => push_toast(toasts, ToastKind::Error, format!("Could not write template: {err}")),
    };

    rsx! {
        div { class: "assumptions",
            section { class: "card",
                h2 { class: "card__title", "Cost assumptions" }
                p { class: "card__subtitle",
                    "Average per-person costs. Local attendees only pay for meals."
                }
                table { class: "comparison",
                    thead {
                        tr {
                            th { "Destination" }
                            th { class: "comparison__number", "Flight" }
                            th { class: "comparison__number", "Hotel / night" }
                            th { class: "comparison__number", "Meals / day" }
                            th { class: "comparison__number", "Ground" }
                        }
                    }
                    tbody {
                        for profile in profiles {
                            tr { key: "{profile.id}",
                                td { "{profile.label()}" }
                                td { class: "comparison__number", "{format_currency(profile.flight_cost)}" }
                                td { class: "comparison__number", "{format_currency(profile.hotel_cost_per_night)}" }
                                td { class: "comparison__number", "{format_currency(profile.meal_cost_per_day)}" }
                                td { class: "comparison__number", "{format_currency(profile.ground_transport_cost)}" }
                            }
                        }
                    }
                }
            }
            section { class: "card",
                h3 { class: "panel__title", "Custom cost table" }
                p { class: "card__subtitle",
                    "Loaded at startup from the file below, or from the path in ${COST_TABLE_ENV}."
                }
                code { class: "config-path", "{config_path}" }
                if config_exists {
                    p { class: "results__note", "A custom table file exists and is in use when valid." }
                } else {
                    button { class: "button", onclick: on_write_template, "Create editable template" }
                }
            }
        }
    }
}
