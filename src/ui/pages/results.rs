use dioxus::prelude::*;
use log::{error, info};
use time::OffsetDateTime;

use offsite_cost_calculator::{
    domain::{
        report::{attendee_breakdown_lines, local_savings_note, render_text_report, report_file_name},
        AppState,
    },
    infra::export::save_report,
    util::format::{format_currency, format_currency_rounded, pluralize},
};

use crate::ui::components::{
    comparison_table::ComparisonTable,
    cost_breakdown::CostBreakdownPanel,
    kpi_card::KpiCard,
    toast::{push_toast, ToastKind, ToastMessage},
};

#[component]
pub fn ResultsStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();

    let Some(comparison) = state.with(|st| st.comparison.clone()) else {
        return rsx! {
            p { class: "card__subtitle", "No estimate yet. Go back and fill in the trip details." }
        };
    };
    let table = state.with(|st| st.cost_table.clone());
    let request = state.with(|st| st.to_request().ok());

    let chosen = comparison.chosen.clone();
    let location_label = table
        .get(chosen.destination.as_str())
        .map(|profile| profile.label())
        .unwrap_or_else(|_| chosen.destination.to_string());
    let origins = request
        .as_ref()
        .map(|request| attendee_breakdown_lines(&table, request).join(", "))
        .unwrap_or_default();
    let duration = pluralize(chosen.days, "day", "days");
    let local_note = local_savings_note(chosen.local_attendee_count);
    let cheapest_id = comparison.cheapest.clone();
    let cheapest_label = table
        .get(cheapest_id.as_str())
        .map(|profile| profile.display_name.clone())
        .unwrap_or_else(|_| cheapest_id.to_string());
    let savings = comparison.potential_savings();
    let show_switch = !comparison.chosen_is_cheapest() && savings > 0.0;

    let on_switch = move |_| {
        let target = cheapest_id.clone();
        if let Err(err) = state.with_mut(|st| st.switch_destination(target)) {
            push_toast(toasts, ToastKind::Error, err.to_string());
        }
    };

    let on_export = {
        let table = table.clone();
        let comparison = comparison.clone();
        move |_| {
            let Some(request) = request.as_ref() else {
                push_toast(toasts, ToastKind::Error, "Finish the wizard before exporting.");
                return;
            };
            let today = OffsetDateTime::now_utc().date();
            let Ok(profile) = table.get(request.destination.as_str()) else {
                push_toast(toasts, ToastKind::Error, "Unknown destination.");
                return;
            };
            let report = render_text_report(&table, request, &comparison, today);
            match save_report(&report_file_name(profile, today), &report) {
                Ok(path) => {
                    info!("[export] Saved report to {}", path.display());
                    push_toast(
                        toasts,
                        ToastKind::Success,
                        format!("Saved estimate to {}", path.display()),
                    );
                }
                Err(err) => {
                    error!("[export] Failed to save report: {err}");
                    push_toast(toasts, ToastKind::Error, format!("Could not save report: {err}"));
                }
            }
        }
    };

    let on_start_over = move |_| state.with_mut(|st| st.start_over());

    rsx! {
        div { class: "results",
            header { class: "results__header",
                h2 { class: "card__title", "{location_label}" }
                p { class: "card__subtitle",
                    "{chosen.total_attendees} people · {duration}"
                }
                if !origins.is_empty() {
                    p { class: "results__origins", "From: {origins}" }
                }
            }
            div { class: "kpi-grid",
                KpiCard {
                    title: "Total cost".to_string(),
                    value: format_currency(chosen.grand_total),
                }
                KpiCard {
                    title: "Per person".to_string(),
                    value: format_currency_rounded(chosen.per_person_cost),
                }
                KpiCard {
                    title: "Traveling".to_string(),
                    value: chosen.traveling_attendee_count.to_string(),
                    description: format!("{} local", chosen.local_attendee_count),
                }
            }
            if let Some(note) = local_note {
                p { class: "results__note", "💡 {note}" }
            }
            if show_switch {
                div { class: "savings-banner",
                    p {
                        "{cheapest_label} would save {format_currency(savings)} for the same group."
                    }
                    button { class: "button button--primary", onclick: on_switch, "Switch to {cheapest_label}" }
                }
            } else {
                p { class: "results__note results__note--best", "✅ This is the cheapest destination for your group." }
            }
            CostBreakdownPanel { breakdown: chosen.clone() }
            ComparisonTable { comparison: comparison.clone(), table: table.clone() }
            div { class: "wizard__actions",
                button { class: "button button--ghost", onclick: on_start_over, "↺ Start over" }
                button { class: "button button--primary", onclick: on_export, "⬇ Download estimate" }
            }
        }
    }
}
