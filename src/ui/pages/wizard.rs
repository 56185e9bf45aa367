//! The four input steps, plus the navigation that leads into results.

use std::path::PathBuf;

use dioxus::prelude::*;
use log::{info, warn};

use offsite_cost_calculator::{
    domain::{tally_roster, AppState, BreakdownStatus, WizardStep},
    infra::roster::read_roster,
    util::format::pluralize,
};

use crate::ui::{
    components::{
        step_indicator::StepIndicator,
        toast::{push_toast, ToastKind, ToastMessage},
    },
    pages::ResultsStep,
};

#[component]
pub fn WizardPage() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let step = state.with(|st| st.step);

    let on_next = move |_| {
        let result = state.with_mut(|st| st.next_step());
        if let Err(err) = result {
            push_toast(toasts, ToastKind::Error, err.to_string());
        }
    };
    let on_back = move |_| {
        state.with_mut(|st| st.previous_step());
    };

    rsx! {
        div { class: "wizard",
            StepIndicator { current: step }
            section { class: "card",
                match step {
                    WizardStep::Location => rsx! { LocationStep {} },
                    WizardStep::Attendees => rsx! { AttendeesStep {} },
                    WizardStep::Breakdown => rsx! { BreakdownStep {} },
                    WizardStep::Duration => rsx! { DurationStep {} },
                    WizardStep::Results => rsx! { ResultsStep {} },
                }
            }
            if step != WizardStep::Results {
                div { class: "wizard__actions",
                    button {
                        class: "button button--ghost",
                        disabled: step.previous().is_none(),
                        onclick: on_back,
                        "← Back"
                    }
                    button {
                        class: "button button--primary",
                        onclick: on_next,
                        if step == WizardStep::Duration { "Calculate costs" } else { "Next →" }
                    }
                }
            }
        }
    }
}

#[component]
fn LocationStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let selected = state.with(|st| st.form.location.clone());
    let profiles = state.with(|st| st.cost_table.profiles().to_vec());

    rsx! {
        h2 { class: "card__title", "Where is the off-site?" }
        p { class: "card__subtitle", "Pick the destination you have in mind. Every other option is priced too." }
        div { class: "location-grid",
            for profile in profiles {
                {
                    let id = profile.id.clone();
                    let active = selected.as_ref() == Some(&profile.id);
                    rsx! {
                        button {
                            key: "{profile.id}",
                            class: if active { "location-card location-card--active" } else { "location-card" },
                            onclick: move |_| state.with_mut(|st| st.select_location(id.clone())),
                            span { class: "location-card__icon", "{profile.icon}" }
                            span { class: "location-card__name", "{profile.display_name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AttendeesStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let toasts = use_context::<Signal<Vec<ToastMessage>>>();
    let attendees = state.with(|st| st.form.attendees.clone());
    let roster = state.with(|st| st.roster.clone());
    let mut roster_path = use_signal(String::new);

    let on_import = move |_| {
        let raw = roster_path();
        let path = PathBuf::from(raw.trim());
        if raw.trim().is_empty() {
            push_toast(toasts, ToastKind::Warning, "Enter the path of a roster CSV first.");
            return;
        }

        let entries = match read_roster(&path) {
            Ok(entries) => entries,
            Err(err) => {
                warn!("[roster] Failed to read {}: {err}", path.display());
                push_toast(toasts, ToastKind::Error, format!("Could not import roster: {err}"));
                return;
            }
        };

        let tally = state.with(|st| tally_roster(&st.cost_table, &entries));
        let unmatched = tally.unmatched.len();
        let total = tally.total_attendees;
        match state.with_mut(|st| st.apply_roster(tally)) {
            Ok(()) => {
                info!("[roster] Imported {total} attendees from {}", path.display());
                push_toast(
                    toasts,
                    ToastKind::Success,
                    format!("Imported {} from the roster.", pluralize(total, "attendee", "attendees")),
                );
                if unmatched > 0 {
                    push_toast(
                        toasts,
                        ToastKind::Warning,
                        format!(
                            "{} had an unrecognized location and count as remote.",
                            pluralize(unmatched as u32, "person", "people")
                        ),
                    );
                }
            }
            Err(err) => push_toast(toasts, ToastKind::Error, err.to_string()),
        }
    };

    rsx! {
        h2 { class: "card__title", "How many people are attending?" }
        p { class: "card__subtitle", "Between 1 and 100 attendees." }
        input {
            class: "input input--large",
            r#type: "number",
            min: "1",
            max: "100",
            placeholder: "e.g. 12",
            value: "{attendees}",
            oninput: move |evt| state.with_mut(|st| st.set_attendees_input(evt.value())),
        }
        div { class: "roster-import",
            h3 { class: "roster-import__title", "Or import a roster" }
            p { class: "card__subtitle",
                "A CSV with a name column and a location column. Headcount and breakdown are filled in for you."
            }
            div { class: "roster-import__row",
                input {
                    class: "input",
                    r#type: "text",
                    placeholder: "/path/to/roster.csv",
                    value: "{roster_path}",
                    oninput: move |evt| roster_path.set(evt.value()),
                }
                button { class: "button", onclick: on_import, "Import" }
            }
            if let Some(tally) = roster {
                if tally.has_unmatched() {
                    ul { class: "roster-import__unmatched",
                        for (name, location) in tally.unmatched {
                            li { "{name}: \"{location}\" counted as remote" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BreakdownStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let (rows, target, total, status) = state.with(|st| {
        let rows = st
            .category_keys()
            .into_iter()
            .map(|key| {
                let label = st
                    .cost_table
                    .get(&key)
                    .map(|profile| profile.label())
                    .unwrap_or_else(|_| "🏠 Remote".to_string());
                let value = st.breakdown_input(&key);
                (key, label, value)
            })
            .collect::<Vec<_>>();
        (rows, st.target_attendees(), st.breakdown_total(), st.breakdown_status())
    });

    let status_class = match status {
        BreakdownStatus::Matched => "breakdown-status breakdown-status--ok",
        BreakdownStatus::Over => "breakdown-status breakdown-status--over",
        BreakdownStatus::Incomplete => "breakdown-status",
    };

    rsx! {
        h2 { class: "card__title", "Where are attendees coming from?" }
        p { class: "card__subtitle", "People already based at the destination skip flights, hotel and rides." }
        div { class: "breakdown-form",
            for (key, caption, value) in rows {
                {
                    let category = key.clone();
                    rsx! {
                        label { key: "{key}", class: "field",
                            span { class: "field__label", "{caption}" }
                            input {
                                class: "input",
                                r#type: "number",
                                min: "0",
                                placeholder: "0",
                                value: "{value}",
                                oninput: move |evt| {
                                    state.with_mut(|st| st.set_breakdown_input(&category, evt.value()))
                                },
                            }
                        }
                    }
                }
            }
        }
        p { class: "{status_class}", "Total: {total} / {target}" }
    }
}

#[component]
fn DurationStep() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let days = state.with(|st| st.form.days.clone());
    let selected = state.with(|st| st.form.location.clone());
    let destination = state.with(|st| {
        selected
            .as_ref()
            .and_then(|id| st.cost_table.get(id.as_str()).ok())
            .map(|profile| profile.display_name.clone())
            .unwrap_or_default()
    });

    rsx! {
        h2 { class: "card__title", "How many days in {destination}?" }
        p { class: "card__subtitle", "Between 1 and 14 days. Hotel nights equal the number of days." }
        input {
            class: "input input--large",
            r#type: "number",
            min: "1",
            max: "14",
            placeholder: "e.g. 3",
            value: "{days}",
            oninput: move |evt| state.with_mut(|st| st.set_days_input(evt.value())),
        }
    }
}
