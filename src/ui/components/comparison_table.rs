use dioxus::prelude::*;

use offsite_cost_calculator::{
    domain::{CostComparison, CostTable},
    util::format::{format_currency, format_currency_rounded},
};

#[component]
pub fn ComparisonTable(comparison: CostComparison, table: CostTable) -> Element {
    let rows = comparison
        .destinations
        .iter()
        .map(|breakdown| {
            let label = table
                .get(breakdown.destination.as_str())
                .map(|profile| profile.label())
                .unwrap_or_else(|_| breakdown.destination.to_string());
            let selected = breakdown.destination == comparison.chosen.destination;
            let cheapest = breakdown.destination == comparison.cheapest;
            let savings = comparison.savings_versus_chosen(breakdown);
            let note = if savings > 0.0 {
                format!("saves {}", format_currency(savings))
            } else if savings < 0.0 {
                format!("+{}", format_currency(-savings))
            } else {
                String::new()
            };
            ComparisonRow {
                key: breakdown.destination.to_string(),
                label,
                total: format_currency(breakdown.grand_total),
                per_person: format_currency_rounded(breakdown.per_person_cost),
                selected,
                cheapest,
                note,
            }
        })
        .collect::<Vec<_>>();

    rsx! {
        section { class: "panel",
            h3 { class: "panel__title", "All destinations" }
            table { class: "comparison",
                thead {
                    tr {
                        th { "Destination" }
                        th { class: "comparison__number", "Total" }
                        th { class: "comparison__number", "Per person" }
                        th { "" }
                    }
                }
                tbody {
                    for row in rows {
                        tr {
                            key: "{row.key}",
                            class: if row.selected { "comparison__row comparison__row--selected" } else { "comparison__row" },
                            td {
                                "{row.label}"
                                if row.cheapest {
                                    span { class: "badge badge--cheapest", "Cheapest" }
                                }
                                if row.selected {
                                    span { class: "badge", "Selected" }
                                }
                            }
                            td { class: "comparison__number", "{row.total}" }
                            td { class: "comparison__number", "{row.per_person}" }
                            td { class: "comparison__note", "{row.note}" }
                        }
                    }
                }
            }
        }
    }
}

struct ComparisonRow {
    key: String,
    label: String,
    total: String,
    per_person: String,
    selected: bool,
    cheapest: bool,
    note: String,
}
