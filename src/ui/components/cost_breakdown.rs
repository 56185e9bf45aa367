use dioxus::prelude::*;

use offsite_cost_calculator::{
    domain::DestinationCostBreakdown,
    util::format::{format_currency, pluralize},
};

/// The four cost categories of one destination, largest first as entered.
#[component]
pub fn CostBreakdownPanel(breakdown: DestinationCostBreakdown) -> Element {
    let traveling = breakdown.traveling_attendee_count;
    let days = breakdown.days;
    let rows = [
        (
            "✈️ Flights",
            format!("{traveling} traveling people"),
            breakdown.flight_total,
        ),
        (
            "🏨 Hotel",
            format!("{traveling} people × {}", pluralize(days, "night", "nights")),
            breakdown.hotel_total,
        ),
        (
            "🍽️ Meals",
            format!(
                "{} people × {}",
                breakdown.total_attendees,
                pluralize(days, "day", "days")
            ),
            breakdown.meal_total,
        ),
        (
            "🚕 Ground transport",
            format!("{traveling} traveling people"),
            breakdown.ground_transport_total,
        ),
    ];

    rsx! {
        section { class: "panel",
            h3 { class: "panel__title", "Cost breakdown" }
            table { class: "breakdown",
                tbody {
                    for (label, detail, amount) in rows {
                        tr {
                            td { class: "breakdown__label", "{label}" }
                            td { class: "breakdown__detail", "{detail}" }
                            td { class: "breakdown__amount", "{format_currency(amount)}" }
                        }
                    }
                }
                tfoot {
                    tr {
                        td { class: "breakdown__label", colspan: "2", "Total" }
                        td { class: "breakdown__amount breakdown__amount--total",
                            "{format_currency(breakdown.grand_total)}"
                        }
                    }
                }
            }
        }
    }
}
