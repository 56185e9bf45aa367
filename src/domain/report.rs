//! Plain-text estimate report, the downloadable counterpart of the results
//! page.

use time::{macros::format_description, Date};

use super::{
    evaluation::{CostComparison, TripRequest},
    location::{CostTable, LocationId, LocationProfile},
};
use crate::util::{
    format::{format_currency, format_currency_rounded, pluralize},
    version::APP_NAME,
};

/// Human-readable "where people come from" lines, in table order.
pub fn attendee_breakdown_lines(table: &CostTable, request: &TripRequest) -> Vec<String> {
    let mut lines: Vec<String> = table
        .iter()
        .filter_map(|profile| {
            let count = request.distribution.count_for(&profile.id);
            (count > 0).then(|| format!("{count} from {}", profile.display_name))
        })
        .collect();
    let remote = request.distribution.remote();
    if remote > 0 {
        lines.push(format!("{remote} remote"));
    }
    lines
}

pub fn local_savings_note(local_attendees: u32) -> Option<String> {
    (local_attendees > 0).then(|| {
        let noun = if local_attendees == 1 {
            "attendee"
        } else {
            "attendees"
        };
        format!("{local_attendees} local {noun} save on flights, hotels & transportation!")
    })
}

pub fn assumption_lines(profile: &LocationProfile) -> Vec<String> {
    vec![
        format!(
            "Flights: {} per person (round-trip)",
            format_currency(profile.flight_cost)
        ),
        format!(
            "Hotel: {} per person per night",
            format_currency(profile.hotel_cost_per_night)
        ),
        format!(
            "Meals: {} per person per day",
            format_currency(profile.meal_cost_per_day)
        ),
        format!(
            "Ground transport: {} per person (2 trips at {} each)",
            format_currency(profile.ground_transport_cost),
            format_currency(profile.ground_transport_cost / 2.0)
        ),
    ]
}

pub fn render_text_report(
    table: &CostTable,
    request: &TripRequest,
    comparison: &CostComparison,
    generated_on: Date,
) -> String {
    let chosen = &comparison.chosen;
    let location_name = display_name(table, &chosen.destination);
    let days = chosen.days;
    let traveling = chosen.traveling_attendee_count;

    let mut out = String::new();
    let mut line = |text: String| {
        out.push_str(&text);
        out.push('\n');
    };

    line("OFF-SITE COST ESTIMATE".to_string());
    line("=====================".to_string());
    line(String::new());
    line(format!("Location: {location_name}"));
    line(format!("Total Attendees: {} people", chosen.total_attendees));
    line(format!("Duration: {}", pluralize(days, "day", "days")));
    line(format!("Date Generated: {}", format_date(generated_on)));
    line(String::new());
    line("ATTENDEE BREAKDOWN:".to_string());
    line("------------------".to_string());
    for entry in attendee_breakdown_lines(table, request) {
        line(format!("  • {entry}"));
    }
    line(String::new());
    line(format!(
        "Local attendees (no travel costs): {}",
        chosen.local_attendee_count
    ));
    line(format!("Traveling attendees: {traveling}"));
    line(String::new());
    line("COST BREAKDOWN:".to_string());
    line("--------------".to_string());
    line(format!(
        "Flights ({traveling} traveling people): {}",
        format_currency(chosen.flight_total)
    ));
    line(format!(
        "Hotel ({traveling} people × {}): {}",
        pluralize(days, "night", "nights"),
        format_currency(chosen.hotel_total)
    ));
    line(format!(
        "Meals ({} people × {}): {}",
        chosen.total_attendees,
        pluralize(days, "day", "days"),
        format_currency(chosen.meal_total)
    ));
    line(format!(
        "Ground transport ({traveling} traveling people): {}",
        format_currency(chosen.ground_transport_total)
    ));
    line(String::new());
    line(format!("TOTAL COST: {}", format_currency(chosen.grand_total)));
    line(format!(
        "Cost per person: {}",
        format_currency_rounded(chosen.per_person_cost)
    ));
    line(String::new());
    line("LOCATION COMPARISON:".to_string());
    line("-------------------".to_string());
    for breakdown in &comparison.destinations {
        let name = display_name(table, &breakdown.destination);
        let mut marks = Vec::new();
        if breakdown.destination == chosen.destination {
            marks.push("selected".to_string());
        }
        if breakdown.destination == comparison.cheapest {
            marks.push("cheapest".to_string());
        }
        let savings = comparison.savings_versus_chosen(breakdown);
        if savings > 0.0 {
            marks.push(format!("saves {}", format_currency(savings)));
        }
        let suffix = if marks.is_empty() {
            String::new()
        } else {
            format!(" ({})", marks.join(", "))
        };
        line(format!(
            "  • {name}: {}{suffix}",
            format_currency(breakdown.grand_total)
        ));
    }
    line(String::new());
    line("ASSUMPTIONS:".to_string());
    line("-----------".to_string());
    if let Ok(profile) = table.get(chosen.destination.as_str()) {
        for assumption in assumption_lines(profile) {
            line(format!("• {assumption}"));
        }
    }
    line("• Local attendees do not incur flight, hotel, or transportation costs".to_string());
    line(String::new());
    line(format!("Generated by {APP_NAME}"));

    out.trim_end().to_string()
}

/// `offsite-cost-estimate-new-york-2026-10-17.txt`
pub fn report_file_name(profile: &LocationProfile, generated_on: Date) -> String {
    let slug = profile
        .display_name
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    format!("offsite-cost-estimate-{slug}-{}.txt", iso_date(generated_on))
}

fn display_name(table: &CostTable, id: &LocationId) -> String {
    table
        .get(id.as_str())
        .map(|profile| profile.display_name.clone())
        .unwrap_or_else(|_| id.to_string())
}

fn format_date(date: Date) -> String {
    date.format(format_description!("[month]/[day]/[year]"))
        .unwrap_or_else(|_| iso_date(date))
}

fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        distribution::AttendeeDistribution, evaluation::compare_destinations,
    };
    use time::Month;

    fn request() -> TripRequest {
        TripRequest {
            distribution: AttendeeDistribution::new()
                .with_office("new-york", 5)
                .with_office("san-francisco", 3)
                .with_remote(2),
            total_attendees: 10,
            days: 3,
            destination: LocationId::new("new-york"),
        }
    }

    fn date() -> Date {
        Date::from_calendar_date(2026, Month::October, 17).unwrap()
    }

    #[test]
    fn report_contains_totals_and_comparison() {
        let table = CostTable::default();
        let request = request();
        let comparison = compare_destinations(&table, &request).unwrap();
        let report = render_text_report(&table, &request, &comparison, date());

        assert!(report.starts_with("OFF-SITE COST ESTIMATE"));
        assert!(report.contains("Location: New York"));
        assert!(report.contains("Date Generated: 10/17/2026"));
        assert!(report.contains("  • 3 from San Francisco\n  • 5 from New York\n  • 2 remote"));
        assert!(report.contains("Local attendees (no travel costs): 5"));
        assert!(report.contains("Flights (5 traveling people): $2,400"));
        assert!(report.contains("Hotel (5 people × 3 nights): $6,000"));
        assert!(report.contains("Meals (10 people × 3 days): $2,250"));
        assert!(report.contains("Ground transport (5 traveling people): $500"));
        assert!(report.contains("TOTAL COST: $11,150"));
        assert!(report.contains("Cost per person: $1,115"));
        assert!(report.contains("  • New York: $11,150 (selected, cheapest)"));
        assert!(report.contains("  • Arizona: $15,250"));
        assert!(report.contains("• Flights: $480 per person (round-trip)"));
        assert!(report.ends_with(&format!("Generated by {APP_NAME}")));
    }

    #[test]
    fn comparison_marks_cheaper_alternatives() {
        let table = CostTable::default();
        let mut request = request();
        request.destination = LocationId::new("denver");
        let comparison = compare_destinations(&table, &request).unwrap();
        let report = render_text_report(&table, &request, &comparison, date());

        assert!(report.contains("  • Denver: $16,050 (selected)"));
        assert!(report.contains("  • New York: $11,150 (cheapest, saves $4,900)"));
    }

    #[test]
    fn file_name_slugs_every_space() {
        let table = CostTable::default();
        let profile = table.get("san-francisco").unwrap();
        assert_eq!(
            report_file_name(profile, date()),
            "offsite-cost-estimate-san-francisco-2026-10-17.txt"
        );
    }

    #[test]
    fn local_savings_note_pluralizes() {
        assert_eq!(local_savings_note(0), None);
        assert_eq!(
            local_savings_note(1).unwrap(),
            "1 local attendee save on flights, hotels & transportation!"
        );
    }
}
