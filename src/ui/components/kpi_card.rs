use dioxus::prelude::*;

#[component]
pub fn KpiCard(title: String, value: String, description: Option<String>) -> Element {
    rsx! {
        div {
            class: "kpi-card",
            h3 { class: "kpi-card__title", "{title}" }
            p { class: "kpi-card__value", "{value}" }
            if let Some(desc) = description {
                p { class: "kpi-card__description", "{desc}" }
            }
        }
    }
}
