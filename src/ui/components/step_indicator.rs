use dioxus::prelude::*;

use offsite_cost_calculator::domain::WizardStep;

#[component]
pub fn StepIndicator(current: WizardStep) -> Element {
    rsx! {
        ol { class: "steps",
            for step in WizardStep::ALL {
                li {
                    class: step_class(step, current),
                    span { class: "steps__number", "{step.number()}" }
                    span { class: "steps__title", "{step.title()}" }
                }
            }
        }
    }
}

fn step_class(step: WizardStep, current: WizardStep) -> &'static str {
    if step == current {
        "steps__item steps__item--current"
    } else if step.number() < current.number() {
        "steps__item steps__item--done"
    } else {
        "steps__item"
    }
}
