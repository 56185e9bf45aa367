use dioxus::prelude::*;

use offsite_cost_calculator::{
    domain::AppState, infra::cost_table_store::load_cost_table, util::assets,
};

use crate::ui::{
    components::toast::{Toast, ToastMessage},
    pages::{AssumptionsPage, WizardPage},
    shell::Shell,
};

#[derive(Routable, Clone, PartialEq)]
pub enum Route {
    #[route("/")]
    Wizard {},
    #[route("/assumptions")]
    Assumptions {},
}

#[component]
pub fn App() -> Element {
    // The cost table is read once; it stays fixed for the whole session.
    let state = use_signal(|| AppState::new(load_cost_table()));
    use_context_provider(|| state);

    let toasts = use_signal(Vec::<ToastMessage>::new);
    use_context_provider(|| toasts);

    rsx! {
        document::Style { "{assets::main_css()}" }
        Router::<Route> {}
        Toast {}
    }
}

#[component]
pub fn Wizard() -> Element {
    rsx! { Shell { WizardPage {} } }
}

#[component]
pub fn Assumptions() -> Element {
    rsx! { Shell { AssumptionsPage {} } }
}
