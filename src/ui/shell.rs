use dioxus::prelude::*;

use offsite_cost_calculator::util::version::{version_label, APP_NAME};

use crate::app::Route;

#[component]
pub fn Shell(children: Element) -> Element {
    let current_route = use_route::<Route>();
    let nav = use_navigator();
    let version = version_label();

    rsx! {
        div { class: "app",
            header { class: "app-header",
                div { class: "app-header__inner",
                    div { class: "brand",
                        span { class: "brand__icon", "🏢" }
                        div {
                            h1 { class: "brand__title", "{APP_NAME}" }
                            p { class: "brand__tagline", "flights, hotels, meals & rides for your next off-site" }
                        }
                    }
                    nav { class: "nav",
                        NavButton {
                            active: matches!(current_route, Route::Wizard {}),
                            onclick: move |_| { nav.push(Route::Wizard {}); },
                            label: "🧭 Estimate",
                        }
                        NavButton {
                            active: matches!(current_route, Route::Assumptions {}),
                            onclick: move |_| { nav.push(Route::Assumptions {}); },
                            label: "📊 Assumptions",
                        }
                        span { class: "nav__version", "{version}" }
                    }
                }
            }
            main { class: "app-main",
                {children}
            }
        }
    }
}

#[component]
fn NavButton(active: bool, onclick: EventHandler<()>, label: &'static str) -> Element {
    let class = if active {
        "nav__button nav__button--active"
    } else {
        "nav__button"
    };

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
