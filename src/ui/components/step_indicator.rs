use dioxus::prelude::*;

use crate::domain::WizardStep;

#[component]
pub fn StepIndicator(current: WizardStep) -> Element {
    rsx! {
        ol {
            class: "flex flex-wrap items-center gap-4",
            for step in WizardStep::ALL {
                li {
                    key: "{step.number()}",
                    class: "flex items-center gap-2",
                    span {
                        class: "step-dot {dot_state(step, current)}",
                        if step < current { "✓" } else { "{step.number()}" }
                    }
                    span {
                        class: if step == current { "text-sm font-semibold text-sky-200" } else { "text-sm text-slate-500" },
                        "{step.title()}"
                    }
                }
            }
        }
    }
}

fn dot_state(step: WizardStep, current: WizardStep) -> &'static str {
    if step < current {
        "step-dot--done"
    } else if step == current {
        "step-dot--current"
    } else {
        "step-dot--pending"
    }
}
