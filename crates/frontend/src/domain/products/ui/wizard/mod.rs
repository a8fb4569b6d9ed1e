mod category;
mod images;
mod info;
mod preview;

use leptos::prelude::*;

use crate::shared::state::{DraftStore, SessionStorageSlot};

use category::CategoryStep;
use images::ImagesStep;
use info::InfoStep;
use preview::PreviewStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardStep {
    Images,
    Info,
    Category,
    Preview,
}

impl WizardStep {
    const ALL: [WizardStep; 4] = [
        WizardStep::Images,
        WizardStep::Info,
        WizardStep::Category,
        WizardStep::Preview,
    ];

    fn title(self) -> &'static str {
        match self {
            WizardStep::Images => "Images",
            WizardStep::Info => "Information",
            WizardStep::Category => "Type",
            WizardStep::Preview => "Preview",
        }
    }

    fn ordinal(self) -> usize {
        match self {
            WizardStep::Images => 0,
            WizardStep::Info => 1,
            WizardStep::Category => 2,
            WizardStep::Preview => 3,
        }
    }
}

/// Multi-step product creation flow. The draft lives in the shared store
/// across steps; moving into the preview is the explicit save point that
/// writes the snapshot the preview then loads.
#[component]
#[allow(non_snake_case)]
pub fn ProductWizardPage() -> impl IntoView {
    let draft = use_context::<DraftStore>().expect("DraftStore not found in context");
    let (step, set_step) = signal(WizardStep::Images);

    let go_back = move |_| {
        set_step.update(|current| {
            *current = match *current {
                WizardStep::Images | WizardStep::Info => WizardStep::Images,
                WizardStep::Category => WizardStep::Info,
                WizardStep::Preview => WizardStep::Category,
            }
        })
    };
    let go_next = move |_| {
        set_step.update(|current| {
            *current = match *current {
                WizardStep::Images => WizardStep::Info,
                WizardStep::Info => WizardStep::Category,
                other => other,
            }
        })
    };
    let proceed_to_preview = move |_| {
        if draft.persist(&SessionStorageSlot) {
            set_step.set(WizardStep::Preview);
        }
    };

    view! {
        <div class="page product-wizard">
            <ol class="stepper">
                {WizardStep::ALL
                    .iter()
                    .map(|s| {
                        let s = *s;
                        view! {
                            <li
                                class="stepper-item"
                                class:active=move || step.get() == s
                                class:done=move || { step.get().ordinal() > s.ordinal() }
                            >
                                {s.title()}
                            </li>
                        }
                    })
                    .collect_view()}
            </ol>

            {move || match step.get() {
                WizardStep::Images => view! { <ImagesStep /> }.into_any(),
                WizardStep::Info => view! { <InfoStep /> }.into_any(),
                WizardStep::Category => view! { <CategoryStep /> }.into_any(),
                WizardStep::Preview => view! { <PreviewStep /> }.into_any(),
            }}

            <div class="wizard-nav">
                <button
                    class="nav-button"
                    disabled=move || step.get() == WizardStep::Images
                    on:click=go_back
                >
                    "Back"
                </button>
                <Show when=move || matches!(step.get(), WizardStep::Images | WizardStep::Info)>
                    <button class="nav-button" on:click=go_next>"Next"</button>
                </Show>
                <Show when=move || step.get() == WizardStep::Category>
                    <button class="nav-button primary" on:click=proceed_to_preview>
                        "Proceed to preview"
                    </button>
                </Show>
            </div>
        </div>
    }
}
