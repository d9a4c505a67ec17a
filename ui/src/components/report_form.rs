use dioxus::prelude::*;

use crumbs_common::command::{dispatch, settle, Command, Outcome};
use crumbs_common::intake::SubmissionError;
use crumbs_common::report::ReportInput;
use crumbs_common::submitter::ReportSubmitter;
use crumbs_common::time::{min_available_from, min_available_to, Clock, LocalClock};

use super::board_state::{notify, use_board_config, use_board_state, use_report_draft};
use super::notification_stack::NotificationStack;
use super::simulated_backend::SimulatedBackend;

#[component]
pub fn ReportForm() -> Element {
    let mut board = use_board_state();
    let config = use_board_config();
    let mut draft = use_report_draft();
    let mut failure = use_signal(|| None::<SubmissionError>);

    // Hand anything unexpected to the page's error boundary.
    if let Some(error) = failure.cloned() {
        return Err(error.into());
    }

    let current = draft.read().clone();
    let now = LocalClock.now();
    let min_from = min_available_from(now);
    let min_to = min_available_to(now, &current.available_from);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();

        let input = draft.read().clone();
        let outcome = dispatch(&mut board.write().store, Command::SubmitReport(input));
        match outcome {
            Outcome::Accepted(pending) => {
                let backend = SimulatedBackend::new(&config);
                spawn(async move {
                    let submitted = backend.submit(pending).await;
                    if let Err(e) = &submitted {
                        tracing::error!("{} submitter failed: {e}", backend.submitter_name());
                    }
                    match settle(&mut board.write().store, submitted) {
                        Ok(banner) => {
                            draft.set(ReportInput::default());
                            notify(board, config.notification_timeout, banner);
                        }
                        Err(e) => failure.set(Some(e)),
                    }
                });
            }
            Outcome::Rejected { notification, .. } => {
                notify(board, config.notification_timeout, notification);
            }
            Outcome::Failed { error, .. } => failure.set(Some(error.into())),
            Outcome::Registered(_) | Outcome::Ignored => {}
        }
    };

    rsx! {
        section { class: "report-section",
            h2 { "Report Surplus Food" }
            form { id: "foodReportForm",
                onsubmit: onsubmit,
                NotificationStack {}
                div { class: "form-group",
                    label { "Source:" }
                    input {
                        r#type: "text",
                        "list": "report-sources",
                        placeholder: "canteen, event, ...",
                        value: "{current.source}",
                        oninput: move |evt| draft.write().source = evt.value(),
                    }
                    datalist { id: "report-sources",
                        option { value: "canteen" }
                        option { value: "event" }
                    }
                }
                div { class: "form-group",
                    label { "Food type:" }
                    input {
                        r#type: "text",
                        placeholder: "e.g. Vegetarian Meals",
                        value: "{current.food_type}",
                        oninput: move |evt| draft.write().food_type = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Quantity (servings):" }
                    input {
                        r#type: "number",
                        min: "1",
                        value: "{current.quantity}",
                        oninput: move |evt| draft.write().quantity = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Available from:" }
                    input {
                        r#type: "datetime-local",
                        min: "{min_from}",
                        value: "{current.available_from}",
                        oninput: move |evt| draft.write().available_from = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Available to:" }
                    input {
                        r#type: "datetime-local",
                        min: "{min_to}",
                        value: "{current.available_to}",
                        oninput: move |evt| draft.write().available_to = evt.value(),
                    }
                }
                div { class: "form-group",
                    label { "Description (optional):" }
                    textarea {
                        placeholder: "Where to collect, dietary notes...",
                        value: "{current.description}",
                        oninput: move |evt| draft.write().description = evt.value(),
                    }
                }
                button { r#type: "submit", "Report Food" }
            }
        }
    }
}
