use dioxus::prelude::*;

use crumbs_common::notification::Notification;
use crumbs_common::report::ReportInput;

use super::board_state::{board_config_from_env, notify, BoardState};
use super::listing_board::ListingBoard;
use super::report_form::ReportForm;

#[component]
pub fn App() -> Element {
    let board = use_context_provider(|| Signal::new(BoardState::new()));
    let config = use_context_provider(board_config_from_env);
    use_context_provider(|| Signal::new(ReportInput::default()));

    rsx! {
        div { class: "crumbs-app",
            header { class: "app-header",
                h1 { "Crumbs" }
                p { "Surplus food from canteens and events, before it goes to waste" }
            }
            ErrorBoundary {
                // Report through the banner stack and bring the page back.
                handle_error: move |errors: ErrorContext| {
                    tracing::error!("An error occurred: {errors:?}");
                    spawn(async move {
                        notify(board, config.notification_timeout, Notification::unexpected());
                        errors.clear_errors();
                    });
                    rsx! {}
                },
                main {
                    ReportForm {}
                    ListingBoard {}
                }
            }
        }
    }
}
