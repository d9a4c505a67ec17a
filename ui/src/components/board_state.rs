use std::time::Duration;

use dioxus::prelude::*;

use crumbs_common::config::BoardConfig;
use crumbs_common::notification::{Notification, NotificationCenter};
use crumbs_common::report::ReportInput;
use crumbs_common::store::ListingStore;

use super::simulated_backend::sleep;

/// Page state shared across all components.
///
/// Lives only as long as the page; nothing is persisted.
#[derive(Clone, Debug)]
pub struct BoardState {
    pub store: ListingStore,
    pub notifications: NotificationCenter,
}

impl BoardState {
    pub fn new() -> Self {
        Self {
            store: ListingStore::seeded(),
            notifications: NotificationCenter::new(),
        }
    }
}

/// Board settings, overridable at build time via `CRUMBS_SUBMIT_DELAY_MS`,
/// `CRUMBS_NOTIFICATION_TIMEOUT_MS` and `CRUMBS_TIME_FORMAT`.
pub fn board_config_from_env() -> BoardConfig {
    BoardConfig::with_overrides(
        option_env!("CRUMBS_SUBMIT_DELAY_MS"),
        option_env!("CRUMBS_NOTIFICATION_TIMEOUT_MS"),
        option_env!("CRUMBS_TIME_FORMAT"),
    )
}

pub fn use_board_state() -> Signal<BoardState> {
    use_context::<Signal<BoardState>>()
}

pub fn use_board_config() -> BoardConfig {
    use_context::<BoardConfig>()
}

/// The report form's current values. Provided by `App`, above the error
/// boundary, so a remount of the form after a failure keeps what was typed.
pub fn use_report_draft() -> Signal<ReportInput> {
    use_context::<Signal<ReportInput>>()
}

/// Show a banner and remove it again after `timeout`.
pub fn notify(mut board: Signal<BoardState>, timeout: Duration, notification: Notification) {
    let id = board.write().notifications.push(notification);
    spawn(async move {
        sleep(timeout).await;
        board.write().notifications.dismiss(id);
    });
}
