use dioxus::prelude::*;

use super::board_state::use_board_state;

/// Success/error banners, newest on top.
#[component]
pub fn NotificationStack() -> Element {
    let board = use_board_state();
    let banners = board.read().notifications.active().to_vec();

    rsx! {
        {banners.into_iter().map(|(id, banner)| {
            let class = banner.kind.css_class();
            rsx! {
                div { class: "{class}",
                    key: "{id.0}",
                    "{banner.text}"
                }
            }
        })}
    }
}
