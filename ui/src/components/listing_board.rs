use dioxus::prelude::*;

use crumbs_common::command::{dispatch, Command, Outcome};

use super::board_state::{notify, use_board_config, use_board_state};

#[component]
pub fn ListingBoard() -> Element {
    let mut board = use_board_state();
    let config = use_board_config();
    let listings = board.read().store.all().to_vec();

    rsx! {
        section { class: "food-listings",
            h2 { "Available Food" }
            div { id: "foodListings",
                {listings.into_iter().map(|food| {
                    let id = food.id;
                    rsx! {
                        div { class: "food-item",
                            key: "{food.id}",
                            "data-id": "{food.id}",
                            h3 { "{food.title}" }
                            p { "Type: {food.food_type}" }
                            p { "Quantity: {food.quantity} servings" }
                            p { "Available: {food.available_from} - {food.available_to}" }
                            button {
                                onclick: move |_| {
                                    let outcome = dispatch(
                                        &mut board.write().store,
                                        Command::RegisterInterest(id),
                                    );
                                    if let Outcome::Registered(banner) = outcome {
                                        notify(board, config.notification_timeout, banner);
                                    }
                                },
                                "Register for This"
                            }
                        }
                    }
                })}
            }
        }
    }
}
