use maud::{Markup, html};
use standings::{REWARDS, REWARDS_TITLE};

pub fn rewards_banner() -> Markup {
    html! {
        div class="mt-5 bg-gray-800 text-white p-4 sm:p-6 rounded-2xl shadow-lg max-w-md sm:max-w-2xl mx-auto text-center" data-role="rewards" {
            h2 class="text-lg sm:text-xl font-bold mb-3 sm:mb-4" { (REWARDS_TITLE) }
            ul class="space-y-2 sm:space-y-3 text-sm sm:text-base" {
                @for reward in &REWARDS {
                    li class="bg-white text-gray-600 p-2 sm:p-3 rounded-lg shadow-md" {
                        strong { (reward.rank) ":" }
                        " " (reward.prize)
                    }
                }
            }
        }
    }
}
