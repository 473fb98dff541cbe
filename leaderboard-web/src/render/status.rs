use maud::{Markup, html};

pub fn loading_view() -> Markup {
    html! {
        div class="min-h-screen flex items-center justify-center" {
            div class="text-center" {
                div class="animate-spin rounded-full h-12 w-12 border-b-2 border-purple-500 mx-auto mb-4" {}
                p class="text-gray-400" { "Loading rankings..." }
            }
        }
    }
}

/// The only recovery offered is a full reload, which starts a fresh fetch.
pub fn error_view(message: &str) -> Markup {
    html! {
        div class="min-h-screen flex items-center justify-center" {
            div class="text-center bg-gray-800 p-8 rounded-lg shadow-lg" {
                div class="text-red-500 text-5xl mb-4" { "⚠️" }
                h2 class="text-xl font-bold mb-2" { "Error Loading Rankings" }
                p class="text-gray-400" data-role="error-message" { (message) }
                p class="text-gray-500 text-sm mt-2" data-role="retry-hint" {
                    "Refreshing this page shows the same result. Press Try Again to fetch the rankings again."
                }
                form method="post" action="/reload" {
                    button
                        type="submit"
                        class="mt-4 px-4 py-2 bg-purple-500 rounded-lg hover:bg-purple-600 transition-colors"
                    { "Try Again" }
                }
            }
        }
    }
}
