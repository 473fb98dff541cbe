use maud::{DOCTYPE, Markup, html};

const TITLE: &str = "Student Rankings";

/// Wraps a view in the HTML document shared by every state of the page.
/// `refresh_seconds` makes the browser poll while the list is loading.
pub fn page(body: Markup, refresh_seconds: Option<u32>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(seconds) = refresh_seconds {
                    meta http-equiv="refresh" content=(seconds);
                }
                title { (TITLE) }
                script src="https://cdn.tailwindcss.com" {}
            }
            body class="min-h-screen bg-gray-900 text-white" {
                (body)
            }
        }
    }
}
