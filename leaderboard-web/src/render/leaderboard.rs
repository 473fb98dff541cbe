use maud::{Markup, html};
use standings::{DisplaySubset, RankIcon, RankedEntry, SearchTerm};

const SCHOOL_LOGO: &str = "https://siswa.b-cdn.net/images-removebg-preview.png";
const PARTNER_LOGO: &str = "https://siswa.b-cdn.net/Logo-NATAMA.png";
const SCHOOL_NAME: &str = "SMK/SMA YAPIM MARELAN";
const MOTTO: &str = "Raih poin belajar sebanyak-banyaknya dan tunjukkan semangat juangmu!";

/// The ready state of the page: header, search box and the ranked entries.
pub fn leaderboard_view(subset: &DisplaySubset<'_>, search: Option<&SearchTerm>) -> Markup {
    html! {
        (header())
        div class="container mx-auto px-4 py-6" {
            form method="get" action="/" class="relative" {
                span class="absolute left-3 top-1/2 transform -translate-y-1/2 text-gray-400" { "🔍" }
                input
                    type="search"
                    name="q"
                    value=(search.map(|term| term.as_ref()).unwrap_or(""))
                    placeholder="Search all students..."
                    class="w-full pl-10 pr-4 py-2 bg-gray-800 rounded-lg focus:outline-none focus:ring-2 focus:ring-purple-500";
            }
            @if subset.searching {
                p class="text-gray-400 mt-2 text-sm" data-role="search-hint" {
                    "Showing all matches. Clear search to see top 10 rankings."
                }
            }
        }
        div class="container mx-auto px-4 pb-8" {
            div class="space-y-6" data-role="leaderboard" {
                @for entry in &subset.entries {
                    (entry_row(entry))
                }
            }
        }
    }
}

fn header() -> Markup {
    html! {
        header class="bg-gray-800 shadow-lg" {
            div class="container mx-auto px-4 py-6" {
                div class="flex items-center justify-between" {
                    div class="flex items-center space-x-4" {
                        img src=(SCHOOL_LOGO) alt="Logo Sekolah" class="w-10 h-10";
                        div {
                            h1 class="text-1xl font-bold text-white" { (SCHOOL_NAME) }
                            p class="text-gray-400 text-xs" { (MOTTO) }
                        }
                    }
                    img src=(PARTNER_LOGO) alt="Logo Sekolah" class="w-15 h-7";
                }
            }
        }
    }
}

fn entry_row(entry: &RankedEntry<'_>) -> Markup {
    let podium = entry.is_podium();
    let student = entry.student;
    html! {
        div
            class={ "relative bg-gray-800 rounded-lg p-4 flex items-center justify-between transform transition-all duration-200 "
                (if podium { "scale-105 border-2 border-purple-500 shadow-xl" } else { "" }) }
            data-rank=(entry.display_rank())
            data-tier=(entry.tier().label())
        {
            div class={ "absolute -left-3 -top-3 w-8 h-8 rounded-full flex items-center justify-center font-bold "
                (if podium { "bg-purple-500 text-white" } else { "bg-gray-700 text-gray-300" }) }
            {
                (entry.display_rank())
            }
            div class="flex items-center space-x-4" {
                div class="relative" {
                    @if entry.shows_avatar() {
                        img
                            src=(student.image)
                            alt=(student.name)
                            class={ "rounded-full object-cover border-2 "
                                (if podium { "border-purple-500 w-20 h-20" } else { "border-gray-600 w-16 h-16" }) };
                    } @else {
                        div class="w-16 h-16 rounded-full bg-gray-700 flex items-center justify-center" data-icon="user" {
                            span class="text-gray-400 text-2xl" { "👤" }
                        }
                    }
                    div class="absolute -top-2 -right-2" { (rank_icon(entry.icon())) }
                }
                div {
                    h2 class={ "font-semibold " (if podium { "text-2xl" } else { "text-xl" }) } {
                        (student.name)
                    }
                    p class=(if podium { "text-purple-400" } else { "text-gray-400" }) {
                        (entry.tier().label())
                    }
                }
            }
            div class="text-right" {
                div class={ "font-bold " (if podium { "text-3xl text-purple-400" } else { "text-2xl text-gray-300" }) } {
                    (student.points)
                }
                div class="text-gray-400" { "points" }
            }
        }
    }
}

fn rank_icon(icon: RankIcon) -> Markup {
    let (glyph, class) = match icon {
        RankIcon::Crown => ("👑", "text-3xl text-yellow-400"),
        RankIcon::SilverMedal => ("🥈", "text-3xl text-gray-300"),
        RankIcon::BronzeMedal => ("🥉", "text-3xl text-amber-600"),
        RankIcon::Trophy => ("🏆", "text-xl text-purple-400"),
    };
    html! {
        span class=(class) data-icon=(icon.name()) { (glyph) }
    }
}
