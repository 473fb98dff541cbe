use serde::Serialize;

pub const REWARDS_TITLE: &str = "🎉 Hadiah Peringkat 🎉";

/// One prize tier of the rewards banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Reward {
    pub rank: &'static str,
    pub prize: &'static str,
}

pub const REWARDS: [Reward; 4] = [
    Reward {
        rank: "Peringkat 1",
        prize: "Free biaya sekolah selama sebulan",
    },
    Reward {
        rank: "Peringkat 2-3",
        prize: "Gratis sesuatu (sesuaikan hadiah)",
    },
    Reward {
        rank: "Peringkat 4-7",
        prize: "Hadiah gratis buku",
    },
    Reward {
        rank: "Peringkat 8-10",
        prize: "Hadiah buku",
    },
];
