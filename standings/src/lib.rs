pub mod ranked_list;
pub mod rewards;
pub mod search;
pub mod student;
pub mod tier;

pub use ranked_list::{DisplaySubset, RankedEntry, RankedList, TOP_COUNT};
pub use rewards::{REWARDS, REWARDS_TITLE, Reward};
pub use search::SearchTerm;
pub use student::{Student, StudentId};
pub use tier::{RankIcon, Tier};
