use crate::search::SearchTerm;
use crate::student::{Student, StudentId};
use crate::tier::{RankIcon, Tier, is_podium, shows_avatar};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Number of entries shown when nobody is searching.
pub const TOP_COUNT: usize = 10;

/// Students ordered by descending points, with an index from id to rank.
#[derive(Clone, Debug, Default)]
pub struct RankedList {
    students: Vec<Student>,
    rank_of: HashMap<StudentId, usize>,
}

impl RankedList {
    /// Sorts by points, highest first. Ties keep their input order.
    pub fn new(mut students: Vec<Student>) -> Self {
        students.sort_by_key(|student| Reverse(student.points));

        // With duplicate ids the first position wins.
        let mut rank_of = HashMap::with_capacity(students.len());
        for (rank, student) in students.iter().enumerate() {
            rank_of.entry(student.id.clone()).or_insert(rank);
        }

        Self { students, rank_of }
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Zero-based rank of the student with this id.
    pub fn rank_of(&self, id: &StudentId) -> Option<usize> {
        self.rank_of.get(id).copied()
    }

    /// The first `many` students.
    pub fn top(&self, many: usize) -> Vec<RankedEntry<'_>> {
        self.students
            .iter()
            .enumerate()
            .take(many)
            .map(|(position, student)| self.entry(position, student))
            .collect()
    }

    /// Every student whose name matches, in ranked order.
    pub fn search(&self, term: &SearchTerm) -> Vec<RankedEntry<'_>> {
        self.students
            .iter()
            .enumerate()
            .filter(|(_, student)| term.matches(&student.name))
            .map(|(position, student)| self.entry(position, student))
            .collect()
    }

    /// What the leaderboard shows: the top ten, or all matches when searching.
    pub fn display_subset(&self, search: Option<&SearchTerm>) -> DisplaySubset<'_> {
        match search {
            Some(term) => DisplaySubset {
                entries: self.search(term),
                searching: true,
            },
            None => DisplaySubset {
                entries: self.top(TOP_COUNT),
                searching: false,
            },
        }
    }

    fn entry<'a>(&'a self, position: usize, student: &'a Student) -> RankedEntry<'a> {
        let rank = self.rank_of(&student.id).unwrap_or(position);
        RankedEntry { rank, student }
    }
}

/// A student together with its global rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RankedEntry<'a> {
    /// Zero-based position in the full ranked list.
    pub rank: usize,
    pub student: &'a Student,
}

impl RankedEntry<'_> {
    /// One-based rank, as shown to users.
    pub fn display_rank(&self) -> usize {
        self.rank + 1
    }

    pub fn tier(&self) -> Tier {
        Tier::for_rank(self.rank)
    }

    pub fn icon(&self) -> RankIcon {
        RankIcon::for_rank(self.rank)
    }

    pub fn is_podium(&self) -> bool {
        is_podium(self.rank)
    }

    pub fn shows_avatar(&self) -> bool {
        shows_avatar(self.rank)
    }
}

/// The entries actually rendered for one view of the leaderboard.
#[derive(Clone, Debug)]
pub struct DisplaySubset<'a> {
    pub entries: Vec<RankedEntry<'a>>,
    /// Set when the entries are search matches rather than the top ten.
    pub searching: bool,
}
