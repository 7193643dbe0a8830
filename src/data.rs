// src/data.rs
//
// Parsed ranking data.
//
// - Entry: one ranked participant for one (year, ranking kind).
// - Snapshot: the entries of one parse, in page order. Built once by
//             `specs::ranking::extract`; there is no mutable access afterwards.

use std::slice;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    /// 1-based position this year.
    pub rank: u32,
    pub leader_name: String,
    pub company_name: String,
    pub score: u32,
    /// Last year's position. `None` for a new entrant; equal to `rank` when
    /// the page only said "no change".
    pub previous_rank: Option<u32>,
}

impl Entry {
    #[inline] pub fn is_new(&self) -> bool { self.previous_rank.is_none() }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Snapshot {
    entries: Vec<Entry>,
}

impl Snapshot {
    pub fn from_entries(entries: Vec<Entry>) -> Self { Self { entries } }

    pub fn entries(&self) -> &[Entry] { &self.entries }
    pub fn iter(&self) -> slice::Iter<'_, Entry> { self.entries.iter() }

    #[inline] pub fn len(&self) -> usize { self.entries.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// First `n` entries in page order (fewer if the snapshot is shorter).
    pub fn top(&self, n: usize) -> &[Entry] {
        &self.entries[..n.min(self.entries.len())]
    }
}

impl FromIterator<Entry> for Snapshot {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}

impl<'a> IntoIterator for &'a Snapshot {
    type Item = &'a Entry;
    type IntoIter = slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}
