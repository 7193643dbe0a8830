// src/matcher.rs
//
// Name lookup by case-insensitive substring containment.
//
// Both lookups scan in page order and stop at the FIRST hit. A short token
// such as "CO" can match an unrelated company earlier in the list; that is
// accepted behavior, not a bug to paper over with scoring.

use crate::data::{Entry, Snapshot};

#[inline]
fn upper(s: &str) -> String {
    s.trim().to_uppercase()
}

/// First entry whose company or leader name contains `token` (any case).
/// A blank token matches nothing.
pub fn find<'a>(token: &str, snapshot: &'a Snapshot) -> Option<&'a Entry> {
    let needle = upper(token);
    if needle.is_empty() {
        return None;
    }
    snapshot.iter().find(|e| {
        upper(&e.company_name).contains(&needle) || upper(&e.leader_name).contains(&needle)
    })
}

/// Same company in another year's snapshot: the first entry whose company
/// name contains this one's, or is contained by it. Tolerates renames such as
/// "Bancolombia" → "Grupo Bancolombia".
pub fn align<'a>(entry: &Entry, previous: &'a Snapshot) -> Option<&'a Entry> {
    let company = upper(&entry.company_name);
    previous.iter().find(|f| {
        let other = upper(&f.company_name);
        company.contains(&other) || other.contains(&company)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(rank: u32, leader: &str, company: &str) -> Entry {
        Entry {
            rank,
            leader_name: s!(leader),
            company_name: s!(company),
            score: 900,
            previous_rank: None,
        }
    }

    fn snap() -> Snapshot {
        Snapshot::from_entries(vec![
            entry(1, "Jane Doe", "ACME Co"),
            entry(2, "Hank Scorpio", "Globex Holdings"),
            entry(3, "Mr. Burns", "Globex"),
        ])
    }

    #[test]
    fn find_is_case_insensitive() {
        let s = snap();
        assert_eq!(find("acme", &s).map(|e| e.rank), Some(1));
        assert_eq!(find("  aCmE co ", &s).map(|e| e.rank), Some(1));
    }

    #[test]
    fn find_matches_leader_too() {
        let s = snap();
        assert_eq!(find("scorpio", &s).map(|e| e.rank), Some(2));
    }

    #[test]
    fn find_takes_first_not_exact() {
        let s = snap();
        // "Globex" is an exact company at rank 3, but rank 2 comes first.
        assert_eq!(find("Globex", &s).map(|e| e.rank), Some(2));
    }

    #[test]
    fn find_blank_or_missing_is_none() {
        let s = snap();
        assert!(find("", &s).is_none());
        assert!(find("   ", &s).is_none());
        assert!(find("Initech", &s).is_none());
    }

    #[test]
    fn align_works_both_directions() {
        let prev = Snapshot::from_entries(vec![
            entry(4, "X", "Grupo Bancolombia"),
            entry(9, "Y", "Éxito"),
        ]);
        let shorter = entry(1, "A", "Bancolombia");
        assert_eq!(align(&shorter, &prev).map(|e| e.rank), Some(4));

        let longer = entry(2, "B", "Almacenes Éxito S.A.");
        assert_eq!(align(&longer, &prev).map(|e| e.rank), Some(9));

        let absent = entry(3, "C", "Ecopetrol");
        assert!(align(&absent, &prev).is_none());
    }
}
