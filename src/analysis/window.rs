use std::fmt;

/// Which comparison period a window covers. Carried in errors and report
/// output so a failed reduction names the half that ran dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowKind {
    Older,
    Newer,
}

impl fmt::Display for WindowKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WindowKind::Older => write!(f, "older"),
            WindowKind::Newer => write!(f, "newer"),
        }
    }
}

/// A contiguous slice of the player's chronological match-id list
/// (most recent first, as the match-v5 endpoint returns them).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchWindow<'a> {
    pub kind: WindowKind,
    pub match_ids: &'a [String],
}

/// Partitions the full match-id list into an older and a newer half.
///
/// `newer` is `ids[0 .. n/2 - 1]` and `older` is `ids[n/2 .. n - 1]`:
/// the single newest and single oldest match are each excluded, and odd
/// `n` leaves the halves unequal. This reproduces the boundary math of
/// the system this tool tracks against; it looks like an off-by-one but
/// is kept as-is for identical output. Saturating bounds keep `n < 2`
/// at empty windows instead of underflowing.
///
/// Lists shorter than 4 can produce an empty window; that is not
/// guarded here and surfaces as `EmptyWindow` from the reducer.
pub fn split(all_matches: &[String]) -> (MatchWindow<'_>, MatchWindow<'_>) {
    let n = all_matches.len();
    let newer_end = (n / 2).saturating_sub(1);
    let older_end = n.saturating_sub(1);

    let newer = &all_matches[..newer_end];
    let older = &all_matches[n / 2..older_end.max(n / 2)];

    (
        MatchWindow {
            kind: WindowKind::Older,
            match_ids: older,
        },
        MatchWindow {
            kind: WindowKind::Newer,
            match_ids: newer,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn ids(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn four_matches_keep_one_per_window() {
        let all = ids(&["m1", "m2", "m3", "m4"]);
        let (older, newer) = split(&all);

        assert_eq!(newer.match_ids, &ids(&["m1"])[..]);
        assert_eq!(older.match_ids, &ids(&["m3"])[..]);
        assert_eq!(older.kind, WindowKind::Older);
        assert_eq!(newer.kind, WindowKind::Newer);
    }

    #[test]
    fn newest_and_oldest_matches_are_dropped() {
        let all = ids(&["m1", "m2", "m3", "m4", "m5", "m6"]);
        let (older, newer) = split(&all);

        assert_eq!(newer.match_ids, &ids(&["m1", "m2"])[..]);
        assert_eq!(older.match_ids, &ids(&["m4", "m5"])[..]);
    }

    #[test]
    fn odd_length_windows_are_unequal() {
        let all = ids(&["m1", "m2", "m3", "m4", "m5", "m6", "m7"]);
        let (older, newer) = split(&all);

        assert_eq!(newer.match_ids.len(), 2);
        assert_eq!(older.match_ids.len(), 3);
    }

    #[test]
    fn combined_length_is_n_minus_two() {
        for n in 0..20 {
            let all: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
            let (older, newer) = split(&all);
            let expected = if n >= 2 { n - 2 } else { 0 };
            assert_eq!(older.match_ids.len() + newer.match_ids.len(), expected);
        }
    }

    #[test]
    fn short_lists_yield_empty_windows_without_panicking() {
        for n in 0..4usize {
            let all: Vec<String> = (0..n).map(|i| format!("m{i}")).collect();
            let (older, newer) = split(&all);
            assert!(older.match_ids.len() <= 1);
            assert!(newer.match_ids.len() <= 1);
        }

        let (older, newer) = split(&[]);
        assert!(older.match_ids.is_empty());
        assert!(newer.match_ids.is_empty());
    }

    #[test]
    fn split_is_deterministic() {
        let all = ids(&["m1", "m2", "m3", "m4", "m5"]);
        assert_eq!(split(&all), split(&all));
    }
}
