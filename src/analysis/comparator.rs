use super::reducer::{round2, AggregateStats, StatField};

/// Signed per-field difference between two windows, `old - new`: a
/// positive value means the stat declined, a negative one means it
/// improved. `most_played` is categorical and never compared.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonResult {
    pub win_rate: f64,
    pub deltas: Vec<(StatField, f64)>,
}

/// Both inputs must carry the same field set in the same order; they are
/// built from one configured list per report, so a mismatch is a
/// programming error. A field somehow absent from `new` falls back to a
/// zero delta.
pub fn compare(old: &AggregateStats, new: &AggregateStats) -> ComparisonResult {
    debug_assert_eq!(
        old.averages.iter().map(|(f, _)| *f).collect::<Vec<_>>(),
        new.averages.iter().map(|(f, _)| *f).collect::<Vec<_>>(),
    );

    let deltas = old
        .averages
        .iter()
        .map(|(field, old_value)| (*field, field_delta(*field, *old_value, new)))
        .collect();

    ComparisonResult {
        win_rate: round2(old.win_rate - new.win_rate),
        deltas,
    }
}

/// `old - new` for one field, or 0 when `new` lacks the field entirely.
/// Operands are already rounded at creation; no re-rounding here.
fn field_delta(field: StatField, old_value: f64, new: &AggregateStats) -> f64 {
    new.averages
        .iter()
        .find(|(f, _)| *f == field)
        .map(|(_, new_value)| old_value - new_value)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn stats(win_rate: f64, kills: f64) -> AggregateStats {
        AggregateStats {
            win_rate,
            most_played: "Ahri".to_string(),
            averages: vec![(StatField::Kills, kills)],
        }
    }

    #[test]
    fn delta_is_old_minus_new() {
        let old = stats(60.0, 5.0);
        let new = stats(40.0, 8.0);

        let result = compare(&old, &new);

        assert_eq!(result.win_rate, 20.0);
        assert_eq!(result.deltas, vec![(StatField::Kills, -3.0)]);
    }

    #[test]
    fn identical_stats_compare_to_zero() {
        let x = AggregateStats {
            win_rate: 54.55,
            most_played: "Zed".to_string(),
            averages: vec![
                (StatField::Kills, 6.2),
                (StatField::Deaths, 3.8),
                (StatField::Kda, 2.74),
            ],
        };

        let result = compare(&x, &x);

        assert_eq!(result.win_rate, 0.0);
        assert!(result.deltas.iter().all(|(_, d)| *d == 0.0));
    }

    #[test]
    fn win_rate_delta_is_rounded() {
        let old = stats(33.33, 1.0);
        let new = stats(66.67, 1.0);

        let result = compare(&old, &new);

        assert_eq!(result.win_rate, -33.34);
    }

    // Inputs are built from one configured field list per report, so a
    // field present in `old` but missing from `new` is a programming
    // error: debug builds trip the assert, release builds fall back to a
    // zero delta.
    #[cfg(debug_assertions)]
    #[test]
    #[should_panic]
    fn mismatched_field_sets_fail_fast_in_debug() {
        let old = AggregateStats {
            win_rate: 50.0,
            most_played: "Ahri".to_string(),
            averages: vec![(StatField::Kills, 5.0), (StatField::Deaths, 3.0)],
        };
        let new = stats(50.0, 8.0);

        compare(&old, &new);
    }

    #[test]
    fn missing_field_defaults_to_zero_delta() {
        // Kills only; Deaths is absent from this side.
        let new = stats(50.0, 8.0);

        assert_eq!(field_delta(StatField::Kills, 5.0, &new), -3.0);
        assert_eq!(field_delta(StatField::Deaths, 3.0, &new), 0.0);
    }

    #[cfg(not(debug_assertions))]
    #[test]
    fn mismatched_field_sets_compare_with_zero_defaults() {
        let old = AggregateStats {
            win_rate: 50.0,
            most_played: "Ahri".to_string(),
            averages: vec![(StatField::Kills, 5.0), (StatField::Deaths, 3.0)],
        };
        let new = stats(50.0, 8.0);

        let result = compare(&old, &new);

        assert_eq!(
            result.deltas,
            vec![(StatField::Kills, -3.0), (StatField::Deaths, 0.0)]
        );
    }

    #[test]
    fn most_played_never_appears_as_a_delta() {
        let old = stats(50.0, 2.0);
        let mut new = stats(50.0, 2.0);
        new.most_played = "Zed".to_string();

        let result = compare(&old, &new);

        assert_eq!(result.deltas.len(), old.averages.len());
    }
}
