use super::super::domain::ImpactMap;

/// Rescale one dimension's raw totals to a 0-10 scale relative to that
/// dimension's own maximum. The top trait lands at exactly 10.0 and every other
/// value scales proportionally, rounded to one decimal.
///
/// Scores are relative within a single assessment and are not comparable across
/// assessments or cohorts. An empty map, or one whose maximum is zero, is
/// returned unchanged.
pub(crate) fn normalize_scores(raw: &ImpactMap) -> ImpactMap {
    let Some(max) = raw.values().cloned().fold(None, |acc: Option<f64>, value| {
        Some(acc.map_or(value, |current| current.max(value)))
    }) else {
        return ImpactMap::new();
    };

    if max == 0.0 {
        return raw.clone();
    }

    raw.iter()
        .map(|(trait_name, value)| (trait_name.clone(), round_one_decimal(value / max * 10.0)))
        .collect()
}

/// Pick the primary and secondary traits by normalized score.
///
/// Equal scores order alphabetically by trait name: iteration over the map is
/// already alphabetical and the sort is stable, which makes ranking fully
/// deterministic. Fewer than two traits leaves the corresponding slot empty.
pub(crate) fn rank(scores: &ImpactMap) -> (Option<String>, Option<String>) {
    let mut ordered: Vec<(&String, f64)> = scores
        .iter()
        .map(|(trait_name, value)| (trait_name, *value))
        .collect();
    ordered.sort_by(|left, right| right.1.total_cmp(&left.1));

    let primary = ordered.first().map(|(trait_name, _)| (*trait_name).clone());
    let secondary = ordered.get(1).map(|(trait_name, _)| (*trait_name).clone());
    (primary, secondary)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
