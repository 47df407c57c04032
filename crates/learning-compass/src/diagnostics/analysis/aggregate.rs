use super::super::domain::{ImpactMap, Response};

/// Raw per-dimension trait totals summed across every selected option in one
/// assessment. Not yet normalized.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct RawScores {
    pub learning_styles: ImpactMap,
    pub cognitive_strengths: ImpactMap,
    pub behavior_patterns: ImpactMap,
    pub interests: ImpactMap,
}

/// Sum the impact weights of all selected options, per dimension and per trait.
///
/// Responses without a selected option (open-ended questions) are skipped. Trait
/// names are trusted as stored: a key outside the documented catalogs aggregates
/// as a new trait rather than erroring.
pub(crate) fn aggregate_responses(responses: &[Response]) -> RawScores {
    let mut totals = RawScores::default();

    for response in responses {
        let Some(option) = &response.selected_option else {
            continue;
        };

        accumulate(&mut totals.learning_styles, &option.learning_style_impact);
        accumulate(&mut totals.cognitive_strengths, &option.cognitive_impact);
        accumulate(&mut totals.behavior_patterns, &option.behavior_impact);
        accumulate(&mut totals.interests, &option.interest_impact);
    }

    totals
}

fn accumulate(totals: &mut ImpactMap, impacts: &ImpactMap) {
    for (trait_name, weight) in impacts {
        *totals.entry(trait_name.clone()).or_insert(0.0) += weight;
    }
}
