use crate::config::Config;
use crate::models::{AnalysisSummary, Ingredient, SafetyStatus, VerdictSource};
use crate::safety::descriptions::describe;

/// Classify normalized candidates against the configured denylist.
///
/// A candidate is harmful when any denylist entry matches it by
/// case-insensitive substring containment in either direction (the candidate
/// contains the entry, or the entry contains the candidate). Everything else
/// is safe; the neutral bucket only appears when a caller supplies
/// pre-classified data.
///
/// Pure and deterministic; performs no I/O.
pub fn classify(candidates: &[String], config: &Config) -> Vec<Ingredient> {
    candidates
        .iter()
        .map(|candidate| classify_single(candidate, config))
        .collect()
}

fn classify_single(candidate: &str, config: &Config) -> Ingredient {
    let lower = candidate.to_lowercase();

    let matched = config.reference.harmful.iter().any(|entry| {
        let entry = entry.to_lowercase();
        lower.contains(&entry) || entry.contains(&lower)
    });

    let status = if matched {
        SafetyStatus::Harmful
    } else {
        SafetyStatus::Safe
    };

    Ingredient {
        name: candidate.to_string(),
        status,
        description: describe(config, &lower, status),
        source: VerdictSource::Local,
    }
}

/// Count verdicts by status. `total` is always the list length.
pub fn summarize(ingredients: &[Ingredient]) -> AnalysisSummary {
    let count = |status: SafetyStatus| {
        ingredients
            .iter()
            .filter(|ingredient| ingredient.status == status)
            .count()
    };

    AnalysisSummary {
        total: ingredients.len(),
        harmful: count(SafetyStatus::Harmful),
        safe: count(SafetyStatus::Safe),
        neutral: count(SafetyStatus::Neutral),
    }
}
