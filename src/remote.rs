//! Async HTTP client for an Arjunaloka-style ingredient-checking backend.
//!
//! The backend exposes `POST /check_ingredients` accepting
//! `{"ingredients": [..]}` and answering `{"harmful": [..], "safe": bool}`,
//! plus a `GET /health` probe. Mapping the response onto per-candidate
//! verdicts is a pure function ([`interpret_response`]) so it can be tested
//! without a server.

use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::models::{Ingredient, SafetyStatus, VerdictSource};
use crate::safety::descriptions::describe;

#[derive(Debug, Serialize)]
struct CheckRequest<'a> {
    ingredients: &'a [String],
}

/// Response body of `POST /check_ingredients`. Extra fields the backend sends
/// (`total_checked`, `message`) are ignored.
#[derive(Debug, Deserialize)]
pub struct CheckResponse {
    #[serde(default)]
    pub harmful: Vec<String>,
    #[serde(default)]
    pub safe: bool,
}

/// POST the candidate list to `{endpoint}/check_ingredients`.
pub async fn check_ingredients(
    client: &Client,
    endpoint: &str,
    candidates: &[String],
) -> Result<CheckResponse> {
    let url = format!("{}/check_ingredients", endpoint.trim_end_matches('/'));

    let response = client
        .post(&url)
        .header("User-Agent", "ingredient-checkr/0.1.0")
        .header("Accept", "application/json")
        .json(&CheckRequest {
            ingredients: candidates,
        })
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(anyhow!(
            "ingredient backend returned HTTP {}",
            response.status()
        ));
    }

    Ok(response.json().await?)
}

/// Probe `{endpoint}/health`; `true` when the backend answers 2xx.
pub async fn health(client: &Client, endpoint: &str) -> bool {
    let url = format!("{}/health", endpoint.trim_end_matches('/'));
    match client.get(&url).send().await {
        Ok(response) => response.status().is_success(),
        Err(_) => false,
    }
}

/// Map a backend response onto per-candidate verdicts.
///
/// A candidate is harmful when it matches any entry of the returned `harmful`
/// array by case-insensitive substring containment in either direction — the
/// same rule the local classifier applies to its denylist.
pub fn interpret_response(
    candidates: &[String],
    response: &CheckResponse,
    config: &Config,
) -> Vec<Ingredient> {
    candidates
        .iter()
        .map(|candidate| {
            let lower = candidate.to_lowercase();
            let matched = response.harmful.iter().any(|entry| {
                let entry = entry.to_lowercase();
                lower.contains(&entry) || entry.contains(&lower)
            });

            let status = if matched {
                SafetyStatus::Harmful
            } else {
                SafetyStatus::Safe
            };

            Ingredient {
                name: candidate.clone(),
                status,
                description: describe(config, &lower, status),
                source: VerdictSource::Remote,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_deserialize_backend_response() {
        let body = r#"{
            "harmful": ["Parabens"],
            "safe": false,
            "total_checked": 3,
            "message": "Analysis complete"
        }"#;
        let response: CheckResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.harmful, vec!["Parabens"]);
        assert!(!response.safe);
    }

    #[test]
    fn test_deserialize_minimal_response() {
        let response: CheckResponse = serde_json::from_str("{}").unwrap();
        assert!(response.harmful.is_empty());
        assert!(!response.safe);
    }

    #[test]
    fn test_interpret_marks_returned_harmful() {
        let config = Config::default();
        let candidates = strings(&["water", "parabens", "glycerin"]);
        let response = CheckResponse {
            harmful: strings(&["Parabens"]),
            safe: false,
        };

        let verdicts = interpret_response(&candidates, &response, &config);
        assert_eq!(verdicts[0].status, SafetyStatus::Safe);
        assert_eq!(verdicts[1].status, SafetyStatus::Harmful);
        assert_eq!(verdicts[2].status, SafetyStatus::Safe);
        assert!(verdicts.iter().all(|v| v.source == VerdictSource::Remote));
    }

    #[test]
    fn test_interpret_substring_both_directions() {
        let config = Config::default();
        let response = CheckResponse {
            harmful: strings(&["Sodium Lauryl Sulfate"]),
            safe: false,
        };

        // Candidate contains the entry
        let verdicts =
            interpret_response(&strings(&["pure sodium lauryl sulfate gel"]), &response, &config);
        assert_eq!(verdicts[0].status, SafetyStatus::Harmful);

        // Entry contains the candidate
        let verdicts = interpret_response(&strings(&["lauryl sulfate"]), &response, &config);
        assert_eq!(verdicts[0].status, SafetyStatus::Harmful);
    }

    #[test]
    fn test_interpret_empty_harmful_list() {
        let config = Config::default();
        let response = CheckResponse {
            harmful: Vec::new(),
            safe: true,
        };
        let verdicts = interpret_response(&strings(&["water", "glycerin"]), &response, &config);
        assert!(verdicts.iter().all(|v| v.status == SafetyStatus::Safe));
    }
}
