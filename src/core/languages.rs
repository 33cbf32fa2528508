//! GitHub language statistics.
//!
//! Turns the `/languages` byte counts GitHub reports into percentage shares
//! and lays them out as stacked bar segments.

use std::collections::HashMap;

use serde::Deserialize;

use crate::config::github::{API_BASE, NOTEBOOK_LANGUAGE, NOTEBOOK_WEIGHT};
use crate::core::error::FetchError;
use crate::core::fetch::{CachedFetcher, RequestOptions, Transport};
use crate::core::storage::{Backend, StorageProvider};

/// Bytes (or weighted bytes) per language name.
pub type LanguageWeights = HashMap<String, f64>;

/// Entry of `GET /users/{user}/repos`; other fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Repo {
    pub name: String,
    #[serde(default)]
    pub fork: bool,
}

/// A language and its share of the total, in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub percent: f64,
}

/// One segment of a stacked language bar.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub name: String,
    /// CSS class carrying the language color (`{css name}-bg`).
    pub class_name: String,
    /// Width in percent of the bar.
    pub width: f64,
    /// Offset from the left edge in percent.
    pub left: f64,
    pub z_index: i32,
    pub tooltip: String,
}

/// Converts weights into percentage shares, heaviest first.
///
/// Ties are ordered by name. An empty map or a zero total yields no shares.
pub fn normalize_percentages(weights: &LanguageWeights) -> Vec<LanguageShare> {
    let total: f64 = weights.values().sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut entries: Vec<(&String, &f64)> = weights.iter().collect();
    entries.sort_by(|(a_name, a), (b_name, b)| b.total_cmp(a).then_with(|| a_name.cmp(b_name)));

    entries
        .into_iter()
        .map(|(name, weight)| LanguageShare {
            name: name.clone(),
            percent: weight * 100.0 / total,
        })
        .collect()
}

/// CSS class stem for a language name (`C++` → `cpp`, `Jupyter Notebook` →
/// `jupyter-notebook`).
pub fn css_class_name(language: &str) -> String {
    let mut class = String::with_capacity(language.len());
    for c in language.trim().chars() {
        match c {
            '+' => class.push('p'),
            '#' => class.push_str("sharp"),
            c if c.is_alphanumeric() => class.extend(c.to_lowercase()),
            _ if !class.ends_with('-') && !class.is_empty() => class.push('-'),
            _ => {}
        }
    }
    class.trim_end_matches('-').to_string()
}

/// Lays shares out left to right as stacked bar segments.
///
/// Earlier (larger) segments stack above later ones; z-indexes count down
/// from `shares.len() + base_z_index` to `1 + base_z_index`.
pub fn bar_segments(shares: &[LanguageShare], base_z_index: i32) -> Vec<BarSegment> {
    let mut z_index = shares.len() as i32 + 1 + base_z_index;
    let mut total_width = 0.0;

    shares
        .iter()
        .map(|share| {
            z_index -= 1;
            let left = total_width;
            total_width += share.percent;
            BarSegment {
                name: share.name.clone(),
                class_name: format!("{}-bg", css_class_name(&share.name)),
                width: share.percent,
                left,
                z_index,
                tooltip: format!("{} {:.2}%", share.name.to_lowercase(), share.percent),
            }
        })
        .collect()
}

fn repo_languages_url(user: &str, repo: &str) -> String {
    format!("{API_BASE}/repos/{user}/{repo}/languages")
}

fn user_repos_url(user: &str) -> String {
    format!("{API_BASE}/users/{user}/repos")
}

/// Percentage shares of one repository's languages.
pub async fn repo_languages<T, S>(
    fetcher: &CachedFetcher<T, S>,
    user: &str,
    repo: &str,
    token: Option<&str>,
) -> Result<Vec<LanguageShare>, FetchError>
where
    T: Transport,
    S: StorageProvider,
{
    let options = RequestOptions::default().with_token(token);
    let weights: LanguageWeights = fetcher
        .get_json(&repo_languages_url(user, repo), &options, Some(Backend::Session))
        .await?;
    Ok(normalize_percentages(&weights))
}

/// Language weights summed over every non-fork repository of `user`.
///
/// Notebook bytes are scaled by [`NOTEBOOK_WEIGHT`].
pub async fn user_languages<T, S>(
    fetcher: &CachedFetcher<T, S>,
    user: &str,
    token: Option<&str>,
) -> Result<LanguageWeights, FetchError>
where
    T: Transport,
    S: StorageProvider,
{
    let options = RequestOptions::default().with_token(token);
    let repos: Vec<Repo> = fetcher
        .get_json(&user_repos_url(user), &options, Some(Backend::Session))
        .await?;

    let mut totals = LanguageWeights::new();
    for repo in repos.iter().filter(|r| !r.fork) {
        let weights: LanguageWeights = fetcher
            .get_json(&repo_languages_url(user, &repo.name), &options, Some(Backend::Session))
            .await?;

        for (language, bytes) in weights {
            let weighted = if language == NOTEBOOK_LANGUAGE {
                bytes * NOTEBOOK_WEIGHT
            } else {
                bytes
            };
            *totals.entry(language).or_default() += weighted;
        }
    }

    tracing::debug!(user, languages = totals.len(), "aggregated user languages");
    Ok(totals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fetch::testing::StubTransport;
    use crate::core::storage::MemoryStorages;

    fn weights(pairs: &[(&str, f64)]) -> LanguageWeights {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_normalize_sorted_descending() {
        let shares = normalize_percentages(&weights(&[("Rust", 25.0), ("Python", 75.0)]));
        assert_eq!(
            shares,
            vec![
                LanguageShare { name: "Python".to_string(), percent: 75.0 },
                LanguageShare { name: "Rust".to_string(), percent: 25.0 },
            ]
        );
    }

    #[test]
    fn test_normalize_empty_and_zero() {
        assert!(normalize_percentages(&LanguageWeights::new()).is_empty());
        assert!(normalize_percentages(&weights(&[("Rust", 0.0)])).is_empty());
    }

    #[test]
    fn test_css_class_name() {
        assert_eq!(css_class_name("Python"), "python");
        assert_eq!(css_class_name("C++"), "cpp");
        assert_eq!(css_class_name("C#"), "csharp");
        assert_eq!(css_class_name("Jupyter Notebook"), "jupyter-notebook");
        assert_eq!(css_class_name("Vim Script"), "vim-script");
        assert_eq!(css_class_name("Objective-C"), "objective-c");
    }

    #[test]
    fn test_bar_segments_layout() {
        let shares = vec![
            LanguageShare { name: "Python".to_string(), percent: 60.0 },
            LanguageShare { name: "C++".to_string(), percent: 30.0 },
            LanguageShare { name: "Shell".to_string(), percent: 10.0 },
        ];
        let segments = bar_segments(&shares, 0);

        assert_eq!(segments.len(), 3);
        assert_eq!(segments[0].left, 0.0);
        assert_eq!(segments[1].left, 60.0);
        assert_eq!(segments[2].left, 90.0);
        assert_eq!(
            segments.iter().map(|s| s.z_index).collect::<Vec<_>>(),
            vec![3, 2, 1]
        );
        assert_eq!(segments[1].class_name, "cpp-bg");
        assert_eq!(segments[1].tooltip, "c++ 30.00%");
    }

    #[tokio::test]
    async fn test_repo_languages_percentages() {
        let url = repo_languages_url("tandyx", "site");
        let transport = StubTransport::default()
            .respond(&url, 200, r#"{"Python": 80, "JavaScript": 20}"#);
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());

        let shares = repo_languages(&fetcher, "tandyx", "site", None).await.unwrap();

        assert_eq!(shares[0], LanguageShare { name: "Python".to_string(), percent: 80.0 });
        assert_eq!(shares[1], LanguageShare { name: "JavaScript".to_string(), percent: 20.0 });
        let total: f64 = shares.iter().map(|s| s.percent).sum();
        assert!((total - 100.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_user_languages_skips_forks_and_weights_notebooks() {
        let transport = StubTransport::default()
            .respond(
                &user_repos_url("tandyx"),
                200,
                r#"[{"name": "mine", "fork": false}, {"name": "theirs", "fork": true}, {"name": "notes"}]"#,
            )
            .respond(&repo_languages_url("tandyx", "mine"), 200, r#"{"Rust": 1000, "Shell": 50}"#)
            .respond(
                &repo_languages_url("tandyx", "notes"),
                200,
                r#"{"Jupyter Notebook": 2000, "Rust": 500}"#,
            );
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());

        let totals = user_languages(&fetcher, "tandyx", Some("secret")).await.unwrap();

        assert_eq!(totals.len(), 3);
        assert_eq!(totals["Rust"], 1500.0);
        assert_eq!(totals["Shell"], 50.0);
        assert_eq!(totals["Jupyter Notebook"], 100.0);
        // The fork was never requested.
        assert_eq!(transport.calls.get(), 3);
    }

    #[tokio::test]
    async fn test_user_languages_propagates_errors() {
        let transport = StubTransport::default().respond(&user_repos_url("tandyx"), 403, "rate limited");
        let fetcher = CachedFetcher::new(&transport, MemoryStorages::default());

        let err = user_languages(&fetcher, "tandyx", None).await.unwrap_err();
        assert_eq!(err.status(), Some(403));
    }
}
