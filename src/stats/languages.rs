use crate::github::types::Repository;
use itertools::Itertools;
use std::collections::HashMap;

/// Bar values are tenths of a percent; the bar widget only takes integers.
pub const CHART_SCALE: f64 = 10.0;
pub const CHART_MAX: u64 = 1000;
pub const CHART_CAPTION: &str = "Languages (%)";

/// Share of repositories per language, in first-seen order.
///
/// Percentages are relative to the total repository count, so repositories
/// without a language pull every bar down and the series need not sum to 100.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LanguageDistribution {
    pub labels: Vec<String>,
    pub percentages: Vec<f64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartBar {
    pub label: String,
    pub value: u64,
    pub text: String,
}

pub fn aggregate_languages(repos: &[Repository]) -> LanguageDistribution {
    let total = repos.len();
    if total == 0 {
        return LanguageDistribution::default();
    }

    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for lang in repos.iter().filter_map(Repository::classified_language) {
        match slots.get(lang) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(lang, counts.len());
                counts.push((lang, 1));
            }
        }
    }

    let (labels, percentages) = counts
        .into_iter()
        .map(|(lang, count)| (lang.to_string(), count as f64 / total as f64 * 100.0))
        .unzip();

    LanguageDistribution {
        labels,
        percentages,
    }
}

impl LanguageDistribution {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn chart_series(&self) -> Vec<ChartBar> {
        self.labels
            .iter()
            .zip_eq(&self.percentages)
            .map(|(label, pct)| ChartBar {
                label: label.clone(),
                value: (pct * CHART_SCALE).round() as u64,
                text: format!("{pct:.1}%"),
            })
            .collect()
    }
}
