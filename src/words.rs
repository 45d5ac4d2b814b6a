// Fri Oct 16 2026 - Alex

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b[a-zA-Z]+\b").expect("valid word regex"));

/// The `n` most frequent words of `text`, case-insensitive, most frequent
/// first. Equal counts rank by first appearance. A non-positive `n` yields
/// nothing.
pub fn top_words(text: &str, n: i64) -> Vec<String> {
    if n <= 0 {
        return Vec::new();
    }

    let mut frequency: IndexMap<String, usize> = IndexMap::new();
    for word in WORD.find_iter(text) {
        *frequency.entry(word.as_str().to_lowercase()).or_insert(0) += 1;
    }

    let mut ranked: Vec<(String, usize)> = frequency.into_iter().collect();
    // stable sort keeps first-appearance order among ties
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(n as usize)
        .map(|(word, _)| word)
        .collect()
}
