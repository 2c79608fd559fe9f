/// Output formatting: terminal table and JSON.
use serde::Serialize;
use voterank_core::RankResult;

use crate::input::LabeledItem;

/// Which ranking key orders the printed rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Hot,
    Best,
    Score,
    /// Keep the order items were given in.
    Input,
}

impl SortKey {
    pub fn parse(value: &str) -> Option<SortKey> {
        match value {
            "hot" => Some(SortKey::Hot),
            "best" => Some(SortKey::Best),
            "score" => Some(SortKey::Score),
            "input" => Some(SortKey::Input),
            _ => None,
        }
    }
}

/// One ranked row: an input item and its computed keys.
#[derive(Debug, Clone)]
pub struct RankedRow {
    pub label: String,
    pub upvotes: i64,
    pub downvotes: i64,
    pub created_at: i64,
    pub ranks: RankResult,
}

impl RankedRow {
    pub fn new(labeled: &LabeledItem, ranks: RankResult) -> Self {
        RankedRow {
            label: labeled.label.clone(),
            upvotes: labeled.item.upvotes,
            downvotes: labeled.item.downvotes,
            created_at: labeled.item.created_at,
            ranks,
        }
    }
}

/// Order rows descending by `key`. Stable, so ties keep input order.
pub fn sort_rows(rows: &mut [RankedRow], key: SortKey) {
    match key {
        SortKey::Hot => rows.sort_by(|a, b| b.ranks.hot.total_cmp(&a.ranks.hot)),
        SortKey::Best => rows.sort_by(|a, b| b.ranks.best.total_cmp(&a.ranks.best)),
        SortKey::Score => rows.sort_by(|a, b| b.ranks.score.cmp(&a.ranks.score)),
        SortKey::Input => {}
    }
}

#[derive(Serialize)]
struct JsonRankedItem<'a> {
    rank: usize,
    label: &'a str,
    upvotes: i64,
    downvotes: i64,
    created_at: i64,
    #[serde(flatten)]
    ranks: RankResult,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    items: Vec<JsonRankedItem<'a>>,
    z: f64,
}

/// Render rows as a formatted terminal table.
pub fn render_table(rows: &[RankedRow], z: f64) -> String {
    let label_width = rows.iter()
        .map(|r| r.label.chars().count())
        .max()
        .unwrap_or(4)
        .max(4); // at least "Item"

    let mut out = String::new();
    out.push_str(&format!(
        " # | {:<label_width$} |     Up |   Down |  Score |           Hot |   Best\n",
        "Item",
    ));
    out.push_str(&format!(
        "---|-{}-|--------|--------|--------|---------------|-------\n",
        "-".repeat(label_width),
    ));

    for (i, r) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>2} | {:<label_width$} | {:>6} | {:>6} | {:>6} | {:>13.7} | {:>6.4}\n",
            i + 1, r.label, r.upvotes, r.downvotes, r.ranks.score, r.ranks.hot, r.ranks.best,
        ));
    }

    out.push_str(&format!("\n{} items ranked (best at z = {z})\n", rows.len()));
    out
}

/// Render rows as pretty-printed JSON.
pub fn render_json(rows: &[RankedRow], z: f64) -> Result<String, serde_json::Error> {
    let items = rows
        .iter()
        .enumerate()
        .map(|(i, r)| JsonRankedItem {
            rank: i + 1,
            label: &r.label,
            upvotes: r.upvotes,
            downvotes: r.downvotes,
            created_at: r.created_at,
            ranks: r.ranks,
        })
        .collect();

    serde_json::to_string_pretty(&JsonOutput { items, z })
}
