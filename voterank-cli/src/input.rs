/// Item loading: JSON array, JSON Lines, or plain text records.
///
/// Numbers are read as floats and coerced by the core, so `"upvotes": -3` or
/// `12.5` rank the same way they would anywhere else.
use serde::Deserialize;
use voterank_core::VoteItem;

/// An item to rank plus the label it is printed under.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledItem {
    pub label: String,
    pub item: VoteItem,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default, alias = "title", alias = "name")]
    label: Option<String>,
    #[serde(default)]
    upvotes: f64,
    #[serde(default)]
    downvotes: f64,
    #[serde(alias = "createdAt")]
    created_at: f64,
}

impl RawItem {
    fn into_labeled(self, position: usize) -> LabeledItem {
        LabeledItem {
            label: self.label.unwrap_or_else(|| default_label(position)),
            item: VoteItem::from_raw(self.upvotes, self.downvotes, self.created_at),
        }
    }
}

fn default_label(position: usize) -> String {
    format!("item {}", position + 1)
}

/// Parse items from a string, auto-detecting the format.
///
/// - `[ ... ]`: JSON array of objects.
/// - `{ ... }` per line: JSON Lines.
/// - anything else: one `UPVOTES DOWNVOTES CREATED_AT [LABEL...]` record per
///   line. Blank lines and lines starting with `#` are skipped.
pub fn parse_items_from_str(content: &str) -> Result<Vec<LabeledItem>, String> {
    let trimmed = content.trim();
    if trimmed.starts_with('[') {
        let raw: Vec<RawItem> = serde_json::from_str(trimmed)
            .map_err(|e| format!("Input looks like a JSON array but failed to parse: {e}"))?;
        Ok(raw.into_iter().enumerate().map(|(i, r)| r.into_labeled(i)).collect())
    } else if trimmed.starts_with('{') {
        parse_json_lines(trimmed)
    } else {
        parse_text_records(trimmed)
    }
}

fn parse_json_lines(content: &str) -> Result<Vec<LabeledItem>, String> {
    let mut items = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let raw: RawItem = serde_json::from_str(line)
            .map_err(|e| format!("Line {}: invalid JSON item: {e}", line_no + 1))?;
        let position = items.len();
        items.push(raw.into_labeled(position));
    }
    Ok(items)
}

fn parse_text_records(content: &str) -> Result<Vec<LabeledItem>, String> {
    let mut items = Vec::new();
    for (line_no, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (item, label) = parse_record(line).map_err(|e| format!("Line {}: {e}", line_no + 1))?;
        let label = label.unwrap_or_else(|| default_label(items.len()));
        items.push(LabeledItem { label, item });
    }
    Ok(items)
}

/// Parse one `UPVOTES DOWNVOTES CREATED_AT [LABEL...]` record.
pub fn parse_record(record: &str) -> Result<(VoteItem, Option<String>), String> {
    let mut fields = record.split_whitespace();
    let mut number = |name: &str| -> Result<f64, String> {
        let field = fields.next().ok_or_else(|| format!("missing {name}"))?;
        field.parse::<f64>().map_err(|_| format!("invalid {name} \"{field}\""))
    };

    let upvotes = number("upvotes")?;
    let downvotes = number("downvotes")?;
    let created_at = number("created_at")?;

    let label: Vec<&str> = fields.collect();
    let label = if label.is_empty() { None } else { Some(label.join(" ")) };

    Ok((VoteItem::from_raw(upvotes, downvotes, created_at), label))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_array() {
        let content = r#"[
            {"label": "first", "upvotes": 320, "downvotes": 40, "created_at": 1700000000},
            {"upvotes": 1.9, "downvotes": -5, "createdAt": 1700000000.7}
        ]"#;
        let items = parse_items_from_str(content).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "first");
        assert_eq!(
            items[0].item,
            VoteItem { upvotes: 320, downvotes: 40, created_at: 1_700_000_000 }
        );
        assert_eq!(items[1].label, "item 2");
        assert_eq!(items[1].item, VoteItem { upvotes: 1, downvotes: 0, created_at: 1_700_000_000 });
    }

    #[test]
    fn test_parse_json_lines() {
        let content = concat!(
            "{\"title\": \"a\", \"upvotes\": 3, \"created_at\": 10}\n",
            "\n",
            "{\"upvotes\": 1, \"downvotes\": 2, \"created_at\": 20}\n",
        );
        let items = parse_items_from_str(content).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "a");
        assert_eq!(items[0].item.downvotes, 0);
        assert_eq!(items[1].label, "item 2");
        assert_eq!(items[1].item.created_at, 20);
    }

    #[test]
    fn test_parse_json_lines_reports_line() {
        let content = "{\"upvotes\": 3, \"created_at\": 10}\n{\"upvotes\": }\n";
        let err = parse_items_from_str(content).unwrap_err();
        assert!(err.starts_with("Line 2:"), "got: {err}");
    }

    #[test]
    fn test_parse_text_records() {
        let content = "# up down created\n320 40 1700000000 Big launch post\n\n10 2 1134028003\n";
        let items = parse_items_from_str(content).unwrap();

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].label, "Big launch post");
        assert_eq!(items[0].item.upvotes, 320);
        assert_eq!(items[1].label, "item 2");
        assert_eq!(items[1].item.created_at, 1_134_028_003);
    }

    #[test]
    fn test_parse_text_record_errors() {
        let err = parse_items_from_str("1 2\n").unwrap_err();
        assert_eq!(err, "Line 1: missing created_at");

        let err = parse_items_from_str("1 2 3\nx 2 3\n").unwrap_err();
        assert_eq!(err, "Line 2: invalid upvotes \"x\"");
    }

    #[test]
    fn test_parse_record_coerces() {
        let (item, label) = parse_record("-4 2.9 1e9").unwrap();
        assert_eq!(item, VoteItem { upvotes: 0, downvotes: 2, created_at: 1_000_000_000 });
        assert!(label.is_none());
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_items_from_str("  \n").unwrap().is_empty());
    }
}
