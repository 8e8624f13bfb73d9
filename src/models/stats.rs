//! Admin dashboard statistics.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sections whose `articles` arrays count towards the dashboard totals.
const ARTICLE_SECTIONS: [&str; 2] = ["entrepreneurship", "growthNotes"];

/// Aggregate numbers shown on the admin dashboard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_articles: usize,
    pub total_views: u64,
    pub message_count: usize,
}

impl DashboardStats {
    /// Compute totals from the stored site document as raw JSON.
    ///
    /// Works on whatever shape was saved: missing sections count as empty and
    /// a `views` value that is not a whole number is read as best it can be.
    pub fn collect(document: &Value, message_count: usize) -> Self {
        let articles: Vec<&Value> = ARTICLE_SECTIONS
            .iter()
            .filter_map(|section| document.get(*section)?.get("articles")?.as_array())
            .flatten()
            .collect();

        Self {
            total_articles: articles.len(),
            total_views: articles
                .iter()
                .map(|article| article.get("views").map_or(0, views_of))
                .sum(),
            message_count,
        }
    }
}

fn views_of(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f > 0.0).map(|f| f as u64))
            .unwrap_or(0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| *f > 0.0)
            .map_or(0, |f| f as u64),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_collect_spans_both_collections() {
        let document = json!({
            "entrepreneurship": { "articles": [{ "id": "a", "views": 3 }] },
            "growthNotes": { "articles": [{ "id": "b", "views": 4 }, { "id": "c" }] }
        });

        let stats = DashboardStats::collect(&document, 2);

        assert_eq!(
            stats,
            DashboardStats {
                total_articles: 3,
                total_views: 7,
                message_count: 2
            }
        );
    }

    #[test]
    fn test_collect_reads_loose_view_counts() {
        let document = json!({
            "entrepreneurship": {
                "articles": [
                    { "views": "12" },
                    { "views": 2.9 },
                    { "views": -5 },
                    { "views": null },
                    { "views": "many" }
                ]
            }
        });

        let stats = DashboardStats::collect(&document, 0);

        assert_eq!(stats.total_articles, 5);
        assert_eq!(stats.total_views, 14);
    }

    #[test]
    fn test_collect_ignores_unexpected_shapes() {
        let document = json!({ "entrepreneurship": { "articles": "none" }, "growthNotes": [] });
        assert_eq!(DashboardStats::collect(&document, 1).total_articles, 0);
        assert_eq!(DashboardStats::collect(&Value::Null, 1).message_count, 1);
    }
}
