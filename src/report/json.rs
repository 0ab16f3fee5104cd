use anyhow::Result;
use serde::Serialize;
use serde_json::{json, Value};

use crate::models::{AggregationResult, IntervalEntry};

/// Print any serializable value as pretty JSON.
pub fn render<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn link(href: String) -> Value {
    json!({ "href": href, "method": "GET" })
}

fn entry_with_links(entry: &IntervalEntry) -> Result<Value> {
    let mut value = serde_json::to_value(entry)?;
    if let Value::Object(map) = &mut value {
        map.insert(
            "_links".to_string(),
            json!({
                "producer_details": link(format!("/producers/{}", entry.producer)),
                "movie_details": link(format!(
                    "/movies?year={}&producer={}",
                    entry.previous_win, entry.producer
                )),
            }),
        );
    }
    Ok(value)
}

/// The awards result with links to the producer and to the first winning movie
/// of each interval, plus a link to the full record listing.
pub fn details_document(result: &AggregationResult) -> Result<Value> {
    let min = result.min.iter().map(entry_with_links).collect::<Result<Vec<_>>>()?;
    let max = result.max.iter().map(entry_with_links).collect::<Result<Vec<_>>>()?;

    Ok(json!({
        "min": min,
        "max": max,
        "_links": { "all_movies": link("/movies".to_string()) },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intervals::aggregate;

    #[test]
    fn test_interval_keys_are_camel_case() {
        let result = aggregate(vec![("P", 2000), ("P", 2005)]);
        let value = serde_json::to_value(&result).unwrap();
        let entry = &value["min"][0];
        assert_eq!(entry["producer"], "P");
        assert_eq!(entry["interval"], 5);
        assert_eq!(entry["previousWin"], 2000);
        assert_eq!(entry["followingWin"], 2005);
    }

    #[test]
    fn test_details_links() {
        let result = aggregate(vec![("P1", 2000), ("P1", 2005), ("P2", 2010), ("P2", 2012)]);
        let doc = details_document(&result).unwrap();

        assert_eq!(doc["_links"]["all_movies"]["href"], "/movies");
        let min = &doc["min"][0];
        assert_eq!(min["producer"], "P2");
        assert_eq!(min["_links"]["producer_details"]["href"], "/producers/P2");
        assert_eq!(min["_links"]["movie_details"]["href"], "/movies?year=2010&producer=P2");
        assert_eq!(min["_links"]["movie_details"]["method"], "GET");
    }

    #[test]
    fn test_details_empty() {
        let doc = details_document(&AggregationResult::default()).unwrap();
        assert_eq!(doc["min"], json!([]));
        assert_eq!(doc["max"], json!([]));
        assert!(doc["_links"]["all_movies"].is_object());
    }
}
