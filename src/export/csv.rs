//! Minimal CSV rendering for order batches.
//!
//! Columns come from the first order's keys only. Keys that appear only in
//! later orders are dropped from every row.

use serde_json::Value;

use crate::shipstation::Order;

/// Render `orders` as CSV. Rows are joined with `\n` and the output has no
/// trailing newline; an empty batch renders as an empty string.
pub fn to_csv(orders: &[Order]) -> String {
    let Some(first) = orders.first() else {
        return String::new();
    };

    let keys: Vec<&str> = first
        .as_object()
        .map(|map| map.keys().map(String::as_str).collect())
        .unwrap_or_default();

    let mut lines = Vec::with_capacity(orders.len() + 1);
    lines.push(keys.join(","));

    for order in orders {
        let row: Vec<String> = keys
            .iter()
            .map(|key| escape_field(&stringify(order.get(*key))))
            .collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn escape_field(raw: &str) -> String {
    let escaped = raw.replace('"', "\"\"");
    if escaped.contains([',', '"', '\n']) {
        format!("\"{}\"", escaped)
    } else {
        escaped
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_batch() {
        assert_eq!(to_csv(&[]), "");
    }

    #[test]
    fn test_header_and_row() {
        assert_eq!(to_csv(&[json!({"a": 1, "b": 2})]), "a,b\n1,2");
    }

    #[test]
    fn test_comma_is_quoted() {
        assert_eq!(to_csv(&[json!({"a": "x,y"})]), "a\n\"x,y\"");
    }

    #[test]
    fn test_quotes_doubled() {
        assert_eq!(to_csv(&[json!({"note": "say \"hi\""})]), "note\n\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_newline_is_quoted() {
        assert_eq!(to_csv(&[json!({"addr": "line1\nline2"})]), "addr\n\"line1\nline2\"");
    }

    #[test]
    fn test_null_and_missing_are_empty() {
        let orders = vec![json!({"a": null, "b": "kept"}), json!({"b": "only b"})];
        assert_eq!(to_csv(&orders), "a,b\n,kept\n,only b");
    }

    #[test]
    fn test_later_keys_are_dropped() {
        let orders = vec![json!({"id": 1}), json!({"id": 2, "extra": "lost"})];
        assert_eq!(to_csv(&orders), "id\n1\n2");
    }

    #[test]
    fn test_header_follows_first_order_key_order() {
        let orders: Vec<Order> =
            serde_json::from_str(r#"[{"orderNumber":"A","orderId":7,"amount":9.5}]"#).unwrap();
        assert_eq!(to_csv(&orders), "orderNumber,orderId,amount\nA,7,9.5");
    }

    #[test]
    fn test_whole_floats_keep_decimal_point() {
        let orders: Vec<Order> =
            serde_json::from_str(r#"[{"shippingAmount":0.0,"orderTotal":12.0,"qty":3}]"#)
                .unwrap();
        assert_eq!(to_csv(&orders), "shippingAmount,orderTotal,qty\n0.0,12.0,3");
    }

    #[test]
    fn test_nested_values_render_as_json() {
        let orders = vec![json!({"id": 1, "tags": [1, 2], "active": true})];
        assert_eq!(to_csv(&orders), "id,tags,active\n1,\"[1,2]\",true");
    }
}
