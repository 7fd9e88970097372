use serde_json::Value;

/// Print just the key answer value from the output.
///
/// Heuristic: look inside the result envelope (and the payment plan's
/// summary section) for well-known headline fields, then fall back to the
/// first field.
pub fn print_minimal(value: &Value) {
    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    // The payment plan nests its figures under "summary"
    let flat = result
        .as_object()
        .and_then(|m| m.get("summary"))
        .unwrap_or(result);

    let priority_keys = [
        "monthly_payment",
        "monthly_total",
        "due_at_signing",
        "final_payment",
        "path",
    ];

    if let Value::Object(map) = flat {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_minimal(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_minimal(val));
            return;
        }
    }

    println!("{}", format_minimal(flat));
}

fn format_minimal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
