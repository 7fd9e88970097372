use serde_json::Value;
use std::io;

/// Write output as two-column CSV to stdout, flattening nested sections
/// into `section.field` keys.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    let result = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    let _ = wtr.write_record(["field", "value"]);
    if let Value::Object(map) = result {
        for (key, val) in map {
            match val {
                Value::Object(section) => {
                    for (field, v) in section {
                        let _ = wtr.write_record([
                            format!("{key}.{field}").as_str(),
                            &format_csv_value(v),
                        ]);
                    }
                }
                _ => {
                    let _ = wtr.write_record([key.as_str(), &format_csv_value(val)]);
                }
            }
        }
    } else {
        let _ = wtr.write_record(["value", &format_csv_value(result)]);
    }

    let _ = wtr.flush();
}

fn format_csv_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
