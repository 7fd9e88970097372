use serde_json::Value;
use tabled::{builder::Builder, Table};

/// Format output as tables using the tabled crate.
///
/// Computation envelopes are printed section by section: scalar fields of
/// the result first, then one table per nested object (the payment plan's
/// `summary` and `percentages`), then warnings and the methodology line.
pub fn print_table(value: &Value) {
    match value {
        Value::Object(map) => {
            if let Some(result) = map.get("result") {
                print_result_sections(result);
                print_envelope_extras(map);
            } else {
                print_two_column(value);
            }
        }
        _ => println!("{}", value),
    }
}

fn print_result_sections(result: &Value) {
    let map = match result {
        Value::Object(map) => map,
        _ => {
            println!("{}", result);
            return;
        }
    };

    // Flat fields (the mortgage output has no nested sections)
    let scalars: Vec<(&String, &Value)> = map.iter().filter(|(_, v)| !v.is_object()).collect();
    if !scalars.is_empty() {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in scalars {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }

    // One table per nested section
    for (key, val) in map {
        if let Value::Object(section) = val {
            println!("\n{}", key);
            let mut builder = Builder::default();
            builder.push_record(["Field", "Value"]);
            for (field, v) in section {
                builder.push_record([field.as_str(), &format_value(v)]);
            }
            println!("{}", Table::from(builder));
        }
    }
}

fn print_envelope_extras(envelope: &serde_json::Map<String, Value>) {
    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings {
                if let Value::String(s) = w {
                    println!("  - {}", s);
                }
            }
        }
    }

    if let Some(Value::String(methodology)) = envelope.get("methodology") {
        println!("\nMethodology: {}", methodology);
    }
}

fn print_two_column(value: &Value) {
    if let Value::Object(map) = value {
        let mut builder = Builder::default();
        builder.push_record(["Field", "Value"]);
        for (key, val) in map {
            builder.push_record([key.as_str(), &format_value(val)]);
        }
        println!("{}", Table::from(builder));
    }
}

fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        _ => serde_json::to_string(value).unwrap_or_default(),
    }
}
