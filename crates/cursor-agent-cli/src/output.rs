use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print `text` as-is, or wrapped as `{"<key>": text}` in JSON mode.
pub fn print_value(key: &str, text: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let mut map = serde_json::Map::new();
        map.insert(key.to_string(), serde_json::Value::String(text.to_string()));
        return print_json(&map);
    }
    println!("{}", text);
    Ok(())
}
