fn main() {
    // Validate the embedded rune table at compile time.
    validate_toml(
        "src/runes/default_runes.toml",
        include_str!("src/runes/default_runes.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    let value: toml::Value = match content.parse() {
        Ok(v) => v,
        Err(_) => panic!("{path} contains invalid TOML"),
    };
    let has_runes = value
        .get("runes")
        .and_then(|r| r.as_array())
        .is_some_and(|r| !r.is_empty());
    if !has_runes {
        panic!("{path} must define a non-empty [[runes]] array");
    }
}
