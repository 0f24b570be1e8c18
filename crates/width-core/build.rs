fn main() {
    // Validate the embedded catalog TOML at compile time.
    validate_toml(
        "src/catalog/default_pairs.toml",
        include_str!("src/catalog/default_pairs.toml"),
    );
}

fn validate_toml(path: &str, content: &str) {
    if content.parse::<toml::Value>().is_err() {
        panic!("{path} contains invalid TOML");
    }
}
