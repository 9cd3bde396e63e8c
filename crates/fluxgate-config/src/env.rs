use std::sync::OnceLock;

use regex::Regex;

/// Expand `{{ env.VAR }}` placeholders in a raw TOML string
///
/// Expansion operates on the raw config text before deserialization, so
/// config structs stay plain `String`/`SecretString`. Lines starting with
/// `#` (TOML comments) are passed through unchanged. Referencing a
/// variable that is not set in the environment is an error.
pub fn expand_env(input: &str) -> Result<String, String> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| {
        Regex::new(r"\{\{\s*env\.([A-Za-z0-9_]+)\s*\}\}").expect("must be valid regex")
    });

    let mut lines = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            lines.push(line.to_string());
            continue;
        }

        let mut expanded = String::with_capacity(line.len());
        let mut last_end = 0;

        for captures in re.captures_iter(line) {
            let overall = captures.get(0).expect("group 0 is the whole match");
            let var_name = &captures[1];

            expanded.push_str(&line[last_end..overall.start()]);

            match std::env::var(var_name) {
                Ok(value) => expanded.push_str(&value),
                Err(_) => return Err(format!("environment variable not found: `{var_name}`")),
            }

            last_end = overall.end();
        }

        expanded.push_str(&line[last_end..]);
        lines.push(expanded);
    }

    let mut output = lines.join("\n");
    if input.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
