// Shared prompt fragments and the template filler used by every feature.
// Each feature defines its own prompts.rs alongside it.

/// Closing instruction shared by all structured-reply prompts. The schema
/// block follows it in each template.
pub const RESPOND_IN_JSON: &str = "Please respond in JSON format with the following structure:";

/// Substitutes `{name}` placeholders in a single left-to-right pass.
///
/// Only names listed in `vars` are substituted; every other brace is copied
/// verbatim, so JSON schema examples in templates survive untouched and text
/// supplied by the user is never re-expanded.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replaced = after.find('}').and_then(|close| {
            let name = &after[..close];
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replaced {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    out
}
