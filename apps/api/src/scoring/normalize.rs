/// Lowercases, turns every character that is not a letter, digit, underscore or
/// whitespace into a space, collapses whitespace runs and trims.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut pending_space = false;

    for c in lowered.chars() {
        let keep = c.is_alphanumeric() || c == '_';
        if keep {
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(c);
        } else {
            pending_space = true;
        }
    }

    out
}
