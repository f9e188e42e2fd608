/// Cuts the JSON payload out of raw model output.
///
/// Strips leading/trailing code-fence lines, then returns the span from the
/// first `{` to the last `}`. The greedy last-brace match means two
/// independent objects in one reply coalesce into a single invalid span;
/// downstream validation rejects that. When no brace pair exists the
/// stripped text is returned as-is and left for validation to refuse.
pub(crate) fn extract_json_payload(raw: &str) -> String {
    let stripped = strip_code_fences(raw.trim());

    match (stripped.find('{'), stripped.rfind('}')) {
        (Some(start), Some(end)) if start < end => stripped[start..=end].to_string(),
        _ => stripped,
    }
}

/// Removes a leading fence line (bare or language-tagged) and a trailing
/// bare fence line.
fn strip_code_fences(text: &str) -> String {
    let mut lines: Vec<&str> = text.lines().collect();

    if lines
        .first()
        .is_some_and(|line| line.trim_start().starts_with("```"))
    {
        lines.remove(0);
    }
    if lines.last().is_some_and(|line| line.trim() == "```") {
        lines.pop();
    }

    lines.join("\n").trim().to_string()
}
