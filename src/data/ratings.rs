// ---------------------------------------------------------------------------
// Rating code ↔ display label mapping
// ---------------------------------------------------------------------------

/// The known rating codes and their display labels, as shown in the rating
/// selector.
const RATING_LABELS: [(&str, &str); 12] = [
    ("TV-MA", "TV-MA (Mature Audience 18+)"),
    ("PG", "PG (Parental Guidance)"),
    ("R", "R (Restricted 17+)"),
    ("TV-14", "TV-14 (Teens and older)"),
    ("TV-Y", "TV-Y (All children)"),
    ("TV-Y7", "TV-Y7 (Ages 7+)"),
    ("G", "G (General Audience)"),
    ("NR", "NR (Not Rated)"),
    ("TV-G", "TV-G (General Audience)"),
    ("NC-17", "NC-17 (Adults Only)"),
    ("UR", "UR (Unrated)"),
    ("PG-13", "PG-13 (Parents Strongly Cautioned)"),
];

/// Display label for a rating code. Codes outside the fixed table get a
/// synthesized `"<code> (Unknown)"` label.
pub fn code_to_label(code: &str) -> String {
    RATING_LABELS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| format!("{code} (Unknown)"))
}

/// Rating code for a display label. Only the fixed table is consulted, so
/// synthesized "(Unknown)" labels come back as `None` and the caller ends up
/// applying no rating filter. Kept asymmetric on purpose to match the
/// selector's behavior.
pub fn label_to_code(label: &str) -> Option<&'static str> {
    RATING_LABELS
        .iter()
        .find(|(_, l)| *l == label)
        .map(|(code, _)| *code)
}

/// Selector labels for the rating codes present in a dataset, in the
/// (sorted) order the dataset reports them. Unknown codes appear with their
/// synthesized label.
pub fn labels_for(codes: &[String]) -> Vec<String> {
    codes.iter().map(|c| code_to_label(c)).collect()
}
