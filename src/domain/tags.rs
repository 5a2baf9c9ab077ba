//! Comma-separated tag input handling shared by the editors.

/// Split user tag input on commas, trimming whitespace around each entry.
///
/// Entries left empty by stray separators are dropped, so `"a,"` yields
/// `["a"]` rather than carrying an empty tag into the saved resource.
pub fn parse(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Join a tag sequence back into the display form used by the input field.
pub fn join(tags: &[String]) -> String {
    tags.join(", ")
}
