//! Text-derived post fields: fallback resolution, briefs, reading time.

/// Resolve a field from multiple sources.
///
/// Takes a list of optional values in priority order and returns the first
/// non-None, non-blank value, trimmed.
///
/// ```text
/// slug:  resolve(&[frontmatter_slug, id_without_extension])
/// brief: resolve(&[frontmatter_brief, first_body_line])
/// ```
pub fn resolve(sources: &[Option<&str>]) -> Option<String> {
    sources
        .iter()
        .filter_map(|opt| {
            opt.map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
        })
        .next()
}

/// First line of prose in a markdown or MDX body, cut to `max_chars`.
///
/// Blank lines, headings and MDX `import`/`export` statements are skipped.
pub fn brief_from_body(body: &str, max_chars: usize) -> Option<String> {
    body.lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#') && !is_mdx_statement(line))
        .map(|line| line.chars().take(max_chars).collect())
}

fn is_mdx_statement(line: &str) -> bool {
    ["import ", "export "].iter().any(|kw| line.starts_with(kw))
}

/// Whitespace-separated word count.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Reading time in minutes, rounded up, never below 1.
pub fn reading_time(text: &str, words_per_minute: u32) -> u32 {
    let words = word_count(text) as u64;
    let wpm = u64::from(words_per_minute.max(1));
    let minutes = words.div_ceil(wpm);
    u32::try_from(minutes).unwrap_or(u32::MAX).max(1)
}
