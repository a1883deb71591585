//! Prompt construction for the standup report.

/// Prompt for summarizing one chunk of the aggregated git log.
pub fn standup_prompt(log_text: &str) -> String {
    format!(
        r#"Summarize the following log of git commit messages and diffs into a detailed
message in markdown, appropriate for a daily standup report and intended for a
non-technical audience. Focus on user-facing changes, ignore minor edits, and
group the summary by author. Title it "Daily standup".

The git log:
```
{log_text}
```"#
    )
}

/// Reduce prompt combining per-chunk partial summaries into one report.
pub fn combine_prompt(partial_summaries: &str) -> String {
    format!(
        r#"The following are partial summaries of one git history, produced from
consecutive sections of the same log. Merge them into a single markdown
message titled "Daily standup", grouped by author, with duplicate points
collapsed. Keep the tone appropriate for a non-technical audience.

The partial summaries:
```
{partial_summaries}
```"#
    )
}
