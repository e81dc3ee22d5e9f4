use crate::filter::Candidate;

/// Append the references block linking cited snippets back to their source
/// experiences. Entries follow the filtered order, highest similarity first.
/// Only meaningful when at least one candidate survived filtering.
pub fn append_references(answer: &str, candidates: &[Candidate]) -> String {
    let entries: Vec<String> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| {
            format!(
                "**[{}]** [{}](/navigate-experiences#{}): {}",
                i + 1,
                c.experience.title,
                c.experience.id,
                c.experience.content
            )
        })
        .collect();
    format!("{answer}\n\n**References:**\n{}", entries.join("\n\n"))
}
