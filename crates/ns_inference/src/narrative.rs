use ns_core::SentimentDistribution;

/// Language of the narrative and of its synthesized audio
pub const NARRATIVE_LANGUAGE: &str = "hi";

/// One Hindi sentence stating the overall verdict for `company`.
pub fn narrate(company: &str, distribution: &SentimentDistribution) -> String {
    format!(
        "{} की ताज़ा खबरें ज्यादातर {} हैं।",
        company,
        distribution.verdict().hindi()
    )
}
