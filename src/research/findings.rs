// src/research/findings.rs
use super::result::Finding;

/// The canned findings returned for every query. Nothing about the request
/// changes them.
pub fn mock_findings() -> Vec<Finding> {
    vec![
        Finding::new(
            "Tennis Tiebreaker Regulations",
            "The Big 12 Conference employs a specific tiebreaker system in tennis matches. \
             When two players are tied at 6-6 in a set, a tiebreaker game is played to determine \
             the winner of the set. The first player to reach at least 7 points with a margin of \
             2 points wins the tiebreaker.",
            0.95,
            "Big 12 Tennis Rulebook",
        ),
        Finding::new(
            "Match Statistics Analysis",
            "According to recent match statistics, tiebreakers occur in approximately 22% of \
             Big 12 tennis sets. Teams with higher first-serve percentages tend to win 67% of \
             tiebreakers, suggesting the importance of serve performance in these critical moments.",
            0.82,
            "XII-OS Analytics Database",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_fixed_findings() {
        let findings = mock_findings();
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].title, "Tennis Tiebreaker Regulations");
        assert_eq!(findings[0].relevance, 0.95);
        assert_eq!(findings[1].title, "Match Statistics Analysis");
        assert_eq!(findings[1].relevance, 0.82);
        assert_eq!(findings[1].source, "XII-OS Analytics Database");
    }

    #[test]
    fn test_content_is_single_spaced() {
        for finding in mock_findings() {
            assert!(!finding.content.contains("  "), "{}", finding.content);
            assert!(finding.content.ends_with('.'));
        }
        assert!(mock_findings()[0].content.starts_with("The Big 12 Conference employs"));
    }
}
