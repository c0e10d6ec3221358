use report_kit_core::Category;

/// Tags that mark development and operations work
const DEV_TAGS: &[&str] = &["dev", "openclaw", "config", "telegram", "session"];

/// Tags from travel and activity logs
const LOG_TAGS: &[&str] = &["logs", "travel", "itinerary", "singapore"];

/// Tags from research and summary write-ups
const RESEARCH_TAGS: &[&str] = &["summary", "eopla", "startup", "marketing"];

/// Map a page's tags to its category label.
///
/// First matching set wins; matching is exact and case-sensitive. The log
/// and research sets both land on `Analysis` for now but stay separate
/// branches so either can get its own label without reshuffling the
/// precedence.
#[allow(clippy::if_same_then_else)]
pub fn classify(tags: &[String]) -> Category {
    let has_any = |set: &[&str]| tags.iter().any(|t| set.contains(&t.as_str()));

    if has_any(DEV_TAGS) {
        Category::Development
    } else if has_any(LOG_TAGS) {
        Category::Analysis
    } else if has_any(RESEARCH_TAGS) {
        Category::Analysis
    } else {
        Category::Analysis
    }
}
