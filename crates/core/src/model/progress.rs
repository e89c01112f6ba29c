/// Aggregated study-progress counts over the active range, useful for UI.
///
/// `learned + review + new` always equals `total`; `bookmarked` is an
/// independent overlay and may overlap any status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub total: usize,
    pub learned: usize,
    pub review: usize,
    pub new: usize,
    pub bookmarked: usize,
}
