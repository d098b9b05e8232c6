/// Ids produced by earlier cases and consumed by later ones and by cleanup.
///
/// `None` means the producing step never completed; dependents skip.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TestContext {
    pub region_id: Option<String>,
    pub timeline_id: Option<String>,
}
