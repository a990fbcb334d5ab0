pub mod reader;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    // 1-based position in the input
    pub index: usize,
    pub entries: Vec<String>,
}

impl TestCase {
    pub fn distinct(&self) -> usize {
        crate::utils::count_distinct(&self.entries)
    }
}
