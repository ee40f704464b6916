use serde::Serialize;

/// Display metadata for a known application page.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PageInfo {
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
}
