/// Report configuration - fixed, immutable after construction
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub item_type: &'static str,
    pub id_prefix: &'static str,
    pub items_path: &'static str,
    pub name_width: usize,
    pub class_width: usize,
    pub accuracy_width: usize,
    pub separator_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            item_type: "Thrown",
            id_prefix: "crpg_",
            items_path: "data/items.json",
            name_width: 40,
            class_width: 15,
            accuracy_width: 8,
            separator_width: 65,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item with this type and id belongs in the report
    pub fn accepts(&self, item_type: Option<&str>, id: &str) -> bool {
        item_type == Some(self.item_type) && id.starts_with(self.id_prefix)
    }
}
