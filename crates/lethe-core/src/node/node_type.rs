use serde::{Deserialize, Serialize};

use super::category::ContentCategory;

/// Broader node typing used by the storage and retrieval layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Person,
    Concept,
    Episode,
    Task,
    Event,
    Document,
    Note,
}

/// Map a content category onto the node-typing scheme used elsewhere.
pub fn map_content_category_to_node_type(category: ContentCategory) -> NodeType {
    match category {
        ContentCategory::Identity => NodeType::Person,
        ContentCategory::Academic => NodeType::Concept,
        ContentCategory::Conversation => NodeType::Episode,
        ContentCategory::Work => NodeType::Task,
        ContentCategory::Temporal => NodeType::Event,
        ContentCategory::Document => NodeType::Document,
        ContentCategory::General => NodeType::Note,
    }
}

impl From<ContentCategory> for NodeType {
    fn from(category: ContentCategory) -> Self {
        map_content_category_to_node_type(category)
    }
}
