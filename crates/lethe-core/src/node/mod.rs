pub mod category;
pub mod input;
pub mod lifecycle_state;
pub mod neural_state;
pub mod node_type;

pub use category::{CategoryParams, ContentCategory};
pub use input::NodeDecayInput;
pub use lifecycle_state::ForgettingLifecycleState;
pub use neural_state::NeuralState;
pub use node_type::{map_content_category_to_node_type, NodeType};
