mod decay_engine;
mod node_store;

pub use decay_engine::IDecayEngine;
pub use node_store::{DetachedNodeStore, INodeStore};
