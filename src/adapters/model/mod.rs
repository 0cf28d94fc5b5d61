//! Model adapters
//!
//! Concrete classifier and the artifact loader backing the `Classifier` port.
//!
//! - **TreeEnsemble** - decision tree / random forest inference
//! - **ModelArtifact** - JSON export of encoders, feature order and trees
//! - **ModelBundle** - process-wide singleton installed at startup

mod artifact;
mod bundle;
mod tree_ensemble;

pub use artifact::{ArtifactError, ModelArtifact, ModelDefinition, ModelKind};
pub use bundle::ModelBundle;
pub use tree_ensemble::{DecisionTree, TreeDefinitionError, TreeEnsemble, TreeNode};
