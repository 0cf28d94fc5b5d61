//! Tree ensemble classifier - decision tree / random forest inference.
//!
//! Trees are stored as flat node arrays exported from the training pipeline.
//! A sample goes to the left child when `code <= threshold`. Each tree votes
//! with its leaf's normalized class weights; the ensemble averages the votes
//! and returns the class with the highest mean probability (lowest code on
//! ties).

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::model::FeatureVector;
use crate::ports::{Classifier, ModelInferenceError};

/// One node of a flattened decision tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: Vec<f64>,
    },
}

/// A single decision tree; node 0 is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

/// Structural problems found while checking a tree against the registry.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TreeDefinitionError {
    #[error("Ensemble has no trees")]
    NoTrees,

    #[error("Tree {tree} has no nodes")]
    EmptyTree { tree: usize },

    #[error("Tree {tree} node {node} splits on feature {feature}, but only {n_features} features exist")]
    FeatureOutOfRange {
        tree: usize,
        node: usize,
        feature: usize,
        n_features: usize,
    },

    #[error("Tree {tree} node {node} points to child {child}, which is not a later node")]
    BadChild {
        tree: usize,
        node: usize,
        child: usize,
    },

    #[error("Tree {tree} node {node} has {actual} class weights, expected {expected}")]
    LeafWidth {
        tree: usize,
        node: usize,
        expected: usize,
        actual: usize,
    },

    #[error("Tree {tree} node {node} has no positive class weight")]
    EmptyLeaf { tree: usize, node: usize },
}

/// Validated ensemble of decision trees.
#[derive(Debug, Clone)]
pub struct TreeEnsemble {
    trees: Vec<DecisionTree>,
    n_features: usize,
    n_classes: usize,
}

impl TreeEnsemble {
    /// Checks every tree: features in range, children pointing forward (so
    /// traversal always terminates) and leaves sized to the target classes.
    pub fn new(
        trees: Vec<DecisionTree>,
        n_features: usize,
        n_classes: usize,
    ) -> Result<Self, TreeDefinitionError> {
        if trees.is_empty() {
            return Err(TreeDefinitionError::NoTrees);
        }

        for (t, tree) in trees.iter().enumerate() {
            if tree.nodes.is_empty() {
                return Err(TreeDefinitionError::EmptyTree { tree: t });
            }
            for (n, node) in tree.nodes.iter().enumerate() {
                match node {
                    TreeNode::Split {
                        feature,
                        left,
                        right,
                        ..
                    } => {
                        if *feature >= n_features {
                            return Err(TreeDefinitionError::FeatureOutOfRange {
                                tree: t,
                                node: n,
                                feature: *feature,
                                n_features,
                            });
                        }
                        for child in [*left, *right] {
                            if child <= n || child >= tree.nodes.len() {
                                return Err(TreeDefinitionError::BadChild {
                                    tree: t,
                                    node: n,
                                    child,
                                });
                            }
                        }
                    }
                    TreeNode::Leaf { value } => {
                        if value.len() != n_classes {
                            return Err(TreeDefinitionError::LeafWidth {
                                tree: t,
                                node: n,
                                expected: n_classes,
                                actual: value.len(),
                            });
                        }
                        if value.iter().sum::<f64>() <= 0.0 {
                            return Err(TreeDefinitionError::EmptyLeaf { tree: t, node: n });
                        }
                    }
                }
            }
        }

        Ok(Self {
            trees,
            n_features,
            n_classes,
        })
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    /// Mean class probabilities for one sample.
    pub fn predict_proba(&self, codes: &[u32]) -> Result<Vec<f64>, ModelInferenceError> {
        if codes.len() != self.n_features {
            return Err(ModelInferenceError::FeatureCount {
                expected: self.n_features,
                actual: codes.len(),
            });
        }

        let mut proba = vec![0.0; self.n_classes];
        for tree in &self.trees {
            let leaf = Self::leaf_for(tree, codes)?;
            let total: f64 = leaf.iter().sum();
            for (p, weight) in proba.iter_mut().zip(leaf) {
                *p += weight / total;
            }
        }
        let count = self.trees.len() as f64;
        proba.iter_mut().for_each(|p| *p /= count);
        Ok(proba)
    }

    fn leaf_for<'a>(tree: &'a DecisionTree, codes: &[u32]) -> Result<&'a [f64], ModelInferenceError> {
        let mut idx = 0;
        loop {
            match tree.nodes.get(idx) {
                Some(TreeNode::Leaf { value }) => return Ok(value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let x = codes
                        .get(*feature)
                        .copied()
                        .ok_or_else(|| {
                            ModelInferenceError::Traversal(format!("feature {} missing", feature))
                        })?;
                    idx = if f64::from(x) <= *threshold { *left } else { *right };
                }
                None => {
                    return Err(ModelInferenceError::Traversal(format!(
                        "node {} does not exist",
                        idx
                    )))
                }
            }
        }
    }
}

impl Classifier for TreeEnsemble {
    fn predict(&self, features: &FeatureVector) -> Result<u32, ModelInferenceError> {
        let proba = self.predict_proba(features.codes())?;
        let mut best: Option<(usize, f64)> = None;
        for (class, p) in proba.iter().enumerate() {
            if best.map_or(true, |(_, bp)| *p > bp) {
                best = Some((class, *p));
            }
        }
        best.map(|(class, _)| class as u32)
            .ok_or(ModelInferenceError::NoPrediction)
    }
}
