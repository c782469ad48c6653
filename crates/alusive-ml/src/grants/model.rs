//! Trained grant classifier boundary and the tree-ensemble artifact used in production.
//!
//! The random forest is exported from the training environment as JSON, one entry per tree
//! holding the parallel `children_left` / `children_right` / `feature` / `threshold` / `value`
//! arrays of the fitted estimator. Leaves are marked with a negative left child.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

/// Read-only classifier consulted by the grant pipeline.
pub trait GrantClassifier: Send + Sync {
    /// Width of the feature row the model was trained on.
    fn n_features(&self) -> usize;

    /// Class labels in the order used by [`GrantClassifier::predict_proba`].
    fn classes(&self) -> &[i64];

    /// Training column names, when the artifact carries them.
    fn feature_names(&self) -> Option<&[String]> {
        None
    }

    /// Probability of each class for a single row.
    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ModelError>;

    /// Most probable class label; the first class wins ties.
    fn predict(&self, features: &[f64]) -> Result<i64, ModelError> {
        let probabilities = self.predict_proba(features)?;
        self.class_for(&probabilities)
    }

    /// Label of the most probable entry in a distribution from
    /// [`GrantClassifier::predict_proba`]; the first class wins ties.
    fn class_for(&self, probabilities: &[f64]) -> Result<i64, ModelError> {
        let mut best: Option<(usize, f64)> = None;
        for (index, probability) in probabilities.iter().copied().enumerate() {
            match best {
                Some((_, current)) if probability <= current => {}
                _ => best = Some((index, probability)),
            }
        }

        let (index, _) = best.ok_or(ModelError::EmptyDistribution)?;
        self.classes()
            .get(index)
            .copied()
            .ok_or(ModelError::UnknownClassIndex(index))
    }
}

/// Failure while scoring a row.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelError {
    #[error("feature row has {actual} values but the model expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },
    #[error("model returned an empty probability distribution")]
    EmptyDistribution,
    #[error("model produced class index {0} with no matching label")]
    UnknownClassIndex(usize),
}

/// Failure while loading or validating a model artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelLoadError {
    #[error("unable to read model artifact {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("model artifact is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// Random-forest classifier averaging per-tree class distributions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForestModel {
    n_features: usize,
    classes: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    feature_names: Option<Vec<String>>,
    trees: Vec<DecisionTree>,
}

/// Single fitted tree stored as parallel node arrays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub children_left: Vec<i64>,
    pub children_right: Vec<i64>,
    pub feature: Vec<i64>,
    pub threshold: Vec<f64>,
    /// Per-node class weights; only leaf rows are read at prediction time.
    pub value: Vec<Vec<f64>>,
}

impl ForestModel {
    pub fn new(
        n_features: usize,
        classes: Vec<i64>,
        feature_names: Option<Vec<String>>,
        trees: Vec<DecisionTree>,
    ) -> Result<Self, ModelLoadError> {
        let model = Self {
            n_features,
            classes,
            feature_names,
            trees,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let model = Self::from_reader(BufReader::new(file))?;

        info!(
            path = %path.display(),
            trees = model.trees.len(),
            classes = model.classes.len(),
            n_features = model.n_features,
            "loaded grant model"
        );
        Ok(model)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ModelLoadError> {
        let model: ForestModel = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    pub fn tree_count(&self) -> usize {
        self.trees.len()
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        if self.n_features == 0 {
            return Err(invalid("n_features must be positive"));
        }
        if self.classes.is_empty() {
            return Err(invalid("at least one class label is required"));
        }
        if self.trees.is_empty() {
            return Err(invalid("at least one tree is required"));
        }
        if let Some(names) = &self.feature_names {
            if names.len() != self.n_features {
                return Err(invalid(format!(
                    "{} feature names supplied for {} features",
                    names.len(),
                    self.n_features
                )));
            }
        }

        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(self.n_features, self.classes.len())
                .map_err(|reason| invalid(format!("tree {index}: {reason}")))?;
        }

        Ok(())
    }
}

impl GrantClassifier for ForestModel {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn classes(&self) -> &[i64] {
        &self.classes
    }

    fn feature_names(&self) -> Option<&[String]> {
        self.feature_names.as_deref()
    }

    fn predict_proba(&self, features: &[f64]) -> Result<Vec<f64>, ModelError> {
        if features.len() != self.n_features {
            return Err(ModelError::DimensionMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        let mut totals = vec![0.0; self.classes.len()];
        for tree in &self.trees {
            let leaf = &tree.value[tree.leaf_for(features)];
            let weight: f64 = leaf.iter().sum();
            for (total, count) in totals.iter_mut().zip(leaf) {
                *total += count / weight;
            }
        }

        let tree_count = self.trees.len() as f64;
        for total in &mut totals {
            *total /= tree_count;
        }
        Ok(totals)
    }
}

impl DecisionTree {
    /// Index of the leaf reached by `features`.
    ///
    /// Feature values are rounded to single precision and compared against the double
    /// precision threshold. A non-finite value never satisfies `<=` and follows the right branch.
    fn leaf_for(&self, features: &[f64]) -> usize {
        let mut node = 0usize;
        loop {
            let left = self.children_left[node];
            if left < 0 {
                return node;
            }
            let value = f64::from(features[self.feature[node] as usize] as f32);
            node = if value <= self.threshold[node] {
                left as usize
            } else {
                self.children_right[node] as usize
            };
        }
    }

    fn validate(&self, n_features: usize, n_classes: usize) -> Result<(), String> {
        let nodes = self.children_left.len();
        if nodes == 0 {
            return Err("tree has no nodes".to_string());
        }
        if self.children_right.len() != nodes
            || self.feature.len() != nodes
            || self.threshold.len() != nodes
            || self.value.len() != nodes
        {
            return Err("node arrays have different lengths".to_string());
        }

        for node in 0..nodes {
            let left = self.children_left[node];
            let right = self.children_right[node];

            if left < 0 {
                let weights = &self.value[node];
                if weights.len() != n_classes {
                    return Err(format!(
                        "leaf {node} has {} class weights, expected {n_classes}",
                        weights.len()
                    ));
                }
                let total: f64 = weights.iter().sum();
                if weights.iter().any(|w| !w.is_finite() || *w < 0.0) || total <= 0.0 {
                    return Err(format!("leaf {node} has no usable class weights"));
                }
                continue;
            }

            // Children always follow their parent, which also rules out cycles.
            for child in [left, right] {
                if child <= node as i64 || child >= nodes as i64 {
                    return Err(format!("node {node} has out-of-range child {child}"));
                }
            }
            let feature = self.feature[node];
            if feature < 0 || feature >= n_features as i64 {
                return Err(format!("node {node} splits on unknown feature {feature}"));
            }
        }

        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> ModelLoadError {
    ModelLoadError::Invalid(reason.into())
}
