//! Error types for scene construction.

use thiserror::Error;

use crate::node::NodeId;

/// Result type for scene operations.
pub type Result<T> = std::result::Result<T, SceneError>;

/// Errors raised while building or registering a scene.
///
/// Geometry, hit-testing and drawing never fail once a node is registered.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A shape token that is neither `square` nor `circle`.
    #[error("invalid shape kind: {0:?}")]
    InvalidShapeKind(String),

    /// The node's parent chain loops back on itself.
    #[error("ownership chain of {node} contains a cycle")]
    CyclicOwnership { node: NodeId },

    /// The parent chain is longer than the configured bound.
    #[error("ownership chain of {node} is deeper than {limit}")]
    DepthExceeded { node: NodeId, limit: usize },

    /// The id does not name a node in this registry.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// Each node is registered exactly once.
    #[error("{0} is already registered")]
    AlreadyRegistered(NodeId),

    /// Scale must be finite and positive.
    #[error("invalid scale {scale}")]
    InvalidScale { scale: f64 },
}
