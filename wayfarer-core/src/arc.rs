//! Directed, weighted arcs between graph nodes.

use std::fmt;

use thiserror::Error;

use crate::Node;

/// Scalar cost of traversing an arc or path.
///
/// Unreachable pairs are represented by [`f64::INFINITY`].
pub type Cost = f64;

/// Errors returned by [`Arc::new`].
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ArcError {
    /// The supplied cost was below zero.
    #[error("arc {from} -> {to} has negative cost {cost}")]
    NegativeCost { from: u64, to: u64, cost: Cost },
    /// The supplied cost was NaN or infinite.
    #[error("arc {from} -> {to} has non-finite cost {cost}")]
    NonFiniteCost { from: u64, to: u64, cost: Cost },
}

/// A directed edge with a non-negative cost and an optional action label.
///
/// Arcs are validated on construction; an arc with a negative or non-finite
/// cost cannot exist.
///
/// # Examples
/// ```
/// use wayfarer_core::{Arc, ArcError, Node};
///
/// let a = Node::unplaced(1);
/// let b = Node::unplaced(2);
/// let arc = Arc::new(a, b, 4.5).expect("valid arc");
/// assert_eq!(arc.cost(), 4.5);
///
/// let err = Arc::new(a, b, -1.0).unwrap_err();
/// assert!(matches!(err, ArcError::NegativeCost { .. }));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Arc {
    from: Node,
    to: Node,
    cost: Cost,
    action: Option<String>,
}

impl Arc {
    /// Validate and construct an unlabelled arc.
    pub fn new(from: Node, to: Node, cost: Cost) -> Result<Self, ArcError> {
        if !cost.is_finite() {
            return Err(ArcError::NonFiniteCost {
                from: from.id,
                to: to.id,
                cost,
            });
        }
        if cost < 0.0 {
            return Err(ArcError::NegativeCost {
                from: from.id,
                to: to.id,
                cost,
            });
        }
        Ok(Self {
            from,
            to,
            cost,
            action: None,
        })
    }

    /// Validate and construct an arc carrying an action label.
    pub fn with_action(
        from: Node,
        to: Node,
        cost: Cost,
        action: impl Into<String>,
    ) -> Result<Self, ArcError> {
        let mut arc = Self::new(from, to, cost)?;
        arc.action = Some(action.into());
        Ok(arc)
    }

    pub const fn from_node(&self) -> Node {
        self.from
    }

    pub const fn to_node(&self) -> Node {
        self.to
    }

    pub const fn cost(&self) -> Cost {
        self.cost
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }
}

impl fmt::Display for Arc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            Some(action) => write!(f, "{} --{action}--> {}", self.from, self.to),
            None => write!(f, "{} --> {}", self.from, self.to),
        }
    }
}
