//! The concrete node kinds making up the explorer tree.
//!
//! Shape: [`RegionNodeCollection`] → [`RegionNode`] (fixed two children) →
//! [`CloudFormationGroupNode`] → [`StackNode`] → [`FunctionNode`], and
//! [`StandaloneFunctionGroupNode`] → [`FunctionNode`]. Leaves also include
//! [`PlaceholderNode`] for empty groups and [`ErrorNode`] for contained
//! fetch failures.

pub mod cloudformation;
pub mod function;
pub mod placeholder;
pub mod region;
pub mod standalone;

pub use cloudformation::{CloudFormationGroupNode, StackNode};
pub use function::FunctionNode;
pub use placeholder::{ErrorNode, PlaceholderNode};
pub use region::{RegionNode, RegionNodeCollection};
pub use standalone::StandaloneFunctionGroupNode;
