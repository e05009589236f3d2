//! awsexplorer - Lazily-refreshing AWS explorer tree
//!
//! This crate is the reconciliation engine behind an AWS resource explorer
//! panel: the user's selected regions at the top, each region holding a
//! CloudFormation group and a standalone-function group, stacks holding the
//! Lambda functions deployed from their templates.
//!
//! Nodes fetch remote state on demand and diff it against their cached child
//! collections in place, so a child node keeps its identity (the same `Arc`)
//! across refreshes whenever its remote key is still present. The host UI
//! correlates selection and expansion state by node identity, which is why
//! the engine never rebuilds an unchanged child.
//!
//! The host supplies its collaborators through
//! [`explorer::ExplorerContext`]: a client factory producing per-region
//! CloudFormation and Lambda clients, an asset resolver for icon paths, and
//! a notifier for user-facing messages. Production implementations backed by
//! the AWS SDK live in [`explorer::aws_client`] and
//! [`explorer::aws_services`]; tests substitute their own.

#![warn(clippy::all, rust_2018_idioms)]

pub mod explorer;
