//! Stochastic and constructive graph generators
//!
//! Every generator is a pure function of its parameters and an explicit
//! random source: it builds an arc list, checks the model's invariants, and
//! assembles a [`crate::CsrGraph`]. Nothing is shared between calls.

pub mod attachment;
pub mod bernoulli;
pub mod chung_lu;
pub mod duplication;
pub mod havel_hakimi;

pub use attachment::{
    generalized_preferential_attachment, preferential_attachment, GeneralizedAttachment,
    SelfLoops,
};
pub use bernoulli::{erdos_renyi, erdos_renyi_average_degree};
pub use chung_lu::{chung_lu, chung_lu_signed};
pub use duplication::partial_duplication;
pub use havel_hakimi::{havel_hakimi, is_graphical};
