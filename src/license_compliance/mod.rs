/// License compliance domain layer
///
/// Pure business logic for evaluating SBOM license declarations against
/// caller-supplied allow/deny policies. Nothing in this layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
