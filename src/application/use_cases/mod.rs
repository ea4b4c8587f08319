/// Use cases module containing application business logic orchestration
mod list_licenses;
mod list_policies;
mod load_policies;

pub use list_licenses::ListLicensesUseCase;
pub use list_policies::ListPoliciesUseCase;
pub use load_policies::LoadPoliciesUseCase;
