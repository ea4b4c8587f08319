/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod license_list_request;
mod license_list_response;
mod policy_set;
mod report_format;

pub use license_list_request::LicenseListRequest;
pub use license_list_response::{LicenseListResponse, LicenseListing};
pub use policy_set::PolicySet;
pub use report_format::ReportFormat;
