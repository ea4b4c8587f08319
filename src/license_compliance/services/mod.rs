mod expression_parser;
mod license_collector;
mod policy_index;
mod policy_resolver;

pub use expression_parser::{parse, tokenize};
pub use license_collector::{
    LicenseCollector, LicenseInventory, LicenseSummaryRow, RejectedComponent,
};
pub use policy_index::PolicyIndex;
pub use policy_resolver::PolicyResolver;
