use std::path::Path;
use sbom_inspect::prelude::*;

/// Mock PolicyConfigReader returning a fixed configuration
pub struct MockPolicyConfigReader {
    pub config: LicenseComplianceConfig,
    pub should_fail: bool,
}

impl MockPolicyConfigReader {
    pub fn new(policies: Vec<LicensePolicy>) -> Self {
        Self {
            config: LicenseComplianceConfig::new(policies),
            should_fail: false,
        }
    }

    pub fn with_annotation(mut self, key: &str, text: &str) -> Self {
        self.config
            .annotations
            .insert(key.to_string(), text.to_string());
        self
    }

    pub fn with_failure() -> Self {
        Self {
            config: LicenseComplianceConfig::default(),
            should_fail: true,
        }
    }
}

impl PolicyConfigReader for MockPolicyConfigReader {
    fn read_policy_config(&self, _policy_path: &Path) -> Result<LicenseComplianceConfig> {
        if self.should_fail {
            anyhow::bail!("Mock policy config read failure");
        }
        Ok(self.config.clone())
    }
}
