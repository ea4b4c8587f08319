use super::policy_resolver::PolicyResolver;
use crate::license_compliance::domain::{
    CdxComponent, CdxLicenseChoice, ComponentLicenseRecord, ComponentRef, LicenseChoiceType,
    LicenseDeclaration, PolicyVerdict,
};
use crate::shared::error::DeclarationError;
use indexmap::IndexMap;
use serde::Serialize;

/// A component skipped because one of its license choices was malformed
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedComponent {
    pub component: ComponentRef,
    pub reason: DeclarationError,
}

/// One resolved line of the license summary report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LicenseSummaryRow {
    pub policy: PolicyVerdict,
    #[serde(rename = "type")]
    pub choice_type: LicenseChoiceType,
    pub license: String,
    pub component: String,
    pub purl: String,
}

/// License declarations grouped by their textual key
#[derive(Debug, Clone, Default)]
pub struct LicenseInventory {
    groups: IndexMap<String, Vec<ComponentLicenseRecord>>,
    rejected: Vec<RejectedComponent>,
}

impl LicenseInventory {
    /// Groups keyed by license id, name or raw expression, in first-seen order
    pub fn groups(&self) -> &IndexMap<String, Vec<ComponentLicenseRecord>> {
        &self.groups
    }

    pub fn rejected(&self) -> &[RejectedComponent] {
        &self.rejected
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of license records across all groups
    pub fn record_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Every record in group order
    pub fn records(&self) -> impl Iterator<Item = &ComponentLicenseRecord> {
        self.groups.values().flatten()
    }

    /// The raw license choices in group order
    pub fn license_choices(&self) -> Vec<&CdxLicenseChoice> {
        self.records().map(ComponentLicenseRecord::choice).collect()
    }

    /// Resolves the policy of every record.
    ///
    /// Each record is resolved on its own; identical keys are not cached.
    pub fn summarize(&self, resolver: &PolicyResolver<'_>) -> Vec<LicenseSummaryRow> {
        self.groups
            .iter()
            .flat_map(|(key, records)| {
                records.iter().map(move |record| {
                    let row = LicenseSummaryRow {
                        policy: resolver.resolve(record.declaration()),
                        choice_type: record.choice_type(),
                        license: key.clone(),
                        component: record.component().name.clone(),
                        purl: record.component().purl.clone(),
                    };
                    log::trace!(
                        "{}\t{}\t{}\t{}\t{}",
                        row.policy,
                        row.choice_type,
                        row.license,
                        row.component,
                        row.purl
                    );
                    row
                })
            })
            .collect()
    }
}

/// LicenseCollector - Gathers license declarations from SBOM components
pub struct LicenseCollector;

impl LicenseCollector {
    /// Collects every license choice of `components`.
    ///
    /// A component is all-or-nothing: if any of its choices is malformed, none
    /// of its records are kept and it is listed in
    /// [`LicenseInventory::rejected`] instead. Scanning continues with the
    /// next component.
    pub fn collect(components: &[CdxComponent]) -> LicenseInventory {
        let mut inventory = LicenseInventory::default();

        for component in components {
            match Self::component_records(component) {
                Ok(records) => {
                    for record in records {
                        inventory
                            .groups
                            .entry(record.key().to_string())
                            .or_default()
                            .push(record);
                    }
                }
                Err(reason) => {
                    log::warn!(
                        "{} for component `{}`. Skipping component...",
                        reason,
                        component.name
                    );
                    inventory.rejected.push(RejectedComponent {
                        component: ComponentRef::from(component),
                        reason,
                    });
                }
            }
        }

        log::debug!(
            "Collected {} license record(s) under {} key(s); {} component(s) rejected",
            inventory.record_count(),
            inventory.groups.len(),
            inventory.rejected.len()
        );
        inventory
    }

    fn component_records(
        component: &CdxComponent,
    ) -> Result<Vec<ComponentLicenseRecord>, DeclarationError> {
        let component_ref = ComponentRef::from(component);
        component
            .licenses
            .iter()
            .map(|choice| {
                LicenseDeclaration::from_choice(choice).map(|declaration| {
                    ComponentLicenseRecord::new(declaration, choice.clone(), component_ref.clone())
                })
            })
            .collect()
    }
}
