/// End-to-end tests for the CLI
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const BOM: &str = "tests/fixtures/bom.json";
const POLICIES: &str = "tests/fixtures/license.json";
const CONFLICTING_POLICIES: &str = "tests/fixtures/conflicting_license.json";

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Copies the fixtures a config-driven run needs into `dir`
fn stage_fixtures(dir: &Path) {
    fs::copy(fixture("bom.json"), dir.join("bom.json")).unwrap();
    fs::copy(fixture("license.json"), dir.join("license.json")).unwrap();
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: Success - summary listing
    #[test]
    fn test_exit_code_success() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", BOM, "--summary", "--policy-file", POLICIES])
            .assert()
            .code(0);
    }

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("sbom-inspect").arg("--help").assert().code(0);
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("sbom-inspect")
            .arg("--version")
            .assert()
            .code(0)
            .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    }

    /// Exit code 1: Application error - SBOM document does not exist
    #[test]
    fn test_exit_code_application_error_missing_document() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", "/nonexistent/bom.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("SBOM document not found"));
    }

    /// Exit code 1: Application error - policy file does not exist
    #[test]
    fn test_exit_code_application_error_missing_policy_file() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "policy", "--policy-file", "/nonexistent/license.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("License policy file not found"));
    }

    /// Exit code 1: Application error - document has no components array
    #[test]
    fn test_exit_code_application_error_no_components() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", "tests/fixtures/no_components.json"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("No components found"));
    }

    /// Exit code 1: Application error - empty policy list
    #[test]
    fn test_exit_code_application_error_empty_policies() {
        cargo_bin_cmd!("sbom-inspect")
            .args([
                "license",
                "policy",
                "--policy-file",
                "tests/fixtures/empty_license.json",
            ])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("License policy is empty"));
    }

    /// Exit code 2: Validation error - family usage conflict
    #[test]
    fn test_exit_code_validation_error_family_conflict() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "policy", "--policy-file", CONFLICTING_POLICIES])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("conflicts with the `deny` policy"))
            .stderr(predicate::str::contains("Caused by:"));
    }

    /// Exit code 2: Validation error - also raised by a summary listing
    #[test]
    fn test_exit_code_validation_error_on_summary() {
        cargo_bin_cmd!("sbom-inspect")
            .args([
                "license",
                "list",
                "-i",
                BOM,
                "--summary",
                "--policy-file",
                CONFLICTING_POLICIES,
            ])
            .assert()
            .code(2);
    }

    /// Exit code 3: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("sbom-inspect")
            .arg("--invalid-option")
            .assert()
            .code(3);
    }

    /// Exit code 3: Invalid format value
    #[test]
    fn test_exit_code_invalid_format() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "policy", "-f", "invalid_format"])
            .assert()
            .code(3);
    }

    /// Exit code 3: Missing required input file
    #[test]
    fn test_exit_code_missing_input_file() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list"])
            .assert()
            .code(3);
    }

    /// Exit code 3: --quiet conflicts with --debug
    #[test]
    fn test_exit_code_conflicting_verbosity() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["-q", "-d", "license", "policy"])
            .assert()
            .code(3);
    }
}

mod license_list_tests {
    use super::*;

    #[test]
    fn test_list_without_summary_writes_raw_choices() {
        let output = cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", BOM])
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let choices = value.as_array().unwrap();
        // The `broken` component is rejected as a whole.
        assert_eq!(choices.len(), 4);
        assert_eq!(choices[0]["expression"], "MIT OR Apache-2.0");
        assert_eq!(choices[1]["license"]["id"], "GPL-3.0-only");
        assert_eq!(choices[2]["license"]["name"], "BSD License");
    }

    #[test]
    fn test_list_without_summary_ignores_policy_file() {
        // Raw listing never reads policies, so a broken policy file is harmless.
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", BOM, "--policy-file", CONFLICTING_POLICIES])
            .assert()
            .code(0);
    }

    #[test]
    fn test_list_reports_rejected_component() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", BOM])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Skipped component 'broken'"));
    }

    #[test]
    fn test_summary_txt() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", BOM, "--summary", "--policy-file", POLICIES])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("Policy"))
            .stdout(predicate::str::contains("Package URL (pURL)"))
            .stdout(predicate::str::is_match(r"allow\s+exp\s+MIT OR Apache-2.0\s+serde").unwrap())
            .stdout(predicate::str::is_match(r"deny\s+id\s+GPL-3.0-only\s+readline").unwrap())
            .stdout(predicate::str::is_match(r"allow\s+name\s+BSD License\s+libbsd").unwrap())
            .stdout(
                predicate::str::is_match(r"UNMATCHED\s+id\s+LicenseRef-Proprietary\s+mystery")
                    .unwrap(),
            );
    }

    #[test]
    fn test_summary_csv() {
        cargo_bin_cmd!("sbom-inspect")
            .args([
                "license",
                "list",
                "-i",
                BOM,
                "--summary",
                "-f",
                "csv",
                "--policy-file",
                POLICIES,
            ])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with(
                "Policy,Type,ID/Name/Expression,Component(s),Package URL (pURL)\n",
            ))
            .stdout(predicate::str::contains(
                "deny,id,GPL-3.0-only,readline,pkg:generic/readline@8.2\n",
            ));
    }

    #[test]
    fn test_summary_json() {
        let output = cargo_bin_cmd!("sbom-inspect")
            .args([
                "license",
                "list",
                "-i",
                BOM,
                "--summary",
                "-f",
                "json",
                "--policy-file",
                POLICIES,
            ])
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[3]["policy"], "UNMATCHED");
        assert_eq!(rows[3]["component"], "mystery");
        assert_eq!(rows[2]["type"], "name");
    }

    #[test]
    fn test_summary_to_output_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("licenses.txt");

        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i", BOM, "--summary", "--policy-file", POLICIES])
            .arg("-o")
            .arg(&output_path)
            .assert()
            .code(0)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("Output complete"));

        let content = fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("UNMATCHED"));
    }

    /// Writes a BOM where `deep` nests its expression 20,000 levels deep
    fn write_deeply_nested_bom(dir: &Path) -> PathBuf {
        let deep = format!("{}MIT{}", "(".repeat(20_000), ")".repeat(20_000));
        let bom = serde_json::json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.4",
            "version": 1,
            "components": [
                {
                    "name": "serde",
                    "purl": "pkg:cargo/serde@1.0.200",
                    "licenses": [{ "expression": "MIT OR Apache-2.0" }]
                },
                {
                    "name": "deep",
                    "purl": "pkg:generic/deep@1.0.0",
                    "licenses": [{ "expression": deep }]
                },
                {
                    "name": "readline",
                    "purl": "pkg:generic/readline@8.2",
                    "licenses": [{ "license": { "id": "GPL-3.0-only" } }]
                }
            ]
        });
        let path = dir.join("deep.json");
        fs::write(&path, bom.to_string()).unwrap();
        path
    }

    #[test]
    fn test_summary_skips_deeply_nested_expression() {
        let temp_dir = TempDir::new().unwrap();
        let bom = write_deeply_nested_bom(temp_dir.path());

        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "--summary", "--policy-file", POLICIES, "-i"])
            .arg(&bom)
            .assert()
            .code(0)
            .stdout(predicate::str::is_match(r"allow\s+exp\s+MIT OR Apache-2.0\s+serde").unwrap())
            .stdout(predicate::str::is_match(r"deny\s+id\s+GPL-3.0-only\s+readline").unwrap())
            .stdout(predicate::str::contains("deep").not())
            .stderr(predicate::str::contains("Skipped component 'deep'"))
            .stderr(predicate::str::contains("20000 levels deep"));
    }

    #[test]
    fn test_list_skips_deeply_nested_expression() {
        let temp_dir = TempDir::new().unwrap();
        let bom = write_deeply_nested_bom(temp_dir.path());

        let output = cargo_bin_cmd!("sbom-inspect")
            .args(["license", "list", "-i"])
            .arg(&bom)
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Skipped component 'deep'"))
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let choices = value.as_array().unwrap();
        assert_eq!(choices.len(), 2);
        assert_eq!(choices[0]["expression"], "MIT OR Apache-2.0");
        assert_eq!(choices[1]["license"]["id"], "GPL-3.0-only");
    }

    #[test]
    fn test_quiet_suppresses_progress() {
        cargo_bin_cmd!("sbom-inspect")
            .args([
                "-q",
                "license",
                "list",
                "-i",
                BOM,
                "--summary",
                "--policy-file",
                POLICIES,
            ])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Loading").not());
    }
}

mod license_policy_tests {
    use super::*;

    #[test]
    fn test_policy_txt() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "policy", "--policy-file", POLICIES])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("Policy"))
            .stdout(predicate::str::contains("SPDX ID"))
            .stdout(predicate::str::is_match(r"deny\s+GPL\s+GPL-3.0-only").unwrap());
    }

    #[test]
    fn test_policy_csv_keeps_full_values() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["license", "policy", "-f", "csv", "--policy-file", POLICIES])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with(
                "Policy,Family,SPDX ID,Name,Annotations,Notes\n",
            ))
            .stdout(predicate::str::contains(
                "deny,GPL,GPL-3.0-only,GNU General Public License v3.0 only,LEGAL,\"Copyleft, Requires legal review\"\n",
            ));
    }

    #[test]
    fn test_policy_json() {
        let output = cargo_bin_cmd!("sbom-inspect")
            .args(["license", "policy", "-f", "json", "--policy-file", POLICIES])
            .assert()
            .code(0)
            .get_output()
            .stdout
            .clone();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0]["usagePolicy"], "allow");
        assert_eq!(rows[3]["family"], "BSD");
    }
}

mod config_file_tests {
    use super::*;

    #[test]
    fn test_default_policy_file_in_working_directory() {
        let temp_dir = TempDir::new().unwrap();
        stage_fixtures(temp_dir.path());

        cargo_bin_cmd!("sbom-inspect")
            .current_dir(temp_dir.path())
            .args(["license", "policy"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("GPL-3.0-only"));
    }

    #[test]
    fn test_discovered_config_supplies_defaults() {
        let temp_dir = TempDir::new().unwrap();
        stage_fixtures(temp_dir.path());
        fs::create_dir(temp_dir.path().join("policies")).unwrap();
        fs::rename(
            temp_dir.path().join("license.json"),
            temp_dir.path().join("policies/company.json"),
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("sbom-inspect.config.yml"),
            "policy_file: policies/company.json\nformat: csv\nsummary: true\n",
        )
        .unwrap();

        cargo_bin_cmd!("sbom-inspect")
            .current_dir(temp_dir.path())
            .args(["license", "list", "-i", "bom.json"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("Policy,Type,"));
    }

    #[test]
    fn test_cli_format_overrides_config() {
        let temp_dir = TempDir::new().unwrap();
        stage_fixtures(temp_dir.path());
        fs::write(
            temp_dir.path().join("sbom-inspect.config.yml"),
            "format: csv\n",
        )
        .unwrap();

        cargo_bin_cmd!("sbom-inspect")
            .current_dir(temp_dir.path())
            .args(["license", "policy", "-f", "json"])
            .assert()
            .code(0)
            .stdout(predicate::str::starts_with("["));
    }

    #[test]
    fn test_explicit_config_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("custom.yml");
        fs::write(
            &config_path,
            format!("policy_file: {}\n", fixture("license.json").display()),
        )
        .unwrap();

        cargo_bin_cmd!("sbom-inspect")
            .arg("-c")
            .arg(&config_path)
            .args(["license", "policy", "-f", "csv"])
            .assert()
            .code(0)
            .stdout(predicate::str::contains("MIT,MIT,MIT License"));
    }

    #[test]
    fn test_unknown_config_field_warns() {
        let temp_dir = TempDir::new().unwrap();
        stage_fixtures(temp_dir.path());
        fs::write(
            temp_dir.path().join("sbom-inspect.config.yml"),
            "colour: always\n",
        )
        .unwrap();

        cargo_bin_cmd!("sbom-inspect")
            .current_dir(temp_dir.path())
            .args(["license", "policy"])
            .assert()
            .code(0)
            .stderr(predicate::str::contains("Unknown config field 'colour'"));
    }

    #[test]
    fn test_invalid_config_format_is_application_error() {
        let temp_dir = TempDir::new().unwrap();
        stage_fixtures(temp_dir.path());
        fs::write(
            temp_dir.path().join("sbom-inspect.config.yml"),
            "format: yaml\n",
        )
        .unwrap();

        cargo_bin_cmd!("sbom-inspect")
            .current_dir(temp_dir.path())
            .args(["license", "policy"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Invalid config"));
    }

    #[test]
    fn test_missing_explicit_config_is_application_error() {
        cargo_bin_cmd!("sbom-inspect")
            .args(["-c", "/nonexistent/sbom-inspect.config.yml", "license", "policy"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}
