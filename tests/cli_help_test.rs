#[cfg(test)]
mod cli_help_tests {
    use assert_cmd::prelude::*;
    use predicates::prelude::*;
    use std::process::Command;

    const NOUNS: [&str; 9] = [
        "qos",
        "qos-queue",
        "qos-filter",
        "es-acl",
        "es-acl-rule",
        "l7policy",
        "l7rule",
        "portmapping",
        "pptp-credential",
    ];

    fn eayun_neutron() -> Command {
        let mut cmd = Command::cargo_bin("eayun-neutron").unwrap();
        cmd.env_remove("OS_URL")
            .env_remove("OS_TOKEN")
            .env_remove("EAYUN_NEUTRON_FORMAT");
        cmd
    }

    #[test]
    fn test_cli_help_output() {
        let assert_result = eayun_neutron().arg("--help").assert().success();
        let output = assert_result.get_output();
        let help_output = String::from_utf8_lossy(&output.stdout);

        assert!(help_output.contains("Usage:"));
        assert!(help_output.contains("Options:"));
        assert!(help_output.contains("Commands:"));

        for noun in NOUNS {
            assert!(help_output.contains(noun), "missing {}", noun);
        }
        assert!(help_output.contains("config"));

        assert!(help_output.contains("--os-url"));
        assert!(help_output.contains("--os-token"));
        assert!(help_output.contains("-h, --help"));
        assert!(help_output.contains("-V, --version"));
        assert!(help_output.contains("eayun-neutron"));
    }

    #[test]
    fn test_cli_subcommand_help_outputs() {
        for noun in NOUNS {
            let assert_result = eayun_neutron().arg(noun).arg("--help").assert().success();
            let output = assert_result.get_output();
            let help_output = String::from_utf8_lossy(&output.stdout);

            for operation in ["list", "show", "create", "update", "delete"] {
                assert!(
                    help_output.contains(operation),
                    "{} is missing {}",
                    noun,
                    operation
                );
            }

            match noun {
                "qos" => assert!(help_output.contains("unbind")),
                "qos-filter" => assert!(help_output.contains("unattach")),
                "es-acl" => {
                    assert!(help_output.contains("bind-subnets"));
                    assert!(help_output.contains("unbind-subnets"));
                }
                "l7rule" => {
                    assert!(help_output.contains("associate"));
                    assert!(help_output.contains("disassociate"));
                }
                _ => {}
            }
        }
    }

    #[test]
    fn test_create_help_shows_hyphenated_flags_only() {
        eayun_neutron()
            .args(["qos", "create", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("--target-type"))
            .stdout(predicate::str::contains("DEFAULT_RATE"))
            .stdout(predicate::str::contains("--target_type").not());
    }

    #[test]
    fn test_l7rule_associate_usage() {
        eayun_neutron()
            .args(["l7rule", "associate", "--help"])
            .assert()
            .success()
            .stdout(predicate::str::contains("<L7RULE_ID> <L7POLICY>"));
    }

    #[test]
    fn test_missing_positional_is_a_usage_error() {
        eayun_neutron()
            .args(["qos", "create", "ingress"])
            .assert()
            .failure()
            .code(2)
            .stderr(predicate::str::contains("<RATE>"));
    }

    #[test]
    fn test_invalid_choice_is_rejected() {
        eayun_neutron()
            .args(["l7policy", "create", "--priority", "1", "--action", "drop"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("invalid value 'drop'"));
    }

    #[test]
    fn test_missing_endpoint_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        eayun_neutron()
            .env("EAYUN_NEUTRON_CONFIG_DIR", dir.path())
            .args(["qos", "list"])
            .assert()
            .failure()
            .code(78)
            .stderr(predicate::str::contains("endpoint_url"));
    }

    #[test]
    fn test_config_path_honours_directory_override() {
        let dir = tempfile::tempdir().unwrap();
        eayun_neutron()
            .env("EAYUN_NEUTRON_CONFIG_DIR", dir.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.yml"))
            .stdout(predicate::str::contains(dir.path().to_string_lossy().to_string()));
    }

    #[test]
    fn test_corrupt_configuration_can_still_be_located_and_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("config.yml");
        std::fs::write(&file, "endpoint_url: [unclosed\n").unwrap();

        eayun_neutron()
            .env("EAYUN_NEUTRON_CONFIG_DIR", dir.path())
            .args(["config", "path"])
            .assert()
            .success()
            .stdout(predicate::str::contains("config.yml"));

        eayun_neutron()
            .env("EAYUN_NEUTRON_CONFIG_DIR", dir.path())
            .args(["config", "set", "--endpoint-url", "http://controller:9696"])
            .assert()
            .success()
            .stderr(predicate::str::contains("Warning:"));

        let repaired = std::fs::read_to_string(&file).unwrap();
        assert!(repaired.contains("http://controller:9696"));

        eayun_neutron()
            .env("EAYUN_NEUTRON_CONFIG_DIR", dir.path())
            .args(["config", "show", "--format", "yaml"])
            .assert()
            .success()
            .stdout(predicate::str::contains("controller:9696"));
    }

    #[test]
    fn test_corrupt_configuration_fails_resource_commands() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.yml"), "endpoint_url: [unclosed\n").unwrap();

        eayun_neutron()
            .env("EAYUN_NEUTRON_CONFIG_DIR", dir.path())
            .args(["qos", "list"])
            .assert()
            .failure()
            .code(78);
    }
}
