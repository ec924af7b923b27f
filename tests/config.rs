// ABOUTME: Integration tests for configuration parsing and resolution.
// ABOUTME: Tests YAML parsing, CI variable handling, and file discovery.

use autocd::config::*;
use autocd::error::Error;
use std::time::Duration;

fn pipeline() -> CiEnvironment {
    CiEnvironment {
        registry: Some("registry.gitlab.example.com".to_string()),
        project_name: Some("Checkout".to_string()),
        project_namespace: Some("Team-X/shop".to_string()),
    }
}

mod parsing {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::from_yaml("").unwrap();
        assert_eq!(config.container_port, 8080);
        assert_eq!(config.service_port, 80);
        assert_eq!(config.termination_grace_period, Duration::from_secs(60));
        assert!(config.publicly_accessible);
        assert_eq!(config.domain, "cloudiety.de");
        assert_eq!(config.image_pull_secret.as_deref(), Some("gitlab-bot"));
        assert_eq!(config.retry, RetryConfig::default());
        assert_eq!(config.on_failure, FailurePolicy::ContinueAndReport);
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
namespace: payments
name: api
image: registry.example.com/payments/api:1.4.0
container_port: 3000
service_port: 8080
termination_grace_period: 2m
publicly_accessible: false
domain: apps.example.com
image_pull_secret: registry-creds
retry:
  max_attempts: 8
  initial_delay: 1s
  max_delay: 30s
  multiplier: 1.5
on_failure: fail-fast
"#;
        let config = Config::from_yaml(yaml).unwrap();
        assert_eq!(config.namespace.unwrap().as_str(), "payments");
        assert_eq!(config.name.unwrap().as_str(), "api");
        assert_eq!(
            config.image.as_deref(),
            Some("registry.example.com/payments/api:1.4.0")
        );
        assert_eq!(config.container_port, 3000);
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.termination_grace_period, Duration::from_secs(120));
        assert!(!config.publicly_accessible);
        assert_eq!(config.domain, "apps.example.com");
        assert_eq!(config.image_pull_secret.as_deref(), Some("registry-creds"));
        assert_eq!(config.retry.max_attempts, 8);
        assert_eq!(config.retry.initial_delay, Duration::from_secs(1));
        assert_eq!(config.retry.max_delay, Duration::from_secs(30));
        assert_eq!(config.retry.multiplier, 1.5);
        assert_eq!(config.on_failure, FailurePolicy::FailFast);
    }

    #[test]
    fn null_pull_secret_disables_it() {
        let config = Config::from_yaml("image_pull_secret: null").unwrap();
        assert!(config.image_pull_secret.is_none());
    }

    #[test]
    fn rejects_invalid_namespace() {
        assert!(Config::from_yaml("namespace: Payments").is_err());
        assert!(Config::from_yaml("namespace: -payments").is_err());
    }

    #[test]
    fn rejects_zero_port() {
        assert!(Config::from_yaml("container_port: 0").is_err());
        assert!(Config::from_yaml("service_port: 0").is_err());
    }

    #[test]
    fn rejects_out_of_range_port() {
        assert!(Config::from_yaml("container_port: 70000").is_err());
    }
}

mod resolve {
    use super::*;

    #[test]
    fn pipeline_identity_drives_names() {
        let spec = Config::default().resolve(&pipeline()).unwrap();
        assert_eq!(spec.namespace.as_str(), "team-x--shop");
        assert_eq!(spec.name.as_str(), "checkout");
        assert_eq!(spec.image, "registry.gitlab.example.com/Team-X/shop/Checkout");
        assert_eq!(spec.host, "checkout-team-x--shop.cloudiety.de");
        assert!(spec.publicly_accessible);
    }

    #[test]
    fn local_run_uses_fixed_defaults() {
        let spec = Config::default().resolve(&CiEnvironment::local()).unwrap();
        assert_eq!(spec.namespace.as_str(), "local-default");
        assert_eq!(spec.name.as_str(), "local-default-name");
        assert_eq!(spec.host, "local-test.cloudiety.de");
        assert_eq!(spec.image, "default/default/default");
    }

    #[test]
    fn file_overrides_win() {
        let config = Config::from_yaml(
            "namespace: payments\nname: api\nimage: nginx:1.27\nsubdomain: Pay.Example.com",
        )
        .unwrap();
        let spec = config.resolve(&pipeline()).unwrap();
        assert_eq!(spec.namespace.as_str(), "payments");
        assert_eq!(spec.name.as_str(), "api");
        assert_eq!(spec.image, "nginx:1.27");
        assert_eq!(spec.host, "pay.example.com");
    }

    #[test]
    fn custom_domain_feeds_subdomain() {
        let config = Config::from_yaml("domain: apps.example.com").unwrap();
        let spec = config.resolve(&pipeline()).unwrap();
        assert_eq!(spec.host, "checkout-team-x--shop.apps.example.com");
    }

    #[test]
    fn underivable_namespace_is_reported() {
        let ci = CiEnvironment {
            project_namespace: Some("team_x".to_string()),
            ..pipeline()
        };
        let err = Config::default().resolve(&ci).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(err.to_string().contains("team_x"));
    }

    #[test]
    fn grace_period_in_seconds() {
        let config = Config::from_yaml("termination_grace_period: 90s").unwrap();
        let spec = config.resolve(&pipeline()).unwrap();
        assert_eq!(spec.termination_grace_period_seconds(), 90);
    }
}

mod environment {
    use super::*;

    #[test]
    fn reads_ci_variables() {
        temp_env::with_vars(
            [
                (CI_REGISTRY, Some("registry.example.com")),
                (CI_PROJECT_NAME, Some("checkout")),
                (CI_PROJECT_NAMESPACE, Some("team-x")),
            ],
            || {
                let ci = CiEnvironment::from_env();
                assert!(!ci.is_local());
                assert_eq!(ci.project_name(), "checkout");
                assert_eq!(ci.namespace(), "team-x");
                assert_eq!(ci.image_path(), "registry.example.com/team-x/checkout");
            },
        );
    }

    #[test]
    fn missing_registry_means_local() {
        temp_env::with_vars(
            [
                (CI_REGISTRY, None::<&str>),
                (CI_PROJECT_NAME, Some("checkout")),
                (CI_PROJECT_NAMESPACE, None),
            ],
            || {
                let ci = CiEnvironment::from_env();
                assert!(ci.is_local());
                assert_eq!(ci.project_name(), "local-default-name");
            },
        );
    }

    #[test]
    fn blank_variables_are_ignored() {
        temp_env::with_vars([(CI_REGISTRY, Some("  "))], || {
            assert!(CiEnvironment::from_env().registry.is_none());
        });
    }
}

mod files {
    use super::*;
    use std::fs;

    #[test]
    fn discover_prefers_autocd_yml() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("autocd.yml"), "service_port: 81").unwrap();
        fs::write(dir.path().join("autocd.yaml"), "service_port: 82").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.service_port, 81);
    }

    #[test]
    fn discover_finds_dot_dir_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join(".autocd")).unwrap();
        fs::write(dir.path().join(".autocd/config.yml"), "domain: example.org").unwrap();

        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.domain, "example.org");
    }

    #[test]
    fn discover_without_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::discover(dir.path()).unwrap();
        assert_eq!(config.container_port, 8080);
    }

    #[test]
    fn explicit_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound(_)));
    }

    #[test]
    fn init_writes_parseable_template() {
        let dir = tempfile::tempdir().unwrap();
        init_config(dir.path(), false, false).unwrap();

        let config = Config::load(&dir.path().join(CONFIG_FILENAME)).unwrap();
        assert!(!config.publicly_accessible);

        let err = init_config(dir.path(), true, false).unwrap_err();
        assert!(matches!(err, Error::AlreadyExists(_)));
        init_config(dir.path(), true, true).unwrap();
    }
}
