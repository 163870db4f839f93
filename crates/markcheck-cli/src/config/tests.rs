#[cfg(test)]
mod tests {
    use super::super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    #[test]
    fn test_default_log_filter() {
        assert_eq!(default_log_filter(), "markcheck=info,warn");
        assert_eq!(Config::default().report.format, OutputFormat::Text);
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = Config::from_toml_str(
            r#"
            [engine.pillar2]
            min_identification_chars = 20

            [report]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.engine.pillar2.min_identification_chars, 20);
        assert_eq!(config.engine.pillar2.and_stack_limit, 3);
        assert_eq!(config.engine.pillar3.refusal_candidate_errors, 3);
        assert_eq!(config.report.format, OutputFormat::Json);
        assert_eq!(config.logging.filter, "markcheck=info,warn");
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        assert!(Config::from_toml_str("[report]\nformat = \"yaml\"").is_err());
    }

    #[test]
    fn test_engine_table_with_wrong_type_is_rejected() {
        let err = Config::from_toml_str("[engine.pillar3]\nrefusal_candidate_errors = \"three\"").unwrap_err();
        assert!(err.to_string().contains("Invalid markcheck config"));
    }

    #[test]
    fn test_resolve_prefers_flag_then_env() {
        let flag = Path::new("/etc/markcheck.toml");
        assert_eq!(
            ConfigSource::resolve(Some(flag), Some("/tmp/env.toml".into())),
            ConfigSource::Explicit(flag.to_path_buf())
        );
        assert_eq!(
            ConfigSource::resolve(None, Some("/tmp/env.toml".into())),
            ConfigSource::Explicit(PathBuf::from("/tmp/env.toml"))
        );
        assert_eq!(
            ConfigSource::resolve(None, Some("  ".into())),
            ConfigSource::Default(PathBuf::from(DEFAULT_CONFIG_FILE))
        );
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::Explicit(dir.path().join("absent.toml"));
        assert!(Config::load_from(&source).is_err());
    }

    #[test]
    fn test_missing_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let source = ConfigSource::Default(dir.path().join("markcheck.toml"));
        let config = Config::load_from(&source).unwrap();
        assert_eq!(config.engine, EngineConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[logging]\nfilter = \"markcheck=debug\"").unwrap();
        let config = Config::load_from(&ConfigSource::Explicit(file.path().to_path_buf())).unwrap();
        assert_eq!(config.logging.filter, "markcheck=debug");
    }
}
