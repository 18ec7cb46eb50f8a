//! Library integration tests.

use boiler::BoilerError;

#[test]
fn error_types_are_public() {
    let err = BoilerError::TemplateNotFound {
        name: "test".into(),
    };
    assert_eq!(err.to_string(), "No template found with name test");
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> boiler::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use boiler::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["boiler", "create", "web", "--dry-run"]);

    if let Commands::Create(args) = cli.command {
        assert_eq!(args.template, vec!["web"]);
        assert!(args.dry_run);
    } else {
        panic!("Expected Create command");
    }
}

#[test]
fn validation_errors_convert() {
    let err: BoilerError = boiler::template::ValidationError::NoSteps.into();
    assert_eq!(err.to_string(), "no steps defined");
}
