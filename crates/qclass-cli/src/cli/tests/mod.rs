//! CLI parse tests.

use super::{Cli, CliCommand};
use clap::Parser;
use qclass_core::config::ClassifierConfig;
use qclass_core::driver::OnFailure;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_subcommand_is_demo() {
    let cli = parse(&["qclass"]);
    assert!(cli.command.is_none());
    assert!(!cli.overrides.keep_going);
    assert_eq!(cli.overrides.on_failure(), OnFailure::Abort);
}

#[test]
fn cli_parse_demo() {
    match parse(&["qclass", "demo"]).command {
        Some(CliCommand::Demo) => {}
        _ => panic!("expected Demo"),
    }
}

#[test]
fn cli_parse_classify_many() {
    match parse(&["qclass", "classify", "What is 2+2?", "Write a novel"]).command {
        Some(CliCommand::Classify { queries }) => {
            assert_eq!(queries, vec!["What is 2+2?", "Write a novel"]);
        }
        _ => panic!("expected Classify"),
    }
}

#[test]
fn cli_parse_classify_requires_a_query() {
    assert!(Cli::try_parse_from(["qclass", "classify"]).is_err());
}

#[test]
fn cli_overrides_apply_to_config() {
    let cli = parse(&[
        "qclass",
        "classify",
        "q",
        "--region",
        "eu-central-1",
        "--model-id",
        "anthropic.claude-3-sonnet-20240229-v1:0",
        "--keep-going",
    ]);
    let mut cfg = ClassifierConfig::default();
    cli.overrides.apply(&mut cfg);
    assert_eq!(cfg.region, "eu-central-1");
    assert_eq!(cfg.model_id, "anthropic.claude-3-sonnet-20240229-v1:0");
    assert_eq!(cfg.max_tokens, 10);
    assert_eq!(cli.overrides.on_failure(), OnFailure::Continue);
}

#[test]
fn cli_without_overrides_keeps_config() {
    let cli = parse(&["qclass"]);
    let mut cfg = ClassifierConfig::default();
    cli.overrides.apply(&mut cfg);
    assert_eq!(cfg, ClassifierConfig::default());
}
