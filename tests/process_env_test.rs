//! Rendering against the real process environment.
//!
//! These tests mutate process environment variables and are serialized with
//! `serial_test`.

mod common;

use serial_test::serial;

use common::env::{with_env_var, without_env_var};
use common::init_test_logging;
use prompt_theme::prompt::{Environment, ProcessEnvironment, PromptError, render_prompt};
use prompt_theme::Theme;

fn theme(json: &str) -> Theme {
    Theme::from_json_str(json).expect("valid theme")
}

#[test]
#[serial]
fn process_env_reads_set_variable() {
    init_test_logging();
    with_env_var("PROMPT_THEME_TEST_USER", "ada", || {
        assert_eq!(
            ProcessEnvironment.var("PROMPT_THEME_TEST_USER").as_deref(),
            Some("ada")
        );
        let prompt = render_prompt(
            &theme(r#"[{"env": "PROMPT_THEME_TEST_USER", "color": {"fg": "green"}}, {"text": "$"}]"#),
            &ProcessEnvironment,
        )
        .unwrap();
        assert_eq!(prompt, r"\[\033[32m\]ada$");
    });
}

#[test]
#[serial]
fn process_env_unset_variable_is_an_error() {
    init_test_logging();
    without_env_var("PROMPT_THEME_TEST_USER", || {
        assert_eq!(ProcessEnvironment.var("PROMPT_THEME_TEST_USER"), None);
        let err = render_prompt(&theme(r#"[{"env": "PROMPT_THEME_TEST_USER"}]"#), &ProcessEnvironment)
            .unwrap_err();
        assert_eq!(err, PromptError::UndefinedEnvVar("PROMPT_THEME_TEST_USER".into()));
    });
}

#[test]
#[serial]
fn process_env_empty_prompt_uses_ps1() {
    init_test_logging();
    with_env_var("PS1", r"\u@\h\$ ", || {
        let prompt = render_prompt(&theme(r#"[{"text": ""}]"#), &ProcessEnvironment).unwrap();
        assert_eq!(prompt, r"\u@\h\$ ");
    });
}

#[test]
#[serial]
fn process_env_empty_prompt_without_ps1() {
    init_test_logging();
    without_env_var("PS1", || {
        let err = render_prompt(&theme(r#"[{"text": ""}]"#), &ProcessEnvironment).unwrap_err();
        assert_eq!(err, PromptError::UndefinedEnvVar("PS1".into()));
    });
}

#[test]
#[serial]
fn helpers_restore_previous_value() {
    with_env_var("PROMPT_THEME_TEST_USER", "outer", || {
        without_env_var("PROMPT_THEME_TEST_USER", || {
            assert!(std::env::var("PROMPT_THEME_TEST_USER").is_err());
        });
        assert_eq!(std::env::var("PROMPT_THEME_TEST_USER").unwrap(), "outer");
        with_env_var("PROMPT_THEME_TEST_USER", "inner", || {
            assert_eq!(ProcessEnvironment.var("PROMPT_THEME_TEST_USER").as_deref(), Some("inner"));
        });
        assert_eq!(std::env::var("PROMPT_THEME_TEST_USER").unwrap(), "outer");
    });
}
