//! Property tests for environment value escaping.

use proptest::prelude::*;

use fire::domain::value_objects::CommandKind;
use fire::{EnvVars, Task};

fn env_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,8}").unwrap()
}

fn env_value() -> impl Strategy<Value = String> {
    // printable ASCII plus the awkward ones: tab, newline, non-ASCII
    proptest::string::string_regex("[ -~\t\né]{0,24}").unwrap()
}

/// What bash does to an unquoted here-document body
fn decode_heredoc(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('$') | Some('`') | Some('\\') => out.push(chars.next().unwrap()),
            Some('\n') => {
                chars.next();
            }
            _ => out.push('\\'),
        }
    }
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one pass of shell word splitting yields exactly `NAME=value`.
    #[test]
    fn property_rendered_env_splits_back_to_assignment(
        name in env_name(),
        value in env_value(),
    ) {
        let env = EnvVars::new().with(name.clone(), value.clone()).unwrap();
        let words = shlex::split(&env.render()).expect("rendered env must be well-formed");
        prop_assert_eq!(words, vec![format!("{}={}", name, value)]);
    }

    /// PROPERTY: the env fragment survives the here-document and the
    /// double-quoted session command inside the exec fragment.
    #[test]
    fn property_exec_env_survives_heredoc_and_quotes(value in env_value()) {
        let env = EnvVars::new().with("VALUE", value.clone()).unwrap();
        let task = Task::new("app", "u@h1").unwrap().exec("python entry.py", &env);
        let exec = task.commands_of(CommandKind::Exec).next().unwrap().to_string();

        let remote = decode_heredoc(&exec);
        let start = remote.find(" -d ").unwrap() + " -d ".len();
        let end = remote.rfind("\nEOF").unwrap();
        let quoted = &remote[start..end];

        let session = shlex::split(quoted).expect("session command must be one quoted word");
        prop_assert_eq!(session.len(), 1);

        let body = session[0].strip_prefix("export ").unwrap();
        let fragment = &body[..body.find("; ").unwrap()];
        let words = shlex::split(fragment).expect("export fragment must be well-formed");
        prop_assert_eq!(words, vec![format!("VALUE={}", value)]);
    }

    /// PROPERTY: no value can end the here-document early.
    #[test]
    fn property_exec_heredoc_terminator_appears_once(value in env_value()) {
        let env = EnvVars::new().with("VALUE", value).unwrap();
        let task = Task::new("app", "u@h1").unwrap().exec("python entry.py", &env);
        let exec = task.commands_of(CommandKind::Exec).next().unwrap().to_string();

        prop_assert_eq!(exec.lines().filter(|l| *l == "EOF").count(), 1);
        prop_assert!(exec.ends_with("\nEOF"));
    }
}
