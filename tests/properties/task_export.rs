//! Property tests for task building and export.

use proptest::prelude::*;

use fire::{EnvVars, PushMode, ScriptAssembler, Task};

fn task_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,10}").unwrap()
}

fn host() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}@[a-z][a-z0-9.-]{0,10}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: appending never mutates the receiver.
    #[test]
    fn property_builders_leave_receiver_untouched(
        name in task_name(),
        host in host(),
        command in "[a-z ]{1,20}",
    ) {
        let base = Task::new(&name, &host).unwrap();
        let before = base.export();

        let executed = base.exec(&command, &EnvVars::new());
        let cleaned = executed.clean();

        prop_assert_eq!(base.export(), before);
        prop_assert_eq!(executed.commands().len(), 1);
        prop_assert_eq!(cleaned.commands().len(), 2);
    }

    /// PROPERTY: export is every fragment in order, newline-joined, newline-terminated.
    #[test]
    fn property_export_joins_fragments(
        name in task_name(),
        host in host(),
        execs in 0usize..4,
    ) {
        let mut task = Task::new(&name, &host).unwrap();
        for i in 0..execs {
            task = task.exec(&format!("run {}", i), &EnvVars::new());
        }
        task = task.clean();

        let expected = task
            .commands()
            .iter()
            .map(|c| c.text())
            .collect::<Vec<_>>()
            .join("\n")
            + "\n";
        prop_assert_eq!(task.export(), expected);
    }

    /// PROPERTY: sequential and parallel run scripts carry the same execs.
    #[test]
    fn property_push_mode_keeps_every_exec(
        hosts in proptest::collection::vec(host(), 1..5),
    ) {
        let tasks: Vec<Task> = hosts
            .iter()
            .map(|h| Task::new("app", h).unwrap().exec("python entry.py", &EnvVars::new()))
            .collect();

        let sequential = ScriptAssembler::new(PushMode::Sequential).run_script(&tasks).render();
        let parallel = ScriptAssembler::new(PushMode::Parallel).run_script(&tasks).render();

        let count = |s: &str| s.lines().filter(|l| l.starts_with("ssh ")).count();
        prop_assert_eq!(count(&sequential), hosts.len());
        prop_assert_eq!(count(&parallel), hosts.len());
        // no pushes, so no barrier either
        prop_assert!(!parallel.contains("wait"));
    }
}
