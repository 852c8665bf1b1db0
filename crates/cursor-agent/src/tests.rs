/// End-to-end tests that drive [`CursorAgentClient`] against small shell
/// scripts standing in for the real `cursor-agent` binary.
#[cfg(all(test, unix))]
mod fake_agent {
    use std::os::unix::fs::PermissionsExt;
    use std::path::PathBuf;

    use tempfile::TempDir;

    use crate::{AgentOptions, CursorAgentClient, CursorAgentError, Mode, ASK_MARKER};

    /// Prints every argument on its own line.
    const ECHO_ARGS: &str = r#"for a in "$@"; do printf '%s\n' "$a"; done"#;

    fn fake_agent(body: &str) -> (PathBuf, TempDir) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("cursor-agent");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
        (path, dir)
    }

    fn client(body: &str) -> (CursorAgentClient, TempDir) {
        let (path, dir) = fake_agent(body);
        let workspace = dir.path().join("ws");
        (CursorAgentClient::new(&path, Some(workspace)), dir)
    }

    fn lines(out: &str) -> Vec<&str> {
        out.lines().collect()
    }

    #[test]
    fn explicit_path_is_kept_as_resolved_executable() {
        let (path, _dir) = fake_agent("exit 0");
        let c = CursorAgentClient::new(&path, None);
        assert_eq!(c.agent_path(), path);
    }

    #[test]
    fn resolved_path_survives_executable_removal() {
        let (path, _dir) = fake_agent("exit 0");
        let c = CursorAgentClient::new(&path, None);
        std::fs::remove_file(&path).unwrap();

        assert_eq!(c.agent_path(), path);
        let inv = c.invocation("hi", &AgentOptions::default());
        assert_eq!(inv.program, path);

        let err = c.agent("hi", &AgentOptions::default()).unwrap_err();
        assert!(matches!(err, CursorAgentError::Spawn { .. }));
    }

    #[test]
    fn success_returns_trimmed_stdout() {
        let (c, _dir) = client(r"printf '  \n  hello world \n\n'");
        let out = c.agent("hi", &AgentOptions::default()).unwrap();
        assert_eq!(out, "hello world");
    }

    #[test]
    fn stderr_of_successful_run_is_not_returned() {
        let (c, _dir) = client("echo noise >&2; echo answer");
        let out = c.agent("hi", &AgentOptions::default()).unwrap();
        assert_eq!(out, "answer");
    }

    #[test]
    fn failure_message_is_stderr() {
        let (c, _dir) = client("echo partial; echo 'boom: bad model' >&2; exit 3");
        let err = c.agent("hi", &AgentOptions::default()).unwrap_err();
        match err {
            CursorAgentError::Process { message, code } => {
                assert_eq!(message, "boom: bad model\n");
                assert_eq!(code, Some(3));
            }
            other => panic!("expected Process, got {other:?}"),
        }
    }

    #[test]
    fn failure_falls_back_to_stdout_when_stderr_empty() {
        let (c, _dir) = client("printf 'only on stdout'; exit 1");
        let err = c.agent("hi", &AgentOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "only on stdout");
    }

    #[test]
    fn agent_passes_assembled_args() {
        let (c, dir) = client(ECHO_ARGS);
        let opts = AgentOptions::default()
            .with_model("m1")
            .with_mode(Mode::Ask)
            .with_force(false);
        let out = c.agent("hello", &opts).unwrap();
        let ws = dir.path().join("ws");
        let expected_prompt = format!("{ASK_MARKER} hello");
        assert_eq!(
            lines(&out),
            vec![
                "--print",
                "--model",
                "m1",
                "--workspace",
                ws.to_str().unwrap(),
                "agent",
                expected_prompt.as_str(),
            ]
        );
    }

    #[test]
    fn ask_helper_never_forces() {
        let (c, _dir) = client(ECHO_ARGS);
        let out = c.ask("What is the capital of France?", None).unwrap();
        assert!(!lines(&out).contains(&"--force"));
        assert!(out.ends_with(&format!("{ASK_MARKER} What is the capital of France?")));
    }

    #[test]
    fn debug_and_plan_helpers_force_and_mark() {
        let (c, _dir) = client(ECHO_ARGS);

        let out = c.debug("fix buggy.py", Some("m2")).unwrap();
        let l = lines(&out);
        assert!(l.contains(&"--force"));
        assert!(l.windows(2).any(|w| w == ["--model", "m2"]));
        assert_eq!(*l.last().unwrap(), Mode::Debug.apply("fix buggy.py"));

        let out = c.plan("todo app", None).unwrap();
        let l = lines(&out);
        assert!(l.contains(&"--force"));
        assert!(!l.contains(&"--model"));
        assert_eq!(*l.last().unwrap(), Mode::Planner.apply("todo app"));
    }

    #[test]
    fn create_chat_returns_last_token() {
        let (c, _dir) = client(
            r#"if [ "$#" -eq 1 ] && [ "$1" = "create-chat" ]; then
  echo "Created chat: abc123"
else
  echo "unexpected args: $*" >&2
  exit 2
fi"#,
        );
        assert_eq!(c.create_chat().unwrap(), "abc123");
    }

    #[test]
    fn create_chat_failure_carries_stderr() {
        let (c, _dir) = client("echo 'not logged in' >&2; exit 1");
        let err = c.create_chat().unwrap_err();
        assert_eq!(err.to_string(), "not logged in\n");
    }

    #[test]
    fn create_chat_failure_without_stderr_reports_stdout() {
        let (c, _dir) = client("printf 'no session store'; exit 1");
        let err = c.create_chat().unwrap_err();
        match err {
            CursorAgentError::Process { message, code } => {
                assert_eq!(message, "no session store");
                assert_eq!(code, Some(1));
            }
            other => panic!("expected Process, got {other:?}"),
        }
    }

    #[test]
    fn create_chat_with_empty_output_is_explicit_error() {
        let (c, _dir) = client("exit 0");
        let err = c.create_chat().unwrap_err();
        assert!(matches!(err, CursorAgentError::MissingChatId { .. }));
    }

    #[test]
    fn chat_id_round_trips_into_resume_flag() {
        let (c, _dir) = client(
            r#"if [ "$1" = "create-chat" ]; then
  echo "Created chat: chat-42"
else
  for a in "$@"; do printf '%s\n' "$a"; done
fi"#,
        );
        let chat = c.create_chat().unwrap();
        let out = c
            .agent("What is my name?", &AgentOptions::default().with_chat_id(&chat))
            .unwrap();
        assert!(lines(&out).windows(2).any(|w| w == ["--resume", "chat-42"]));
    }
}
