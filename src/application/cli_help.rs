//! Command-line program help use case

use crate::infrastructure::CommandRunner;

/// Which step of the fallback chain produced the help text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpSource {
    ManPage,
    SelfHelp,
}

/// Result of looking up help for a program
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpOutcome {
    Found { source: HelpSource, text: String },
    /// Neither step worked; carries the `--help` attempt's stderr or
    /// launch error for display
    Missing { diagnostics: String },
}

/// Service for fetching `man` or `--help` output for a program
pub struct CliHelpService<C: CommandRunner> {
    runner: C,
    help_flag: String,
}

impl<C: CommandRunner> CliHelpService<C> {
    pub fn new(runner: C, help_flag: &str) -> Self {
        CliHelpService {
            runner,
            help_flag: help_flag.to_string(),
        }
    }

    /// Try `man <key>`, then `<key> <help_flag>`
    pub fn execute(&self, key: &str) -> HelpOutcome {
        match self.runner.run("man", &[key]) {
            Ok(captured) if captured.success => {
                tracing::info!(key, "found manual page");
                return HelpOutcome::Found {
                    source: HelpSource::ManPage,
                    text: captured.stdout,
                };
            }
            Ok(captured) => {
                tracing::debug!(key, stderr = %captured.stderr.trim_end(), "man failed")
            }
            Err(e) => tracing::debug!(key, error = %e, "could not run man"),
        }

        match self.runner.run(key, &[self.help_flag.as_str()]) {
            Ok(captured) if captured.success => {
                tracing::info!(key, flag = %self.help_flag, "found self help");
                HelpOutcome::Found {
                    source: HelpSource::SelfHelp,
                    text: captured.stdout,
                }
            }
            Ok(captured) => HelpOutcome::Missing {
                diagnostics: captured.stderr,
            },
            Err(e) => HelpOutcome::Missing {
                diagnostics: format!("{}: {}", key, e),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::Captured;
    use std::cell::RefCell;
    use std::io;

    /// Runner answering from a script of (program, result) pairs
    struct ScriptedRunner {
        answers: Vec<(&'static str, io::Result<Captured>)>,
        calls: RefCell<Vec<String>>,
    }

    impl ScriptedRunner {
        fn new(answers: Vec<(&'static str, io::Result<Captured>)>) -> Self {
            ScriptedRunner {
                answers,
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(&self, program: &str, args: &[&str]) -> io::Result<Captured> {
            self.calls
                .borrow_mut()
                .push(format!("{} {}", program, args.join(" ")));
            match self.answers.iter().find(|(name, _)| *name == program) {
                Some((_, Ok(captured))) => Ok(captured.clone()),
                Some((_, Err(e))) => Err(io::Error::new(e.kind(), e.to_string())),
                None => Err(io::Error::new(io::ErrorKind::NotFound, "not scripted")),
            }
        }
    }

    fn ok(stdout: &str) -> io::Result<Captured> {
        Ok(Captured {
            success: true,
            stdout: stdout.to_string(),
            stderr: String::new(),
        })
    }

    fn failed(stderr: &str) -> io::Result<Captured> {
        Ok(Captured {
            success: false,
            stdout: String::new(),
            stderr: stderr.to_string(),
        })
    }

    #[test]
    fn test_man_page_first() {
        let runner = ScriptedRunner::new(vec![("man", ok("LS(1)\nNAME\n")), ("ls", ok("usage"))]);
        let service = CliHelpService::new(runner, "--help");

        assert_eq!(
            service.execute("ls"),
            HelpOutcome::Found {
                source: HelpSource::ManPage,
                text: "LS(1)\nNAME\n".to_string()
            }
        );
        assert_eq!(*service.runner.calls.borrow(), vec!["man ls"]);
    }

    #[test]
    fn test_falls_back_to_self_help() {
        let runner = ScriptedRunner::new(vec![
            ("man", failed("No manual entry for rg\n")),
            ("rg", ok("ripgrep 14\nUSAGE:\n")),
        ]);
        let service = CliHelpService::new(runner, "--help");

        assert_eq!(
            service.execute("rg"),
            HelpOutcome::Found {
                source: HelpSource::SelfHelp,
                text: "ripgrep 14\nUSAGE:\n".to_string()
            }
        );
        assert_eq!(*service.runner.calls.borrow(), vec!["man rg", "rg --help"]);
    }

    #[test]
    fn test_falls_back_when_man_is_not_installed() {
        let runner = ScriptedRunner::new(vec![("tool", ok("tool usage"))]);
        let service = CliHelpService::new(runner, "-h");

        assert_eq!(
            service.execute("tool"),
            HelpOutcome::Found {
                source: HelpSource::SelfHelp,
                text: "tool usage".to_string()
            }
        );
        assert_eq!(*service.runner.calls.borrow(), vec!["man tool", "tool -h"]);
    }

    #[test]
    fn test_missing_keeps_stderr() {
        let runner = ScriptedRunner::new(vec![
            ("man", failed("No manual entry\n")),
            ("frob", failed("frob: unknown option --help\n")),
        ]);
        let service = CliHelpService::new(runner, "--help");

        assert_eq!(
            service.execute("frob"),
            HelpOutcome::Missing {
                diagnostics: "frob: unknown option --help\n".to_string()
            }
        );
    }

    #[test]
    fn test_missing_program() {
        let runner = ScriptedRunner::new(vec![("man", failed(""))]);
        let service = CliHelpService::new(runner, "--help");

        match service.execute("nosuch") {
            HelpOutcome::Missing { diagnostics } => {
                assert!(diagnostics.starts_with("nosuch: "))
            }
            other => panic!("Expected Missing, got {:?}", other),
        }
    }
}
