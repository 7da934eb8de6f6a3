//! External command backend.
//!
//! Runs the configured command with the prompt on stdin and takes stdout as
//! the response, killing the process when it exceeds the timeout.
//!
//! Output goes to anonymous temporary files rather than pipes, so processes
//! the backend leaves behind cannot hold `run` past the timeout.

use super::{CompletionRequest, TextGenerator};
use crate::config::GenerationConfig;
use crate::error::{ProdgenError, Result};
use crate::prompt::{TemplateVars, render_template};
use std::fs::File;
use std::io::{Read, Seek, SeekFrom, Write};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Generator backed by an external command such as `llm`.
#[derive(Debug, Clone)]
pub struct CommandGenerator {
    config: GenerationConfig,
}

impl CommandGenerator {
    pub fn new(config: GenerationConfig) -> Self {
        Self { config }
    }

    /// Render `template` into program and arguments.
    ///
    /// Values are shell-quoted before substitution, so a system role with
    /// spaces stays one argument.
    pub fn command_line(&self, template: &str, system: &str) -> Result<Vec<String>> {
        let vars: TemplateVars = [
            ("model", self.config.model.clone()),
            ("max_tokens", self.config.max_tokens.to_string()),
            ("temperature", self.config.temperature.to_string()),
            ("system", system.to_string()),
        ]
        .into_iter()
        .map(|(key, value)| (key.to_string(), shell_words::quote(&value).into_owned()))
        .collect();

        let rendered = render_template(template, &vars).map_err(|e| {
            ProdgenError::ConfigError(format!(
                "backend command '{}' is invalid: {}\n\
                 Available variables: max_tokens, model, system, temperature",
                template, e
            ))
        })?;

        let args = shell_words::split(&rendered).map_err(|e| {
            ProdgenError::ConfigError(format!(
                "failed to parse backend command '{}': {}\n\
                 Fix: check for unmatched quotes or invalid escape sequences.",
                rendered, e
            ))
        })?;

        if args.is_empty() {
            return Err(ProdgenError::ConfigError(format!(
                "backend command is empty after parsing: '{}'",
                template
            )));
        }

        Ok(args)
    }

    /// Run `args` with `input` on stdin and return trimmed stdout.
    fn run(&self, args: &[String], input: &str) -> Result<String> {
        let (program, rest) = args
            .split_first()
            .ok_or_else(|| ProdgenError::ConfigError("backend command is empty".to_string()))?;

        let stdout_log = capture_file("stdout")?;
        let stderr_log = capture_file("stderr")?;

        let mut command = Command::new(program);
        command
            .args(rest)
            .envs(&self.config.environment)
            .stdin(Stdio::piped())
            .stdout(Stdio::from(share(&stdout_log, "stdout")?))
            .stderr(Stdio::from(share(&stderr_log, "stderr")?));

        debug!(program = %program, args = rest.len(), "spawning backend");
        let start = Instant::now();
        let mut child = command.spawn().map_err(|e| {
            ProdgenError::GenerationError(format!(
                "failed to execute backend command '{}': {}\n\
                 Fix: ensure the command is installed and in PATH.",
                program, e
            ))
        })?;

        // Detached: a backend that never reads stdin must not block the caller.
        if let Some(mut stdin) = child.stdin.take() {
            let input = input.to_string();
            thread::spawn(move || {
                let _ = stdin.write_all(input.as_bytes());
            });
        }

        let timeout = Duration::from_secs(self.config.timeout_seconds);
        let status = wait_with_timeout(&mut child, timeout)?;

        let Some(status) = status else {
            warn!(program = %program, timeout_seconds = self.config.timeout_seconds, "backend timed out");
            return Err(ProdgenError::GenerationError(format!(
                "backend command '{}' timed out after {}s",
                program, self.config.timeout_seconds
            )));
        };
        debug!(elapsed_ms = start.elapsed().as_millis() as u64, code = ?status.code(), "backend exited");
        let stdout = read_back(stdout_log, "stdout")?;
        let stderr = read_back(stderr_log, "stderr")?;

        if !status.success() {
            let stderr = String::from_utf8_lossy(&stderr);
            return Err(ProdgenError::GenerationError(format!(
                "backend command '{}' exited with {}: {}",
                program,
                describe(status),
                stderr.trim()
            )));
        }

        let text = String::from_utf8(stdout).map_err(|_| {
            ProdgenError::GenerationError(format!(
                "backend command '{}' produced non-UTF-8 output",
                program
            ))
        })?;
        let text = text.trim();
        if text.is_empty() {
            return Err(ProdgenError::GenerationError(format!(
                "backend command '{}' produced no output",
                program
            )));
        }
        Ok(text.to_string())
    }
}

impl TextGenerator for CommandGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        let args = self.command_line(&self.config.command, &request.system)?;
        self.run(&args, &request.prompt)
    }

    fn generate_image(&self, prompt: &str) -> Result<String> {
        if self.config.image_command.trim().is_empty() {
            return Err(ProdgenError::ConfigError(
                "image generation is disabled: set generation.image_command".to_string(),
            ));
        }
        let args = self.command_line(&self.config.image_command, "")?;
        let output = self.run(&args, prompt)?;
        output
            .lines()
            .map(str::trim)
            .find(|line| !line.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                ProdgenError::GenerationError("image backend returned no URL".to_string())
            })
    }
}

fn capture_file(stream: &str) -> Result<File> {
    tempfile::tempfile().map_err(|e| {
        ProdgenError::GenerationError(format!("failed to create {} capture file: {}", stream, e))
    })
}

fn share(file: &File, stream: &str) -> Result<File> {
    file.try_clone().map_err(|e| {
        ProdgenError::GenerationError(format!("failed to share {} capture file: {}", stream, e))
    })
}

/// Everything the backend wrote to `file`.
fn read_back(mut file: File, stream: &str) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    file.seek(SeekFrom::Start(0))
        .and_then(|_| file.read_to_end(&mut buf))
        .map_err(|e| {
            ProdgenError::GenerationError(format!("failed to read backend {}: {}", stream, e))
        })?;
    Ok(buf)
}

/// Wait for the child; `None` means it was killed after `timeout`.
fn wait_with_timeout(child: &mut Child, timeout: Duration) -> Result<Option<ExitStatus>> {
    let start = Instant::now();

    loop {
        match child.try_wait() {
            Ok(Some(status)) => return Ok(Some(status)),
            Ok(None) if start.elapsed() >= timeout => {
                // SIGKILL on Unix, TerminateProcess on Windows.
                let _ = child.kill();
                let _ = child.wait();
                return Ok(None);
            }
            Ok(None) => thread::sleep(POLL_INTERVAL),
            Err(e) => {
                return Err(ProdgenError::GenerationError(format!(
                    "failed to check backend process status: {}",
                    e
                )));
            }
        }
    }
}

fn describe(status: ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exit code {}", code),
        None => "a signal".to_string(),
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn generator(command: &str) -> CommandGenerator {
        CommandGenerator::new(GenerationConfig {
            command: command.to_string(),
            ..GenerationConfig::default()
        })
    }

    fn request(prompt: &str) -> CompletionRequest {
        CompletionRequest::new("You are a copywriter.", prompt)
    }

    #[test]
    fn test_command_line_quotes_values() {
        let args = generator("llm -m {model} -s {system}")
            .command_line("llm -m {model} -s {system}", "You are an SEO expert.")
            .unwrap();
        assert_eq!(args, vec!["llm", "-m", "gpt-3.5-turbo", "-s", "You are an SEO expert."]);
    }

    #[test]
    fn test_default_command_renders_all_settings() {
        let backend = generator("");
        let args = backend
            .command_line(&GenerationConfig::default().command, "role")
            .unwrap();
        assert_eq!(
            args,
            vec!["llm", "-m", "gpt-3.5-turbo", "-o", "max_tokens", "1000", "-o", "temperature", "0.7", "-s", "role"]
        );
    }

    #[test]
    fn test_undefined_placeholder_is_config_error() {
        let err = generator("llm {prompt}").complete(&request("hi")).unwrap_err();
        assert!(matches!(err, ProdgenError::ConfigError(_)));
        assert!(err.to_string().contains("undefined variable 'prompt'"));
    }

    #[test]
    fn test_prompt_goes_to_stdin() {
        let text = generator("cat").complete(&request("  Title: Hello\n")).unwrap();
        assert_eq!(text, "Title: Hello");
    }

    #[test]
    fn test_system_role_reaches_command() {
        let text = generator("sh -c 'echo \"$1\"' sh {system}")
            .complete(&request("ignored"))
            .unwrap();
        assert_eq!(text, "You are a copywriter.");
    }

    #[test]
    fn test_environment_is_passed() {
        let mut config = GenerationConfig {
            command: "sh -c 'echo $PRODGEN_TEST_VALUE'".to_string(),
            ..GenerationConfig::default()
        };
        config
            .environment
            .insert("PRODGEN_TEST_VALUE".to_string(), "from-config".to_string());
        let text = CommandGenerator::new(config).complete(&request("x")).unwrap();
        assert_eq!(text, "from-config");
    }

    #[test]
    fn test_nonzero_exit_reports_stderr() {
        let err = generator("sh -c 'echo rate limited >&2; exit 4'")
            .complete(&request("x"))
            .unwrap_err();
        assert!(matches!(err, ProdgenError::GenerationError(_)));
        let message = err.to_string();
        assert!(message.contains("exit code 4"));
        assert!(message.contains("rate limited"));
    }

    #[test]
    fn test_empty_output_is_error() {
        let err = generator("true").complete(&request("x")).unwrap_err();
        assert!(err.to_string().contains("produced no output"));
    }

    #[test]
    fn test_missing_program() {
        let err = generator("prodgen-no-such-backend")
            .complete(&request("x"))
            .unwrap_err();
        assert!(matches!(err, ProdgenError::GenerationError(_)));
    }

    #[test]
    fn test_timeout_kills_backend() {
        let backend = CommandGenerator::new(GenerationConfig {
            command: "sleep 10".to_string(),
            timeout_seconds: 1,
            ..GenerationConfig::default()
        });
        let start = Instant::now();
        let err = backend.complete(&request("x")).unwrap_err();
        assert!(err.to_string().contains("timed out after 1s"));
        assert!(start.elapsed() < Duration::from_secs(5));
    }

    #[test]
    fn test_timeout_not_held_by_lingering_child_process() {
        let backend = CommandGenerator::new(GenerationConfig {
            command: "sh -c 'sleep 8; echo late'".to_string(),
            timeout_seconds: 1,
            ..GenerationConfig::default()
        });
        let start = Instant::now();
        let err = backend.complete(&request("x")).unwrap_err();
        assert!(err.to_string().contains("timed out after 1s"));
        assert!(start.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn test_image_url_is_first_non_empty_line() {
        let backend = CommandGenerator::new(GenerationConfig {
            image_command: "printf '\\n  https://images.example/pack.png\\nextra\\n'".to_string(),
            ..GenerationConfig::default()
        });
        assert_eq!(
            backend.generate_image("a backpack").unwrap(),
            "https://images.example/pack.png"
        );
    }

    #[test]
    fn test_image_disabled_without_command() {
        let err = generator("cat").generate_image("a backpack").unwrap_err();
        assert!(matches!(err, ProdgenError::ConfigError(_)));
    }
}
