//! In-memory test doubles for the domain ports
//!
//! Use `Arc<Mutex<>>` internally so they can be cloned and shared between
//! the code under test and the assertions.

use std::collections::{BTreeSet, HashMap, VecDeque};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::domain::ports::{
    CapturedOutput, CommandRunner, CommandSpec, CommandStatus, FileSystem, FlavourEvent,
    FlavourEventSink, FsError, FsResult, Operator, PrepareEvent, PrepareEventSink,
};
use crate::error::{PrepError, PrepResult};

/// Mock file system for testing
#[derive(Clone, Default)]
pub struct MockFs {
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub dirs: Arc<Mutex<BTreeSet<PathBuf>>>,
}

impl MockFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file (and its parent directories)
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        self.put(path.as_ref(), content);
        self
    }

    /// Add a directory (and its parents)
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.add_dir(path.as_ref());
        self
    }

    pub fn put(&self, path: &Path, content: &str) {
        if let Some(parent) = path.parent() {
            self.add_dir(parent);
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
    }

    pub fn remove(&self, path: &Path) {
        self.files.lock().unwrap().remove(path);
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.lock().unwrap().get(path.as_ref()).cloned()
    }

    pub fn has_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.lock().unwrap().contains(path.as_ref())
    }

    fn add_dir(&self, path: &Path) {
        let mut dirs = self.dirs.lock().unwrap();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.insert(ancestor.to_path_buf());
        }
    }
}

impl FileSystem for MockFs {
    fn read(&self, path: &Path) -> FsResult<String> {
        self.content(path)
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        self.put(path, content);
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path) || self.has_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.has_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.add_dir(path);
        Ok(())
    }

    fn copy(&self, from: &Path, to: &Path) -> FsResult<()> {
        let content = self.read(from)?;
        self.put(to, &content);
        Ok(())
    }

    fn list_dirs(&self, path: &Path) -> FsResult<Vec<String>> {
        if !self.has_dir(path) {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        let dirs = self.dirs.lock().unwrap();
        Ok(dirs
            .iter()
            .filter(|d| d.parent() == Some(path))
            .filter_map(|d| d.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .collect())
    }
}

type Hook = Arc<dyn Fn(&CommandSpec) + Send + Sync>;

/// Command runner that records invocations instead of executing them
#[derive(Clone, Default)]
pub struct RecordingRunner {
    pub commands: Arc<Mutex<Vec<CommandSpec>>>,
    /// (substring of the rendered command, exit code)
    exit_codes: Arc<Mutex<Vec<(String, i32)>>>,
    /// (program, captured output)
    outputs: Arc<Mutex<Vec<(String, String)>>>,
    hooks: Arc<Mutex<Vec<(String, Hook)>>>,
    /// Programs that cannot be started
    missing: Arc<Mutex<Vec<String>>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands whose rendering contains `needle` exit with `code`
    pub fn fail_on(self, needle: &str, code: i32) -> Self {
        self.exit_codes
            .lock()
            .unwrap()
            .push((needle.to_string(), code));
        self
    }

    /// `capture` of `program` returns `output`
    pub fn with_output(self, program: &str, output: &str) -> Self {
        self.outputs
            .lock()
            .unwrap()
            .push((program.to_string(), output.to_string()));
        self
    }

    /// Spawning `program` fails as if it were not installed
    pub fn fail_spawn(self, program: &str) -> Self {
        self.missing.lock().unwrap().push(program.to_string());
        self
    }

    fn check_spawn(&self, spec: &CommandSpec) -> PrepResult<()> {
        if self.missing.lock().unwrap().contains(&spec.program) {
            return Err(PrepError::CommandSpawn {
                command: spec.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }

    /// Run `hook` whenever a command containing `needle` is executed
    pub fn on_run(self, needle: &str, hook: impl Fn(&CommandSpec) + Send + Sync + 'static) -> Self {
        self.hooks
            .lock()
            .unwrap()
            .push((needle.to_string(), Arc::new(hook)));
        self
    }

    /// Rendered commands in execution order
    pub fn rendered(&self) -> Vec<String> {
        self.commands
            .lock()
            .unwrap()
            .iter()
            .map(|c| {
                let argv = std::iter::once(c.program.as_str())
                    .chain(c.args.iter().map(String::as_str))
                    .collect::<Vec<_>>();
                argv.join(" ")
            })
            .collect()
    }

    fn status_for(&self, spec: &CommandSpec) -> CommandStatus {
        let rendered = spec.to_string();
        let code = self
            .exit_codes
            .lock()
            .unwrap()
            .iter()
            .find(|(needle, _)| rendered.contains(needle.as_str()))
            .map(|(_, code)| *code)
            .unwrap_or(0);
        CommandStatus::from_code(code)
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> PrepResult<CommandStatus> {
        self.commands.lock().unwrap().push(spec.clone());
        self.check_spawn(spec)?;
        let rendered = spec.to_string();
        let hooks: Vec<Hook> = self
            .hooks
            .lock()
            .unwrap()
            .iter()
            .filter(|(needle, _)| rendered.contains(needle.as_str()))
            .map(|(_, hook)| hook.clone())
            .collect();
        for hook in hooks {
            hook(spec);
        }
        Ok(self.status_for(spec))
    }

    fn capture(&self, spec: &CommandSpec) -> PrepResult<CapturedOutput> {
        self.commands.lock().unwrap().push(spec.clone());
        self.check_spawn(spec)?;
        let output = self
            .outputs
            .lock()
            .unwrap()
            .iter()
            .find(|(program, _)| *program == spec.program)
            .map(|(_, output)| output.clone())
            .unwrap_or_default();
        Ok(CapturedOutput {
            status: self.status_for(spec),
            output,
        })
    }
}

/// Operator that replays canned answers
#[derive(Clone, Default)]
pub struct ScriptedOperator {
    answers: Arc<Mutex<VecDeque<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub notices: Arc<Mutex<Vec<String>>>,
}

impl ScriptedOperator {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.iter().map(|a| a.to_string()).collect())),
            ..Self::default()
        }
    }

    pub fn remaining(&self) -> usize {
        self.answers.lock().unwrap().len()
    }
}

impl Operator for ScriptedOperator {
    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn read_line(&self, prompt: &str) -> PrepResult<Option<String>> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.answers.lock().unwrap().pop_front())
    }
}

/// Event sink that keeps every event
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub prepare: Arc<Mutex<Vec<PrepareEvent>>>,
    pub flavour: Arc<Mutex<Vec<FlavourEvent>>>,
}

impl PrepareEventSink for RecordingSink {
    fn on_event(&self, event: PrepareEvent) {
        self.prepare.lock().unwrap().push(event);
    }
}

impl FlavourEventSink for RecordingSink {
    fn on_event(&self, event: FlavourEvent) {
        self.flavour.lock().unwrap().push(event);
    }
}
