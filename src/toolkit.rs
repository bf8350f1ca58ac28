use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    commands::{
        ChmodOptions, ChownOptions, FindOptions, FreeOptions, GrepOptions, KillOptions,
        ListOptions, MakeDirOptions, ProcessListOptions, RemoveOptions, TopOptions, TouchOptions,
        DEFAULT_TOP_DELAY,
    },
    core::{
        executor::Executor,
        outcome::{summary, Failure, Outcome},
    },
};

/// Typed entry points for every supported utility.
///
/// Each method turns its options into an argument vector and runs it
/// through the owned [`Executor`], so every call lands in the same log.
pub struct Toolkit {
    executor: Executor,
    top_delay: u64,
}

impl Toolkit {
    pub fn new(executor: Executor) -> Self {
        Self {
            executor,
            top_delay: DEFAULT_TOP_DELAY,
        }
    }

    pub fn with_top_delay(mut self, seconds: u64) -> Self {
        self.top_delay = seconds;
        self
    }

    pub fn top_delay(&self) -> u64 {
        self.top_delay
    }

    pub fn log(&self) -> &[Outcome] {
        self.executor.log()
    }

    /// The directory commands are spawned in
    pub fn current_dir(&self) -> PathBuf {
        self.executor
            .current_dir()
            .map(Path::to_path_buf)
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn whoami(&mut self) -> Outcome {
        self.executor
            .execute_with(&["whoami"], |out| Some(summary("username", out.trim())))
    }

    pub fn pwd(&mut self) -> Outcome {
        self.executor.execute_with(&["pwd"], |out| {
            Some(summary("current_directory", out.trim()))
        })
    }

    /// Changes the directory later commands run in.
    ///
    /// No process is spawned. `None` and `~` go to the home directory;
    /// relative paths resolve against [`Toolkit::current_dir`].
    pub fn cd(&mut self, path: Option<&str>) -> Outcome {
        let target = match path {
            None | Some("~") => dirs::home_dir(),
            Some(path) => Some(self.current_dir().join(path)),
        };

        let outcome = match target {
            None => Outcome::failed(
                "cd ~",
                Failure::Directory("Home directory not found".to_string()),
            ),
            Some(target) => self.change_dir(&target),
        };
        self.executor.record(outcome)
    }

    fn change_dir(&mut self, target: &Path) -> Outcome {
        let command = format!("cd {}", target.display());
        match target.canonicalize() {
            Ok(dir) if dir.is_dir() => {
                debug!(dir = %dir.display(), "changing directory");
                let current = dir.display().to_string();
                self.executor.set_current_dir(dir);
                Outcome::completed(command, 0, "", "")
                    .with_summary(summary("current_directory", current))
            }
            Ok(dir) => Outcome::failed(
                command,
                Failure::Directory(format!("Not a directory: {}", dir.display())),
            ),
            Err(e) => Outcome::failed(
                command,
                Failure::Directory(format!("{}: {}", target.display(), e)),
            ),
        }
    }

    pub fn ls(&mut self, options: &ListOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn mkdir(&mut self, options: &MakeDirOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn touch(&mut self, options: &TouchOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn rm(&mut self, options: &RemoveOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn chmod(&mut self, options: &ChmodOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn chown(&mut self, options: &ChownOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn ps(&mut self, options: &ProcessListOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn kill(&mut self, options: &KillOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn top(&mut self, options: &TopOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn free(&mut self, options: &FreeOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn grep(&mut self, options: &GrepOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }

    pub fn find(&mut self, options: &FindOptions) -> Outcome {
        self.executor.execute(&options.argv())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup() -> (Toolkit, TempDir) {
        let tmp_dir = TempDir::new().expect("Failed to create temp dir");
        let dir = tmp_dir.path().canonicalize().unwrap();
        let toolkit = Toolkit::new(Executor::default().with_current_dir(dir));
        (toolkit, tmp_dir)
    }

    fn summary_value<'a>(outcome: &'a Outcome, key: &str) -> Option<&'a str> {
        outcome
            .summary
            .as_ref()
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    #[test]
    fn test_whoami_summary() {
        let (mut toolkit, _tmp_dir) = setup();
        let outcome = toolkit.whoami();

        assert!(outcome.succeeded());
        let username = summary_value(&outcome, "username").unwrap();
        assert_eq!(username, outcome.stdout().unwrap().trim());
    }

    #[test]
    fn test_pwd_reports_executor_dir() {
        let (mut toolkit, _tmp_dir) = setup();
        let outcome = toolkit.pwd();

        assert_eq!(
            summary_value(&outcome, "current_directory"),
            Some(toolkit.current_dir().to_str().unwrap())
        );
    }

    #[test]
    fn test_cd_then_pwd() {
        let (mut toolkit, tmp_dir) = setup();
        fs::create_dir(tmp_dir.path().join("sub")).unwrap();

        let outcome = toolkit.cd(Some("sub"));
        assert!(outcome.succeeded());
        assert!(toolkit.current_dir().ends_with("sub"));

        let outcome = toolkit.cd(Some(".."));
        assert!(outcome.succeeded());

        let pwd = toolkit.pwd();
        assert_eq!(
            summary_value(&pwd, "current_directory"),
            Some(tmp_dir.path().canonicalize().unwrap().to_str().unwrap())
        );
    }

    #[test]
    fn test_cd_missing_dir_is_logged() {
        let (mut toolkit, _tmp_dir) = setup();
        let before = toolkit.current_dir();
        let outcome = toolkit.cd(Some("nope"));

        assert!(!outcome.succeeded());
        assert!(outcome.error_detail().is_some());
        assert_eq!(toolkit.current_dir(), before);
        assert_eq!(toolkit.log().len(), 1);
    }

    #[test]
    fn test_cd_into_file_fails() {
        let (mut toolkit, tmp_dir) = setup();
        fs::write(tmp_dir.path().join("file"), "x").unwrap();

        let outcome = toolkit.cd(Some("file"));
        assert!(outcome.error_detail().unwrap().starts_with("Not a directory"));
    }

    #[test]
    fn test_mkdir_touch_ls_rm() {
        let (mut toolkit, tmp_dir) = setup();

        let mkdir = MakeDirOptions {
            parents: true,
            ..MakeDirOptions::new("a/b")
        };
        assert!(toolkit.mkdir(&mkdir).succeeded());
        assert!(tmp_dir.path().join("a/b").is_dir());

        assert!(toolkit.touch(&TouchOptions::new("a/b/file.txt")).succeeded());

        let ls = toolkit.ls(&ListOptions {
            path: "a/b".to_string(),
            ..Default::default()
        });
        assert_eq!(ls.stdout(), Some("file.txt\n"));

        let rm = RemoveOptions {
            recursive: true,
            ..RemoveOptions::new(["a"])
        };
        assert!(toolkit.rm(&rm).succeeded());
        assert!(!tmp_dir.path().join("a").exists());

        assert_eq!(toolkit.log().len(), 4);
    }

    #[test]
    fn test_touch_no_create() {
        let (mut toolkit, tmp_dir) = setup();
        let options = TouchOptions {
            no_create: true,
            ..TouchOptions::new("ghost")
        };

        assert!(toolkit.touch(&options).succeeded());
        assert!(!tmp_dir.path().join("ghost").exists());
    }

    #[test]
    fn test_chmod() {
        use std::os::unix::fs::PermissionsExt;

        let (mut toolkit, tmp_dir) = setup();
        let file = tmp_dir.path().join("script.sh");
        fs::write(&file, "#!/bin/sh\n").unwrap();

        assert!(toolkit.chmod(&ChmodOptions::new("700", "script.sh")).succeeded());
        let mode = fs::metadata(&file).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o700);
    }

    #[test]
    fn test_grep_no_match_is_exit_one() {
        let (mut toolkit, tmp_dir) = setup();
        fs::write(tmp_dir.path().join("notes.txt"), "alpha\nbeta\n").unwrap();

        let hit = toolkit.grep(&GrepOptions {
            ignore_case: true,
            ..GrepOptions::new("BETA", "notes.txt")
        });
        assert_eq!(hit.stdout(), Some("beta\n"));

        let miss = toolkit.grep(&GrepOptions::new("gamma", "notes.txt"));
        assert!(!miss.succeeded());
        assert_eq!(miss.exit_status(), Some(1));
    }

    #[test]
    fn test_dashed_operands_reach_the_utility() {
        let (mut toolkit, tmp_dir) = setup();
        fs::write(tmp_dir.path().join("-x"), "-foo\n").unwrap();

        let hit = toolkit.grep(&GrepOptions::new("-foo", "-x"));
        assert_eq!(hit.stdout(), Some("-foo\n"));

        let removed = toolkit.rm(&RemoveOptions::new(["-x"]));
        assert!(removed.succeeded());
        assert!(!tmp_dir.path().join("-x").exists());
    }

    #[test]
    fn test_find_by_name() {
        let (mut toolkit, tmp_dir) = setup();
        fs::write(tmp_dir.path().join("keep.rs"), "").unwrap();
        fs::write(tmp_dir.path().join("skip.txt"), "").unwrap();

        let outcome = toolkit.find(&FindOptions {
            name_pattern: Some("*.rs".to_string()),
            file_type: Some("f".to_string()),
            max_depth: Some(1),
            ..Default::default()
        });
        assert_eq!(outcome.stdout(), Some("./keep.rs\n"));
        assert_eq!(outcome.stderr(), Some(""));
    }

    #[test]
    fn test_kill_missing_pid_fails() {
        let (mut toolkit, _tmp_dir) = setup();
        // PIDs are capped well below this on Linux
        let outcome = toolkit.kill(&KillOptions::new(4_000_000));
        assert!(!outcome.succeeded());
    }
}
