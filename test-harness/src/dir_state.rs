use camino::Utf8Path;
use camino::Utf8PathBuf;
use expect_test::Expect;
use fs_err as fs;
use git_dir::format_bulleted_list;
use pretty_assertions::Comparison;
use walkdir::WalkDir;

/// A directory's expected state, which can be checked against a real directory.
#[derive(Debug)]
pub struct DirState {
    root: Utf8PathBuf,
    files: Vec<(String, Expect)>,
    exact: bool,
}

impl DirState {
    /// Expect a directory at the given path.
    pub fn new(root: Utf8PathBuf) -> Self {
        Self {
            root,
            files: Default::default(),
            exact: false,
        }
    }

    /// Expect a file with the given contents, relative to the directory root.
    pub fn file(mut self, path: &str, contents: Expect) -> Self {
        self.files.push((path.into(), contents));
        self
    }

    /// Expect the directory to contain no files except the ones given with [`Self::file`].
    pub fn only(mut self) -> Self {
        self.exact = true;
        self
    }

    /// Assert that the directory state matches the actual directory.
    ///
    /// # Panics
    ///
    /// If the directory state doesn't match the actual directory.
    #[track_caller]
    pub fn assert(&self) {
        if !self.root.is_dir() {
            panic!("Directory doesn't exist: {}", self.root);
        }

        let mut problems = Vec::new();

        for (path, contents) in &self.files {
            let actual_path = self.root.join(path);
            if !actual_path.exists() {
                problems.push(format!("Expected path does not exist: {path}"));
                continue;
            }

            match fs::read_to_string(&actual_path) {
                Ok(actual_contents) => {
                    contents.assert_eq(&actual_contents);
                }
                Err(err) => {
                    problems.push(format!("Failed to read {path}: {err}"));
                }
            }
        }

        if self.exact {
            let mut expected = self
                .files
                .iter()
                .map(|(path, _)| path.clone())
                .collect::<Vec<_>>();
            expected.sort();
            let actual = list_files(&self.root);
            if actual != expected {
                problems.push(format!(
                    "Files in {} differ:\n{}",
                    self.root,
                    Comparison::new(&actual, &expected)
                ));
            }
        }

        if !problems.is_empty() {
            panic!("{}", format_bulleted_list(problems));
        }
    }
}

/// List the files (not directories) under `root`, relative to `root` and sorted.
fn list_files(root: &Utf8Path) -> Vec<String> {
    let mut files = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|entry| !entry.file_type().is_dir())
        .filter_map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .ok()
                .and_then(|path| path.to_str())
                .map(|path| path.to_owned())
        })
        .collect::<Vec<_>>();
    files.sort();
    files
}
