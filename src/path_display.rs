use std::fmt::Display;
use std::path::Path;
use std::path::MAIN_SEPARATOR_STR;

use camino::Utf8Path;
use owo_colors::OwoColorize;
use owo_colors::Stream;
use path_absolutize::Absolutize;

use crate::current_dir::current_dir_utf8;

/// A way to display a path "nicely" in log messages.
pub trait PathDisplay {
    /// Display this path relative to the current directory, if possible.
    fn display_path_cwd(&self) -> String;

    /// Display this path relative to `base`, if possible.
    fn display_path_from(&self, base: &Utf8Path) -> String;
}

impl<P> PathDisplay for P
where
    P: AsRef<Utf8Path>,
{
    fn display_path_cwd(&self) -> String {
        match current_dir_utf8() {
            Ok(cwd) => self.display_path_from(&cwd),
            Err(error) => {
                tracing::debug!(
                    %error,
                    path=%self.as_ref(),
                    "Failed to get current working directory for displaying path"
                );
                make_colorful(self.as_ref())
            }
        }
    }

    fn display_path_from(&self, base: &Utf8Path) -> String {
        make_colorful(nice_path(self.as_ref(), base))
    }
}

fn make_colorful(path: impl Display) -> String {
    path.if_supports_color(Stream::Stderr, |text| text.cyan())
        .to_string()
}

fn nice_path(path: &Utf8Path, base: &Utf8Path) -> String {
    let absolute = match path.as_std_path().absolutize_from(base) {
        Ok(absolute) => absolute,
        Err(_) => return path.to_string(),
    };
    let absolute: &Path = absolute.as_ref();
    let absolute = match Utf8Path::from_path(absolute) {
        Some(absolute) => absolute,
        None => return path.to_string(),
    };

    if let Ok(from_base) = absolute.strip_prefix(base) {
        if from_base.as_str().is_empty() {
            return ".".to_owned();
        }
        return format!(".{MAIN_SEPARATOR_STR}{from_base}");
    }

    if let Some(home) = dirs::home_dir() {
        if let Ok(from_home) = absolute.strip_prefix(&home) {
            return format!("~{MAIN_SEPARATOR_STR}{from_home}");
        }
    }

    absolute.to_string()
}
