//! Session configuration
//!
//! Everything is decided on the command line; this module turns those choices
//! into a word list, a drawing set and a random source.

use crate::drawings::{self, DRAWINGS_FILE, DrawingSet};
use crate::error::Result;
use crate::wordlists::{WordList, discovery, loader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::ffi::OsStr;
use std::fs;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// Where the secret words come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordSource {
    /// An explicit word file
    Path(PathBuf),
    /// Whatever `.txt` word file sits in this directory
    Discover(PathBuf),
    /// The list compiled into the binary
    Embedded,
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub word_source: WordSource,
    pub drawings: Option<PathBuf>,
    pub seed: Option<u64>,
}

impl SessionConfig {
    /// Load the word list, prompting on `output` if several files are found
    ///
    /// Discovery falls back to the embedded list when the directory holds no
    /// word file.
    ///
    /// # Errors
    ///
    /// Propagates loader, discovery and console errors. An explicit word file
    /// that cannot be loaded is always fatal.
    pub fn load_words<R: BufRead, W: Write>(&self, input: &mut R, output: &mut W) -> Result<WordList> {
        match &self.word_source {
            WordSource::Path(path) => loader::load_from_file(path),
            WordSource::Discover(dir) => {
                let mut exclude = vec![OsStr::new(DRAWINGS_FILE)];
                if let Some(name) = self.drawings_name_in(dir) {
                    exclude.push(name);
                }
                let files = discovery::find_word_files(dir, &exclude)?;
                match discovery::select_word_file(&files, input, output)? {
                    Some(path) => loader::load_from_file(path),
                    None => {
                        tracing::warn!(
                            dir = %dir.display(),
                            "no word file found, using the embedded word list"
                        );
                        WordList::embedded()
                    }
                }
            }
            WordSource::Embedded => WordList::embedded(),
        }
    }

    /// File name of the explicit drawing file when it lives in `dir`
    fn drawings_name_in(&self, dir: &Path) -> Option<&OsStr> {
        let path = self.drawings.as_deref()?;
        let name = path.file_name()?;
        let parent = fs::canonicalize(path).ok()?.parent()?.to_path_buf();
        (Some(parent) == fs::canonicalize(dir).ok()).then_some(name)
    }

    /// Load the drawing set
    ///
    /// An explicit drawing file must load. Otherwise the conventional drawing
    /// file is used when the discovery directory has one, and the built-in
    /// stages when it does not.
    ///
    /// # Errors
    ///
    /// Propagates drawing loader errors.
    pub fn load_drawings(&self) -> Result<DrawingSet> {
        if let Some(path) = &self.drawings {
            return drawings::loader::load_from_file(path);
        }

        if let WordSource::Discover(dir) = &self.word_source {
            let candidate = dir.join(DRAWINGS_FILE);
            if candidate.is_file() {
                return drawings::loader::load_from_file(candidate);
            }
        }

        tracing::debug!("using built-in drawings");
        Ok(DrawingSet::builtin())
    }

    /// Random source for the session, seeded when `--seed` was given
    #[must_use]
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HangmanError;
    use crate::wordlists::{EMBEDDED_ORIGIN, WORDS_COUNT};
    use rand::Rng;
    use std::fs;
    use std::io::Cursor;
    use std::path::Path;

    fn config(word_source: WordSource) -> SessionConfig {
        SessionConfig {
            word_source,
            drawings: None,
            seed: Some(5),
        }
    }

    fn load(config: &SessionConfig) -> Result<WordList> {
        config.load_words(&mut Cursor::new(Vec::<u8>::new()), &mut Vec::<u8>::new())
    }

    #[test]
    fn discover_single_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("mots.txt"), "chat chien\n").unwrap();
        fs::write(dir.path().join(DRAWINGS_FILE), "O\n").unwrap();

        let config = config(WordSource::Discover(dir.path().to_path_buf()));
        let words = load(&config).unwrap();
        assert_eq!(words.len(), 2);
        assert_eq!(words.origin(), dir.path().join("mots.txt"));
    }

    #[test]
    fn discover_skips_explicit_drawing_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gallows.txt"), "____\n|\n\n____\n|  O\n").unwrap();

        let mut config = config(WordSource::Discover(dir.path().to_path_buf()));
        config.drawings = Some(dir.path().join("gallows.txt"));

        let words = load(&config).unwrap();
        assert_eq!(words.origin(), Path::new(EMBEDDED_ORIGIN));
        assert_eq!(config.load_drawings().unwrap().len(), 2);
    }

    #[test]
    fn discover_keeps_same_named_file_elsewhere() {
        let dir = tempfile::tempdir().unwrap();
        let other = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("gallows.txt"), "chat\n").unwrap();
        fs::write(other.path().join("gallows.txt"), "O\n").unwrap();

        let mut config = config(WordSource::Discover(dir.path().to_path_buf()));
        config.drawings = Some(other.path().join("gallows.txt"));

        let words = load(&config).unwrap();
        assert_eq!(words.origin(), dir.path().join("gallows.txt"));
    }

    #[test]
    fn discover_nothing_falls_back_to_embedded() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(WordSource::Discover(dir.path().to_path_buf()));

        let words = load(&config).unwrap();
        assert_eq!(words.len(), WORDS_COUNT);
        assert_eq!(words.origin(), Path::new(EMBEDDED_ORIGIN));
    }

    #[test]
    fn explicit_missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let config = config(WordSource::Path(dir.path().join("absent.txt")));
        assert!(matches!(load(&config), Err(HangmanError::FileOpen { .. })));
    }

    #[test]
    fn drawings_found_next_to_word_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(DRAWINGS_FILE), "A\n\nB\n").unwrap();

        let config = config(WordSource::Discover(dir.path().to_path_buf()));
        let set = config.load_drawings().unwrap();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn drawings_default_to_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let discover = config(WordSource::Discover(dir.path().to_path_buf()));
        let embedded = config(WordSource::Embedded);
        assert_eq!(discover.load_drawings().unwrap(), DrawingSet::builtin());
        assert_eq!(embedded.load_drawings().unwrap(), DrawingSet::builtin());
    }

    #[test]
    fn explicit_drawings_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = config(WordSource::Embedded);
        config.drawings = Some(dir.path().join("missing.txt"));
        assert!(matches!(
            config.load_drawings(),
            Err(HangmanError::FileOpen { .. })
        ));
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = config(WordSource::Embedded);
        let a: u64 = config.rng().random();
        let b: u64 = config.rng().random();
        assert_eq!(a, b);
    }
}
