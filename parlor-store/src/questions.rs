use std::path::PathBuf;
use std::str::FromStr;
use std::sync::{Arc, Mutex, MutexGuard};

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::info;

use crate::error::QuestionError;
use crate::model::{Category, Mode, QuestionsDoc};
use crate::persist::{load_or_init, save_atomic};

/// Shared handle to the in-memory question bank.
///
/// Cloning is cheap; all clones see the same document. The mutex serializes
/// every read-modify-persist sequence, so a mutation and its file rewrite
/// form one critical section.
#[derive(Clone, Debug)]
pub struct QuestionBank {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    path: PathBuf,
    doc: Mutex<QuestionsDoc>,
}

impl QuestionBank {
    /// Load the questions document at `path`, creating it with the built-in
    /// starter set when absent. Categories missing from a loaded document
    /// get empty pools.
    pub fn open(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        let mut doc = load_or_init(&path, QuestionsDoc::with_defaults())?;
        doc.repair();

        let bank = Self {
            inner: Arc::new(Inner {
                path,
                doc: Mutex::new(doc),
            }),
        };
        info!(
            path = %bank.inner.path.display(),
            prompts = bank.total_prompts(),
            "question bank loaded"
        );
        Ok(bank)
    }

    /// Draw a uniformly random prompt from the (category, mode) pool.
    /// Repeats across draws are allowed.
    pub fn draw(&self, category: Category, mode: Mode) -> Result<String, QuestionError> {
        self.draw_with(category, mode, &mut rand::thread_rng())
    }

    /// `draw` with a caller-supplied source of randomness.
    pub fn draw_with<R: Rng>(
        &self,
        category: Category,
        mode: Mode,
        rng: &mut R,
    ) -> Result<String, QuestionError> {
        let doc = self.doc();
        let pool = doc
            .categories
            .get(&category)
            .map(|pools| pools.pool(mode))
            .unwrap_or_default();

        pool.choose(rng)
            .cloned()
            .ok_or(QuestionError::EmptyPool { category, mode })
    }

    /// Draw for a raw category string, e.g. from a web query parameter.
    pub fn draw_str(&self, raw_category: &str, mode: Mode) -> Result<String, QuestionError> {
        let category = Category::from_str(raw_category)?;
        self.draw(category, mode)
    }

    /// Append a prompt to the (category, mode) pool and persist. Prompts are
    /// not deduplicated on insert.
    pub fn add(&self, category: Category, mode: Mode, prompt: &str) -> anyhow::Result<()> {
        let mut doc = self.doc();
        doc.categories
            .entry(category)
            .or_default()
            .pool_mut(mode)
            .push(prompt.to_owned());
        save_atomic(&self.inner.path, &*doc)
    }

    /// Remove the first verbatim occurrence of `prompt` from the pool and
    /// persist. The pool is left untouched when the prompt is absent.
    pub fn remove(
        &self,
        category: Category,
        mode: Mode,
        prompt: &str,
    ) -> anyhow::Result<Result<(), QuestionError>> {
        let mut doc = self.doc();
        let pool = doc
            .categories
            .entry(category)
            .or_default()
            .pool_mut(mode);

        let Some(index) = pool.iter().position(|existing| existing == prompt) else {
            return Ok(Err(QuestionError::PromptNotFound { category, mode }));
        };

        pool.remove(index);
        save_atomic(&self.inner.path, &*doc)?;
        Ok(Ok(()))
    }

    /// Number of prompts in one pool.
    pub fn pool_len(&self, category: Category, mode: Mode) -> usize {
        self.doc()
            .categories
            .get(&category)
            .map_or(0, |pools| pools.pool(mode).len())
    }

    /// Total prompts across all categories and modes.
    pub fn total_prompts(&self) -> usize {
        self.doc()
            .categories
            .values()
            .map(|pools| pools.sfw.len() + pools.nsfw.len())
            .sum()
    }

    fn doc(&self) -> MutexGuard<'_, QuestionsDoc> {
        self.inner
            .doc
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    #[cfg(test)]
    fn path(&self) -> &PathBuf {
        &self.inner.path
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::QuestionBank;
    use crate::error::QuestionError;
    use crate::model::{Category, Mode};

    fn bank_with(dir: &tempfile::TempDir, raw: &str) -> QuestionBank {
        let path = dir.path().join("questions.json");
        std::fs::write(&path, raw).unwrap();
        QuestionBank::open(path).unwrap()
    }

    #[test]
    fn open_creates_defaults_when_absent() {
        let dir = tempfile::tempdir().unwrap();
        let bank = QuestionBank::open(dir.path().join("questions.json")).unwrap();

        for category in Category::ALL {
            assert_eq!(bank.pool_len(category, Mode::Sfw), 1);
            assert_eq!(bank.pool_len(category, Mode::Nsfw), 1);
        }
        assert!(bank.path().exists());
    }

    #[test]
    fn draw_returns_pool_members_and_covers_them_all() {
        let dir = tempfile::tempdir().unwrap();
        let bank = bank_with(
            &dir,
            r#"{"truth": {"sfw": ["A", "B", "C"], "nsfw": []}}"#,
        );

        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = BTreeSet::new();
        for _ in 0..200 {
            let prompt = bank.draw_with(Category::Truth, Mode::Sfw, &mut rng).unwrap();
            assert!(["A", "B", "C"].contains(&prompt.as_str()));
            seen.insert(prompt);
        }
        assert_eq!(seen.len(), 3);
    }

    #[test]
    fn empty_pool_is_a_placeholder_not_a_failure() {
        let dir = tempfile::tempdir().unwrap();
        let bank = bank_with(&dir, r#"{"truth": {"sfw": ["A"], "nsfw": []}}"#);

        let err = bank.draw(Category::Truth, Mode::Nsfw).unwrap_err();
        assert_eq!(
            err,
            QuestionError::EmptyPool {
                category: Category::Truth,
                mode: Mode::Nsfw,
            }
        );
        assert!(err.is_informational());
    }

    #[test]
    fn unknown_category_string_is_rejected_consistently() {
        let dir = tempfile::tempdir().unwrap();
        let bank = bank_with(&dir, r#"{"truth": {"sfw": ["A"], "nsfw": []}}"#);

        for raw in ["riddle", "", "TRUTHS"] {
            assert!(matches!(
                bank.draw_str(raw, Mode::Sfw),
                Err(QuestionError::UnknownCategory(_))
            ));
        }
    }

    #[test]
    fn add_then_remove_restores_the_pool() {
        let dir = tempfile::tempdir().unwrap();
        let bank = bank_with(&dir, r#"{"dare": {"sfw": ["A", "B"], "nsfw": []}}"#);

        bank.add(Category::Dare, Mode::Sfw, "X").unwrap();
        assert_eq!(bank.pool_len(Category::Dare, Mode::Sfw), 3);

        bank.remove(Category::Dare, Mode::Sfw, "X").unwrap().unwrap();
        assert_eq!(bank.pool_len(Category::Dare, Mode::Sfw), 2);

        let reloaded = QuestionBank::open(bank.path()).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let prompt = reloaded
                .draw_with(Category::Dare, Mode::Sfw, &mut rng)
                .unwrap();
            assert!(["A", "B"].contains(&prompt.as_str()));
        }
    }

    #[test]
    fn removing_an_absent_prompt_leaves_the_pool_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let bank = bank_with(&dir, r#"{"wyr": {"sfw": ["A"], "nsfw": []}}"#);

        let outcome = bank.remove(Category::Wyr, Mode::Sfw, "missing").unwrap();
        assert_eq!(
            outcome,
            Err(QuestionError::PromptNotFound {
                category: Category::Wyr,
                mode: Mode::Sfw,
            })
        );
        assert_eq!(bank.pool_len(Category::Wyr, Mode::Sfw), 1);
    }

    #[test]
    fn mutations_survive_a_reload() {
        let dir = tempfile::tempdir().unwrap();
        let bank = bank_with(&dir, r#"{"ama": {"sfw": [], "nsfw": []}}"#);

        bank.add(Category::Ama, Mode::Nsfw, "B").unwrap();

        let reloaded = QuestionBank::open(bank.path()).unwrap();
        assert_eq!(reloaded.pool_len(Category::Ama, Mode::Nsfw), 1);
        assert_eq!(reloaded.draw(Category::Ama, Mode::Nsfw).unwrap(), "B");
    }

    #[test]
    fn draw_add_draw_walkthrough() {
        let dir = tempfile::tempdir().unwrap();
        let bank = bank_with(&dir, r#"{"truth": {"sfw": ["A"], "nsfw": []}}"#);

        assert_eq!(bank.draw(Category::Truth, Mode::Sfw).unwrap(), "A");
        assert!(bank.draw(Category::Truth, Mode::Nsfw).is_err());

        bank.add(Category::Truth, Mode::Nsfw, "B").unwrap();
        assert_eq!(bank.pool_len(Category::Truth, Mode::Nsfw), 1);
        assert_eq!(bank.draw(Category::Truth, Mode::Nsfw).unwrap(), "B");
    }
}
