//! The content registry: the loaded tutorial shared with the UI layer.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::errors::{Result, StoryError};
use crate::model::{CodeSnippet, CodeView, StoryStep, TutorialContent};

use super::assembler::Assembler;

type LoadOutcome = std::result::Result<(), Arc<StoryError>>;
type SharedLoad = Shared<BoxFuture<'static, LoadOutcome>>;

struct RegistryState {
    tutorial: String,
    /// Bumped on every switch; loads started under an older value are discarded.
    generation: u64,
    content: Option<Arc<TutorialContent>>,
    load: Option<SharedLoad>,
}

/// Holds at most one loaded tutorial.
///
/// Cloning gives another handle to the same state. Concurrent `load` calls
/// share a single assembly; getters never wait for one.
#[derive(Clone)]
pub struct ContentRegistry {
    assembler: Assembler,
    state: Arc<Mutex<RegistryState>>,
}

fn lock(state: &Mutex<RegistryState>) -> MutexGuard<'_, RegistryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

impl ContentRegistry {
    /// Creates a registry for `tutorial`. Nothing is fetched until `load`.
    pub fn new(assembler: Assembler, tutorial: impl Into<String>) -> Self {
        Self {
            assembler,
            state: Arc::new(Mutex::new(RegistryState {
                tutorial: tutorial.into(),
                generation: 0,
                content: None,
                load: None,
            })),
        }
    }

    /// Loads the current tutorial, joining any load already started for it.
    ///
    /// A finished load is reused; use [`reload`](Self::reload) to fetch again.
    /// On a manifest failure the registry holds an empty tutorial and the
    /// error is returned to every waiting caller.
    pub async fn load(&self) -> Result<()> {
        let operation = {
            let mut state = lock(&self.state);
            match state.load.clone() {
                Some(operation) => operation,
                None => {
                    let operation = self.start_load(state.tutorial.clone(), state.generation);
                    state.load = Some(operation.clone());
                    operation
                }
            }
        };

        operation.await.map_err(StoryError::Load)
    }

    /// Alias of [`load`](Self::load) for UI start-up.
    pub async fn initialize(&self) -> Result<()> {
        self.load().await
    }

    /// Drops the current tutorial and loads `tutorial` in its place.
    pub async fn switch_tutorial(&self, tutorial: impl Into<String>) -> Result<()> {
        {
            let mut state = lock(&self.state);
            state.generation += 1;
            state.tutorial = tutorial.into();
            state.content = None;
            state.load = None;
        }
        self.load().await
    }

    /// Fetches the current tutorial again.
    pub async fn reload(&self) -> Result<()> {
        let tutorial = self.tutorial();
        self.switch_tutorial(tutorial).await
    }

    fn start_load(&self, tutorial: String, generation: u64) -> SharedLoad {
        let assembler = self.assembler.clone();
        let state = Arc::clone(&self.state);

        async move {
            let result = assembler.assemble(&tutorial).await;

            let mut state = lock(&state);
            if state.generation != generation {
                tracing::debug!("Discarding superseded load of '{}'", tutorial);
                return result.map(|_| ()).map_err(Arc::new);
            }

            match result {
                Ok(content) => {
                    state.content = Some(Arc::new(content));
                    Ok(())
                }
                Err(e) => {
                    tracing::error!("Failed to load tutorial content: {}", e);
                    state.content = Some(Arc::new(TutorialContent::empty()));
                    Err(Arc::new(e))
                }
            }
        }
        .boxed()
        .shared()
    }

    /// Name of the current tutorial.
    pub fn tutorial(&self) -> String {
        lock(&self.state).tutorial.clone()
    }

    /// Returns true once a load of the current tutorial has finished.
    pub fn is_loaded(&self) -> bool {
        lock(&self.state).content.is_some()
    }

    /// The loaded tutorial, if any.
    pub fn content(&self) -> Option<Arc<TutorialContent>> {
        lock(&self.state).content.clone()
    }

    /// Steps of the loaded tutorial; empty before a load completes.
    pub fn story_steps(&self) -> Vec<StoryStep> {
        self.content()
            .map(|content| content.story.clone())
            .unwrap_or_default()
    }

    /// Snippet for `key`.
    ///
    /// Before a load completes this is the loading placeholder; for an unknown
    /// key it is the not-found placeholder.
    pub fn snippet(&self, key: &str) -> Arc<CodeSnippet> {
        let language = &self.assembler.config().snippet.default_language;
        match self.content() {
            None => Arc::new(CodeSnippet::loading(language)),
            Some(content) => content
                .snippet(key)
                .cloned()
                .unwrap_or_else(|| Arc::new(CodeSnippet::not_found(language))),
        }
    }

    /// What the code viewer should show for `key`.
    pub fn code_view(&self, key: &str) -> CodeView {
        if let Some(view) = self.content().and_then(|c| c.code_view(key)) {
            return view;
        }
        let snippet = self.snippet(key);
        CodeView {
            title: snippet.title.clone(),
            language: snippet.language.clone(),
            code: snippet.code.clone(),
            highlight: snippet.highlight,
        }
    }
}

impl fmt::Debug for ContentRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = lock(&self.state);
        f.debug_struct("ContentRegistry")
            .field("tutorial", &state.tutorial)
            .field("generation", &state.generation)
            .field("loaded", &state.content.is_some())
            .field("loading", &state.load.is_some())
            .finish()
    }
}
