use crate::error::{ProdgenError, Result};
use crate::generator::{CompletionRequest, TextGenerator};
use crate::product::ProductRecord;
use serde_json::json;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

/// Switches the working directory for the guard's lifetime.
pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // The working directory is process-global; hold the lock even under #[serial].
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Backend that replays canned responses in order and records every request.
#[derive(Default)]
pub(crate) struct ScriptedGenerator {
    responses: Mutex<VecDeque<String>>,
    images: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<CompletionRequest>>,
    image_prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub(crate) fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            responses: Mutex::new(responses.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub(crate) fn with_image(self, url: &str) -> Self {
        self.images.lock().unwrap().push_back(url.to_string());
        self
    }

    pub(crate) fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn image_prompts(&self) -> Vec<String> {
        self.image_prompts.lock().unwrap().clone()
    }
}

impl TextGenerator for ScriptedGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ProdgenError::GenerationError("script exhausted".to_string()))
    }

    fn generate_image(&self, prompt: &str) -> Result<String> {
        self.image_prompts.lock().unwrap().push(prompt.to_string());
        self.images
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ProdgenError::GenerationError("no image scripted".to_string()))
    }
}

/// A backpack with only its basics filled in.
pub(crate) fn partial_backpack() -> ProductRecord {
    ProductRecord::from_value(json!({
        "name": "Trail Pack 30L",
        "brand": "Summit",
        "price": 89.99,
        "colors": ["Forest Green", "Black"],
        "basic_description": "A 30 liter pack for day hikes."
    }))
    .unwrap()
}

/// A backpack with every completable field present.
pub(crate) fn complete_backpack() -> ProductRecord {
    ProductRecord::from_value(json!({
        "name": "Trail Pack 30L",
        "brand": "Summit",
        "price": 89.99,
        "category": "Bags",
        "subcategory": "Backpacks",
        "features": ["Waterproof shell", "Padded straps", "Laptop sleeve"],
        "materials": ["Ripstop nylon"],
        "colors": ["Forest Green"],
        "tags": ["hiking", "travel", "outdoor"],
        "basic_description": "A 30 liter pack for day hikes."
    }))
    .unwrap()
}
