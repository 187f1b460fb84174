use contracts::domain::category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::draft::CategoryDraft;
use crate::domain::categories::api;
use crate::shared::toast::ToastService;
use crate::shared::upload;

/// ViewModel for the category dialog
#[derive(Clone)]
pub struct CategoryFormVm {
    pub draft: RwSignal<CategoryDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
}

impl CategoryFormVm {
    pub fn new(initial: Option<&Category>) -> Self {
        let draft = match initial {
            Some(category) => CategoryDraft::from_category(category),
            None => CategoryDraft::default(),
        };
        Self {
            draft: RwSignal::new(draft),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
        }
    }

    pub fn set_name(&self, value: String) {
        self.draft.update(|d| d.apply_name(value));
    }

    /// Uploads the picked file and stores the returned URL in the draft.
    /// Files that break the upload rules are reported and never sent.
    pub fn upload_image(&self, file: web_sys::File, toasts: ToastService) {
        let draft = self.draft;
        let uploading = self.uploading;

        uploading.set(true);
        spawn_local(async move {
            match upload::upload_image(&file).await {
                Ok(url) => draft.update(|d| d.image = url),
                Err(e) => toasts.error(e),
            }
            uploading.set(false);
        });
    }

    pub fn remove_image(&self) {
        self.draft.update(|d| d.image.clear());
    }

    /// Parses and submits the draft. Field problems stay local to the
    /// dialog; the list is told through `on_saved` only on success.
    pub fn save_command(&self, on_saved: Rc<dyn Fn(())>) {
        // Enter can re-submit the form past the disabled button
        if self.saving.get_untracked() || self.uploading.get_untracked() {
            return;
        }

        let current = self.draft.get();

        let payload = match current.parse() {
            Ok(p) => p,
            Err(e) => {
                self.error.set(Some(e));
                return;
            }
        };

        let error = self.error;
        let saving = self.saving;

        self.error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result = match &current.id {
                Some(id) => api::update_category(id, &payload).await,
                None => api::create_category(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
