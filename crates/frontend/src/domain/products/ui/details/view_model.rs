use contracts::domain::product::Product;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::rc::Rc;

use super::draft::ProductDraft;
use crate::domain::products::api;
use crate::shared::toast::ToastService;
use crate::shared::upload;

/// ViewModel for the product dialog
#[derive(Clone)]
pub struct ProductFormVm {
    pub draft: RwSignal<ProductDraft>,
    pub error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub uploading: RwSignal<bool>,
}

impl ProductFormVm {
    pub fn new(initial: Option<&Product>) -> Self {
        let draft = match initial {
            Some(product) => ProductDraft::from_product(product),
            None => ProductDraft::default(),
        };
        Self {
            draft: RwSignal::new(draft),
            error: RwSignal::new(None),
            saving: RwSignal::new(false),
            uploading: RwSignal::new(false),
        }
    }

    /// Uploads each picked file in turn and appends the returned URLs.
    /// A file that breaks the upload rules is reported and skipped; the
    /// rest still go through.
    pub fn upload_images(&self, files: Vec<web_sys::File>, toasts: ToastService) {
        if files.is_empty() {
            return;
        }

        let draft = self.draft;
        let uploading = self.uploading;

        uploading.set(true);
        spawn_local(async move {
            for file in files {
                match upload::upload_image(&file).await {
                    Ok(url) => draft.update(|d| d.images.push(url)),
                    Err(e) => toasts.error(e),
                }
            }
            uploading.set(false);
        });
    }

    pub fn remove_image(&self, index: usize) {
        self.draft.update(|d| {
            if index < d.images.len() {
                d.images.remove(index);
            }
        });
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
                Some(id) => api::update_product(id, &payload).await,
                None => api::create_product(&payload).await,
            };
            saving.set(false);
            match result {
                Ok(()) => (on_saved)(()),
                Err(e) => error.set(Some(e)),
            }
        });
    }
}
