//! Runtime state of the ad board.
//!
//! The board owns the ranked ads, the form configuration fetched from the
//! server, and the state of its two dialogs (the ad editor and the video
//! player). Fields are `pub` because `update` and `view` read them directly.

use common::model::ad::Ad;
use common::model::form_config::FormFieldConfig;
use common::requests::FieldError;
use std::collections::HashMap;
use web_sys::File;
use yew::prelude::*;

/// What submitting the editor does.
#[derive(Clone, PartialEq)]
pub enum EditorMode {
    /// Empty form, submitted as a new ad.
    Create,
    /// Pre-filled from an existing ad, submitted as a new ad.
    Copy,
    /// Pre-filled from the ad with this id, submitted as an update.
    Edit(String),
}

/// Open ad editor dialog.
pub struct Editor {
    pub mode: EditorMode,
    /// Text values keyed by form field name.
    pub values: HashMap<String, String>,
    /// Files picked in the upload input.
    pub files: Vec<File>,
    /// Only offered in `Edit` mode: replace the current videos instead of appending.
    pub replace_videos: bool,
    pub errors: Vec<FieldError>,
    pub submitting: bool,
}

impl Editor {
    pub fn new(mode: EditorMode, values: HashMap<String, String>) -> Self {
        Self {
            mode,
            values,
            files: Vec::new(),
            replace_videos: false,
            errors: Vec::new(),
            submitting: false,
        }
    }

    /// Pre-fills every text field of `config` from `ad`.
    pub fn from_ad(mode: EditorMode, ad: &Ad, config: &[FormFieldConfig]) -> Self {
        let values = config
            .iter()
            .filter(|field| !field.is_file())
            .filter_map(|field| {
                ad.field_value(field.field())
                    .map(|value| (field.field().to_string(), value))
            })
            .collect();
        Self::new(mode, values)
    }

    pub fn value(&self, field: &str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }

    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            EditorMode::Create => "New ad",
            EditorMode::Copy => "Copy ad",
            EditorMode::Edit(_) => "Edit ad",
        }
    }
}

/// Video currently playing before the landing page opens.
pub struct Playback {
    pub title: String,
    pub video_url: String,
    pub landing_url: String,
}

pub struct AdBoard {
    /// Ads in ranking order.
    pub ads: Vec<Ad>,
    pub form_config: Vec<FormFieldConfig>,
    /// True until the first `GET /api/ads` answers.
    pub loading: bool,
    pub editor: Option<Editor>,
    pub playback: Option<Playback>,
    pub editor_ref: NodeRef,
    pub player_ref: NodeRef,
    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl AdBoard {
    pub fn new() -> Self {
        Self {
            ads: Vec::new(),
            form_config: Vec::new(),
            loading: true,
            editor: None,
            playback: None,
            editor_ref: Default::default(),
            player_ref: Default::default(),
            loaded: false,
        }
    }

    pub fn find(&self, id: &str) -> Option<&Ad> {
        self.ads.iter().find(|ad| ad.id == id)
    }
}
