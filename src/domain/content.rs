use crate::error::OrderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Vn,
    En,
}

impl Language {
    /// Generic retry prompt shown when an order could not be sent.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Language::Vn => "Có lỗi xảy ra. Vui lòng thử lại.",
            Language::En => "Something went wrong. Please try again.",
        }
    }

    /// Submit button text while a send is in flight.
    pub fn sending_label(&self) -> &'static str {
        match self {
            Language::Vn => "Đang gửi...",
            Language::En => "Sending...",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Vn => "vn",
            Language::En => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = OrderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vn" | "vi" => Ok(Language::Vn),
            "en" => Ok(Language::En),
            other => Err(OrderError::ValidationError(format!(
                "Unsupported language: {other}"
            ))),
        }
    }
}

/// User-facing copy for the order page, supplied per language by a
/// [`ContentProvider`](super::ports::ContentProvider).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPageContent {
    pub form_title: String,
    pub form_intro: String,
    pub confirm_order: String,
    pub confirmation_title: String,
    pub confirmation_body: String,
    pub confirmation_follow_up: String,
    pub contact_prompt: String,
    pub contact_url: String,
    pub back_to_collection: String,
}
