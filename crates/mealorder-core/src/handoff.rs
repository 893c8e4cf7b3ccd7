use crate::error::{MealOrderError, Result};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters left unescaped in a URI component: `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(text: &str) -> String {
    utf8_percent_encode(text, COMPONENT).to_string()
}

// ---------------------------------------------------------------------------
// MessageLink
// ---------------------------------------------------------------------------

/// A pre-filled message addressed to the order contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLink {
    phone: String,
    message: String,
}

impl MessageLink {
    /// `contact` may contain spaces, dashes or a leading `+`; only the
    /// digits are kept.
    pub fn new(contact: &str, message: impl Into<String>) -> Self {
        Self {
            phone: contact.chars().filter(char::is_ascii_digit).collect(),
            message: message.into(),
        }
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Deep link handled by an installed messaging app.
    pub fn app_url(&self) -> String {
        format!(
            "whatsapp://send?phone={}&text={}",
            self.phone,
            encode_component(&self.message)
        )
    }

    /// Web link used when no app accepts [`MessageLink::app_url`].
    pub fn web_url(&self) -> String {
        format!(
            "https://wa.me/{}?text={}",
            self.phone,
            encode_component(&self.message)
        )
    }
}

// ---------------------------------------------------------------------------
// Hand-off
// ---------------------------------------------------------------------------

/// Something that can launch a URL, typically the OS default handler.
pub trait UrlOpener {
    fn open_url(&self, url: &str) -> std::io::Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOffRoute {
    App,
    Web,
}

impl HandOffRoute {
    pub fn as_str(self) -> &'static str {
        match self {
            HandOffRoute::App => "app",
            HandOffRoute::Web => "web",
        }
    }
}

/// Open the app link, falling back once to the web link.
///
/// Fire-and-forget: success only means a handler accepted the URL.
pub fn hand_off(link: &MessageLink, opener: &dyn UrlOpener) -> Result<HandOffRoute> {
    match opener.open_url(&link.app_url()) {
        Ok(()) => return Ok(HandOffRoute::App),
        Err(e) => tracing::debug!(error = %e, "app link rejected, trying web link"),
    }
    match opener.open_url(&link.web_url()) {
        Ok(()) => Ok(HandOffRoute::Web),
        Err(e) => {
            tracing::warn!(error = %e, "web link rejected");
            Err(MealOrderError::HandOffUnavailable)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
