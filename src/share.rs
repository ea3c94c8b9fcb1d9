//! Share text and social links for a computed profile.

use serde::Serialize;

use crate::age::AgeDuration;
use crate::zodiac::ZodiacSign;

pub fn share_text(age: &AgeDuration, sign: &ZodiacSign) -> String {
    format!(
        "I am {} years, {} months, and {} days old.\nMy zodiac sign is {} {}\nCheck your age with this vintage calculator!",
        age.years, age.months, age.days, sign.name, sign.emoji
    )
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareLinks {
    pub text: String,
    pub twitter: String,
    pub facebook: String,
    pub linkedin: String,
}

impl ShareLinks {
    pub fn new(text: &str, page_url: &str) -> Self {
        let text_enc = urlencoding::encode(text);
        let url_enc = urlencoding::encode(page_url);

        Self {
            text: text.to_string(),
            twitter: format!("https://twitter.com/intent/tweet?text={text_enc}&url={url_enc}"),
            facebook: format!(
                "https://www.facebook.com/sharer/sharer.php?u={url_enc}&quote={text_enc}"
            ),
            linkedin: format!("https://www.linkedin.com/sharing/share-offsite/?url={url_enc}"),
        }
    }
}
