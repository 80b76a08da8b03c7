//! # Study Assistant
//!
//! Canned-reply engine behind the chat screen. Replies are selected by
//! keyword lookup over the user message; there is no model or backend,
//! and the typing delay is simulated.

use rand::Rng;
use std::time::Duration;

/// Recognition language for the (optional) voice input collaborator.
pub const SPEECH_LANG: &str = "fa-IR";

/// Prompts offered as one-tap chips before the first message.
pub const SUGGESTED_QUESTIONS: &[&str] = &[
    "تفسیر سوره حمد را توضیح بده",
    "احادیثی درباره صبر می‌خواهم",
    "احکام نماز مسافر چیست؟",
];

const REPLY_TAFSIR: &str =
    "برای تفسیر آیه مورد نظر، لطفاً آیه را بنویسید تا تفسیر کاملی از منابع معتبر برای شما ارائه دهم.";
const REPLY_HADITH: &str =
    "در زمینه احادیث، می‌توانم به شما کمک کنم. لطفاً موضوع خاصی را مشخص کنید تا احادیث مرتبط را جستجو کنم.";
const REPLY_NAMAZ: &str =
    "نماز ستون دین است. کدام بخش از احکام نماز را می‌خواهید بدانید؟ (واجبات، مستحبات، مبطلات، شرایط)";
const REPLY_DEFAULT: &str =
    "سوال جالبی است! اجازه دهید در منابع محبوب جستجو کنم و پاسخ دقیقی به شما بدهم. 📚";

/// Pick the canned reply for a user message.
pub fn canned_reply(message: &str) -> &'static str {
    if message.contains("تفسیر") || message.contains("آیه") {
        REPLY_TAFSIR
    } else if message.contains("حدیث") || message.contains("روایت") {
        REPLY_HADITH
    } else if message.contains("نماز") {
        REPLY_NAMAZ
    } else {
        REPLY_DEFAULT
    }
}

/// Simulated typing time before a reply lands: 1.5s plus up to 1s.
pub fn reply_delay<R: Rng + ?Sized>(rng: &mut R) -> Duration {
    Duration::from_millis(1500 + rng.random_range(0..1000))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

/// Ordered transcript of the conversation.
#[derive(Debug, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            text: text.into(),
            sender: Sender::User,
        });
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage {
            text: text.into(),
            sender: Sender::Assistant,
        });
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Reasons voice capture can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RecognitionError {
    #[error("صدایی دریافت نشد. دوباره تلاش کنید.")]
    NoSpeech,
    #[error("دسترسی به میکروفون رد شد.")]
    MicrophoneDenied,
    #[error("تشخیص صدا پشتیبانی نمی‌شود")]
    Unsupported,
}

/// Voice input collaborator: single-shot, non-continuous, Persian.
/// When unsupported the chat screen hides its voice control instead of
/// surfacing an error.
pub trait SpeechRecognizer {
    fn is_supported(&self) -> bool;
    fn recognize(&mut self) -> Result<String, RecognitionError>;
}

/// The shipped recognizer: terminals have no speech backend.
#[derive(Debug, Default)]
pub struct UnsupportedRecognizer;

impl SpeechRecognizer for UnsupportedRecognizer {
    fn is_supported(&self) -> bool {
        false
    }

    fn recognize(&mut self) -> Result<String, RecognitionError> {
        Err(RecognitionError::Unsupported)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_keyword_tafsir() {
        assert_eq!(canned_reply("تفسیر سوره بقره"), REPLY_TAFSIR);
        assert_eq!(canned_reply("این آیه یعنی چه؟"), REPLY_TAFSIR);
    }

    #[test]
    fn test_keyword_hadith() {
        assert_eq!(canned_reply("یک حدیث درباره علم"), REPLY_HADITH);
        assert_eq!(canned_reply("روایت معتبر می‌خواهم"), REPLY_HADITH);
    }

    #[test]
    fn test_keyword_namaz() {
        assert_eq!(canned_reply("شرایط نماز جماعت"), REPLY_NAMAZ);
    }

    #[test]
    fn test_unknown_input_gets_default() {
        assert_eq!(canned_reply("سلام"), REPLY_DEFAULT);
        assert_eq!(canned_reply(""), REPLY_DEFAULT);
    }

    #[test]
    fn test_reply_delay_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            let d = reply_delay(&mut rng);
            assert!(d >= Duration::from_millis(1500));
            assert!(d < Duration::from_millis(2500));
        }
    }

    #[test]
    fn test_chat_log_order() {
        let mut log = ChatLog::new();
        assert!(log.is_empty());

        log.push_user("سلام");
        log.push_assistant("علیک سلام");

        let messages = log.messages();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[1].sender, Sender::Assistant);
    }

    #[test]
    fn test_shipped_recognizer_is_unsupported() {
        let mut recognizer = UnsupportedRecognizer;
        assert!(!recognizer.is_supported());
        assert_eq!(recognizer.recognize(), Err(RecognitionError::Unsupported));
    }
}
