use regex::Regex;
use std::sync::OnceLock;

static MOBILE_RE: OnceLock<Regex> = OnceLock::new();

/// Valid mobiles are ten digits starting with 9 (entered without the
/// leading zero).
fn mobile_re() -> &'static Regex {
    MOBILE_RE.get_or_init(|| Regex::new(r"^9[0-9]{9}$").expect("static pattern compiles"))
}

/// Mobile-number entry buffer. Non-digit input is filtered, never an
/// error.
#[derive(Debug, Default)]
pub struct LoginForm {
    mobile: String,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() {
            self.mobile.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.mobile.pop();
    }

    pub fn clear(&mut self) {
        self.mobile.clear();
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn is_valid(&self) -> bool {
        mobile_re().is_match(&self.mobile)
    }

    /// The form stored while verification is pending: the entered digits
    /// with the leading zero restored.
    pub fn pending_value(&self) -> String {
        format!("0{}", self.mobile)
    }
}

/// Group an eleven-digit number for display: `0912 345 6789`.
pub fn format_mobile_display(mobile: &str) -> String {
    if mobile.len() == 11 {
        format!("{} {} {}", &mobile[..4], &mobile[4..7], &mobile[7..])
    } else {
        mobile.to_string()
    }
}
