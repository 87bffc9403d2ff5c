//! src/client/captcha.rs
pub const VERIFICATION_PROMPT: &str = "Please complete the reCAPTCHA verification";
pub const LAPSED_PROMPT: &str = "The verification expired, please verify again";

/// Token used when the gate is opened by hand in demo configurations.
pub const DEMO_TOKEN: &str = "demo-verification";

/// Handle on the browser challenge widget.
pub trait ChallengeWidget {
    fn reset_challenge(&self);
}

/// Widget stand-in for configurations without a site key.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopWidget;

impl ChallengeWidget for NoopWidget {
    fn reset_challenge(&self) {}
}

/// Client side CAPTCHA state. Submitting is only possible while `Verified`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CaptchaGate {
    #[default]
    Unverified,
    Verified(String),
    /// The token expired or the widget errored.
    Lapsed,
}

impl CaptchaGate {
    /// A blank token leaves the gate as it was.
    pub fn complete(&mut self, token: impl Into<String>) {
        let token = token.into();
        if !token.trim().is_empty() {
            *self = CaptchaGate::Verified(token);
        }
    }

    pub fn manual_override(&mut self) {
        *self = CaptchaGate::Verified(DEMO_TOKEN.to_string());
    }

    pub fn expire(&mut self) {
        *self = CaptchaGate::Lapsed;
    }

    pub fn fail(&mut self) {
        *self = CaptchaGate::Lapsed;
    }

    pub fn reset(&mut self) {
        *self = CaptchaGate::Unverified;
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            CaptchaGate::Verified(token) => Some(token),
            CaptchaGate::Unverified | CaptchaGate::Lapsed => None,
        }
    }

    pub fn is_verified(&self) -> bool {
        self.token().is_some()
    }

    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            CaptchaGate::Verified(_) => None,
            CaptchaGate::Unverified => Some(VERIFICATION_PROMPT),
            CaptchaGate::Lapsed => Some(LAPSED_PROMPT),
        }
    }
}
