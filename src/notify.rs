/// User-facing notification channel. The browser pushes selection
/// confirmations and content-error reports here; the host UI drains and
/// displays them however it likes.
#[derive(Default)]
pub struct Notifications {
    messages: Vec<String>,
}

impl Notifications {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn drain(&mut self) -> Vec<String> {
        self.messages.drain(..).collect()
    }

    pub fn latest(&self) -> Option<&str> {
        self.messages.last().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}
