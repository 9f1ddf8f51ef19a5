use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedText {
    text: String,
    delay: Duration,
    shown: usize,
}

impl TypedText {
    pub fn new(text: impl Into<String>, delay: Duration) -> Self {
        Self {
            text: text.into(),
            delay,
            shown: 0,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn current(&self) -> &str {
        &self.text[..self.shown]
    }

    pub fn is_complete(&self) -> bool {
        self.shown == self.text.len()
    }

    pub fn advance(&mut self) -> bool {
        match self.text[self.shown..].chars().next() {
            Some(c) => {
                self.shown += c.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn frames(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(0)
            .chain(self.text.char_indices().map(|(i, c)| i + c.len_utf8()))
            .map(|end| &self.text[..end])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frames_cover_every_prefix() {
        let typed = TypedText::new("Full Stack Developer", TYPE_DELAY);
        let frames = typed.frames().collect::<Vec<_>>();
        assert_eq!(frames.len(), "Full Stack Developer".len() + 1);
        assert_eq!(frames[0], "");
        assert_eq!(frames[1], "F");
        assert_eq!(*frames.last().unwrap(), "Full Stack Developer");
    }

    #[test]
    fn test_advance_matches_frames() {
        let mut typed = TypedText::new("Full Stack Developer", Duration::from_millis(5));
        let frames = typed.frames().map(str::to_string).collect::<Vec<_>>();
        let mut seen = vec![typed.current().to_string()];
        while typed.advance() {
            seen.push(typed.current().to_string());
        }
        assert_eq!(seen, frames);
        assert!(typed.is_complete());
        assert!(!typed.advance());
        assert_eq!(typed.current(), "Full Stack Developer");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut typed = TypedText::new("héllo ✗", TYPE_DELAY);
        assert_eq!(typed.frames().count(), 8);
        typed.advance();
        typed.advance();
        assert_eq!(typed.current(), "hé");
    }

    #[test]
    fn test_empty_string_is_already_complete() {
        let typed = TypedText::new("", TYPE_DELAY);
        assert!(typed.is_complete());
        assert_eq!(typed.frames().collect::<Vec<_>>(), vec![""]);
    }
}
