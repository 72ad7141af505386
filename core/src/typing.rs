/// Reveals a text one character per tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    chars: Vec<char>,
    index: usize,
}

impl Typewriter {
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            index: 0,
        }
    }

    /// Advances by one character. Returns false once everything is shown.
    pub fn tick(&mut self) -> bool {
        if self.is_done() {
            return false;
        }
        self.index += 1;
        true
    }

    pub fn displayed(&self) -> String {
        self.chars[..self.index].iter().collect()
    }

    pub fn is_done(&self) -> bool {
        self.index >= self.chars.len()
    }

    /// The blinking cursor stays until the text is complete.
    pub fn show_cursor(&self) -> bool {
        !self.is_done()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_by_character_not_byte() {
        let mut typer = Typewriter::new("héllo");
        assert_eq!(typer.displayed(), "");
        assert!(typer.show_cursor());

        typer.tick();
        typer.tick();
        assert_eq!(typer.displayed(), "hé");

        while typer.tick() {}
        assert_eq!(typer.displayed(), "héllo");
        assert!(typer.is_done());
        assert!(!typer.show_cursor());
        assert!(!typer.tick());
    }

    #[test]
    fn empty_text_is_done_immediately() {
        let typer = Typewriter::new("");
        assert!(typer.is_done());
        assert_eq!(typer.displayed(), "");
    }
}
