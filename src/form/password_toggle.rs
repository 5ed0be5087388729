pub const MASK_CHAR: char = '\u{2022}';

/// Whether the password input shows plaintext. Rendering only.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct PasswordVisibilityToggle {
    visible: bool,
}

impl PasswordVisibilityToggle {
    pub fn is_visible(self) -> bool {
        self.visible
    }

    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }

    pub fn render(self, password: &str) -> String {
        if self.visible {
            password.to_owned()
        } else {
            password.chars().map(|_| MASK_CHAR).collect()
        }
    }
}
