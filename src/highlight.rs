use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct MessageStyler {
    color_support: ColorSupport,
}

impl Default for MessageStyler {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStyler {
    pub fn new() -> Self {
        let support = check_color_support().unwrap_or(ColorSupport::NoColor);
        Self {
            color_support: support,
        }
    }

    pub fn error(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        message.style(error_style).to_string()
    }

    pub fn warning(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let warning_style = Style::builder()
            .foreground(Color::Yellow)
            .build();

        message.style(warning_style).to_string()
    }

    pub fn notice(&self, message: &str) -> String {
        if matches!(self.color_support, ColorSupport::NoColor) {
            return message.to_string();
        }

        let notice_style = Style::builder()
            .foreground(Color::Green)
            .build();

        message.style(notice_style).to_string()
    }
}
