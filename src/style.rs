use crossterm::style::{self as term, Color, Stylize};

/// How a console line should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Terminal default colors.
    #[default]
    Plain,
    /// Something was found or finished.
    Success,
    /// Detection failed, the user has to step in.
    Warning,
    /// The run cannot continue or a step failed.
    Failure,
    /// Progress headings ("Part 1 of 3 complete!").
    Heading,
    /// Secondary details and prompts.
    Detail,
    /// The action about to happen.
    Action,
    /// Example values shown before a prompt.
    Example,
}

impl Style {
    fn color(self) -> Option<Color> {
        match self {
            Style::Plain => None,
            Style::Success => Some(Color::DarkGreen),
            Style::Warning => Some(Color::Yellow),
            Style::Failure => Some(Color::DarkRed),
            Style::Heading => Some(Color::Blue),
            Style::Detail => Some(Color::Cyan),
            Style::Action => Some(Color::DarkMagenta),
            Style::Example => Some(Color::DarkYellow),
        }
    }
}

/// Render `text` in `style`. With `color` off the text is returned unchanged.
pub fn paint(style: Style, text: &str, color: bool) -> String {
    match style.color() {
        Some(c) if color => term::style(text).with(c).to_string(),
        _ => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escape_codes() {
        for style in [Style::Plain, Style::Success, Style::Failure, Style::Example] {
            assert_eq!(paint(style, "Got: a.dll", false), "Got: a.dll");
        }
    }

    #[test]
    fn colored_output_wraps_text() {
        // crossterm honors NO_COLOR on its own
        if std::env::var_os("NO_COLOR").is_some() {
            return;
        }
        let out = paint(Style::Failure, "Path not found!", true);
        assert!(out.contains("Path not found!"));
        assert!(out.starts_with('\u{1b}'));
        assert_eq!(paint(Style::Plain, "x", true), "x");
    }
}
