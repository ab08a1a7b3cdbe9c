/// Terminal style parsing for header and cell colors.
use crate::errors::{AppError, AppResult};
use ansi_term::{Colour, Style};

/// Parses a style spec such as `"bold+blue"`, `"underline+fixed:208"` or `"none"`.
///
/// Tokens are separated by `+` and matched case-insensitively. The last color
/// token wins.
pub fn parse_style(spec: &str) -> AppResult<Style> {
    let mut style = Style::new();

    for raw in spec.split('+') {
        let token = raw.trim().to_ascii_lowercase();
        style = match token.as_str() {
            "" | "none" | "plain" => style,
            "bold" => style.bold(),
            "dimmed" | "dim" => style.dimmed(),
            "italic" => style.italic(),
            "underline" => style.underline(),
            other => style.fg(parse_colour(other)?),
        };
    }

    Ok(style)
}

fn parse_colour(name: &str) -> AppResult<Colour> {
    let colour = match name {
        "black" => Colour::Black,
        "red" => Colour::Red,
        "green" => Colour::Green,
        "yellow" => Colour::Yellow,
        "blue" => Colour::Blue,
        "purple" | "magenta" => Colour::Purple,
        "cyan" => Colour::Cyan,
        "white" => Colour::White,
        other => match other.strip_prefix("fixed:") {
            Some(n) => Colour::Fixed(
                n.parse::<u8>()
                    .map_err(|_| AppError::InvalidStyle(name.to_string()))?,
            ),
            None => return Err(AppError::InvalidStyle(name.to_string())),
        },
    };
    Ok(colour)
}
