//! Style resolution: style tag names to ANSI escape sequences.
//!
//! Widgets tag cells with style *names* (`"bold"`, `"red"`, `"bgBlue"`).
//! A [`StyleSheet`] turns each name into an opening and closing sequence
//! when the cell is stored. The sheet is injected into the root buffer,
//! so storage never hard-codes a styling scheme.

use unicode_segmentation::UnicodeSegmentation;

/// Maps style tag names to their opening and closing escape sequences.
pub trait StyleSheet {
    /// Resolve a tag. Unknown tags return `None` and resolve to nothing.
    fn resolve(&self, tag: &str) -> Option<(&str, &str)>;
}

/// The standard SGR names (`ansi-styles` naming).
///
/// Colors close with the default-color reset (`39`/`49`) so nested styles
/// compose without leaking into the next cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStyles;

impl StyleSheet for AnsiStyles {
    fn resolve(&self, tag: &str) -> Option<(&str, &str)> {
        let codes = match tag {
            "reset" => ("\x1b[0m", "\x1b[0m"),
            "bold" => ("\x1b[1m", "\x1b[22m"),
            "dim" => ("\x1b[2m", "\x1b[22m"),
            "italic" => ("\x1b[3m", "\x1b[23m"),
            "underline" => ("\x1b[4m", "\x1b[24m"),
            "overline" => ("\x1b[53m", "\x1b[55m"),
            "inverse" => ("\x1b[7m", "\x1b[27m"),
            "hidden" => ("\x1b[8m", "\x1b[28m"),
            "strikethrough" => ("\x1b[9m", "\x1b[29m"),

            "black" => ("\x1b[30m", "\x1b[39m"),
            "red" => ("\x1b[31m", "\x1b[39m"),
            "green" => ("\x1b[32m", "\x1b[39m"),
            "yellow" => ("\x1b[33m", "\x1b[39m"),
            "blue" => ("\x1b[34m", "\x1b[39m"),
            "magenta" => ("\x1b[35m", "\x1b[39m"),
            "cyan" => ("\x1b[36m", "\x1b[39m"),
            "white" => ("\x1b[37m", "\x1b[39m"),
            "blackBright" | "gray" | "grey" => ("\x1b[90m", "\x1b[39m"),
            "redBright" => ("\x1b[91m", "\x1b[39m"),
            "greenBright" => ("\x1b[92m", "\x1b[39m"),
            "yellowBright" => ("\x1b[93m", "\x1b[39m"),
            "blueBright" => ("\x1b[94m", "\x1b[39m"),
            "magentaBright" => ("\x1b[95m", "\x1b[39m"),
            "cyanBright" => ("\x1b[96m", "\x1b[39m"),
            "whiteBright" => ("\x1b[97m", "\x1b[39m"),

            "bgBlack" => ("\x1b[40m", "\x1b[49m"),
            "bgRed" => ("\x1b[41m", "\x1b[49m"),
            "bgGreen" => ("\x1b[42m", "\x1b[49m"),
            "bgYellow" => ("\x1b[43m", "\x1b[49m"),
            "bgBlue" => ("\x1b[44m", "\x1b[49m"),
            "bgMagenta" => ("\x1b[45m", "\x1b[49m"),
            "bgCyan" => ("\x1b[46m", "\x1b[49m"),
            "bgWhite" => ("\x1b[47m", "\x1b[49m"),
            "bgBlackBright" | "bgGray" | "bgGrey" => ("\x1b[100m", "\x1b[49m"),
            "bgRedBright" => ("\x1b[101m", "\x1b[49m"),
            "bgGreenBright" => ("\x1b[102m", "\x1b[49m"),
            "bgYellowBright" => ("\x1b[103m", "\x1b[49m"),
            "bgBlueBright" => ("\x1b[104m", "\x1b[49m"),
            "bgMagentaBright" => ("\x1b[105m", "\x1b[49m"),
            "bgCyanBright" => ("\x1b[106m", "\x1b[49m"),
            "bgWhiteBright" => ("\x1b[107m", "\x1b[49m"),
            _ => return None,
        };
        Some(codes)
    }
}

/// Number of visible characters in `text`, ignoring escape sequences.
///
/// Counts grapheme clusters, so `"e\u{301}"` is one character.
pub fn visible_len(text: &str) -> usize {
    if text.contains('\x1b') {
        strip_ansi_escapes::strip_str(text).graphemes(true).count()
    } else {
        text.graphemes(true).count()
    }
}

/// Strip escape sequences, returning only what the terminal would show.
pub fn strip_escapes(text: &str) -> std::borrow::Cow<'_, str> {
    if text.contains('\x1b') {
        std::borrow::Cow::Owned(strip_ansi_escapes::strip_str(text))
    } else {
        std::borrow::Cow::Borrowed(text)
    }
}
