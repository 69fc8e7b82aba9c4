//! Select Graphic Rendition codes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TermError;

/// An ANSI SGR parameter (text weight, colour, background…)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum SgrCode {
    Reset = 0,

    Bold = 1,
    Italic = 3,
    Underline = 4,
    Blink = 5,
    Reverse = 7,
    Conceal = 8,

    Black = 30,
    Red = 31,
    Green = 32,
    Yellow = 33,
    Blue = 34,
    Magenta = 35,
    Cyan = 36,
    Grey = 37,

    BgBlack = 40,
    BgRed = 41,
    BgGreen = 42,
    BgYellow = 43,
    BgBlue = 44,
    BgMagenta = 45,
    BgCyan = 46,
    BgGrey = 47,

    BlackBright = 90,
    RedBright = 91,
    GreenBright = 92,
    YellowBright = 93,
    BlueBright = 94,
    MagentaBright = 95,
    CyanBright = 96,
    WhiteBright = 97,

    BgBlackBright = 100,
    BgRedBright = 101,
    BgGreenBright = 102,
    BgYellowBright = 103,
    BgBlueBright = 104,
    BgMagentaBright = 105,
    BgCyanBright = 106,
    BgWhiteBright = 107,
}

impl SgrCode {
    /// Every code, in numeric order
    pub const ALL: [SgrCode; 39] = [
        SgrCode::Reset,
        SgrCode::Bold,
        SgrCode::Italic,
        SgrCode::Underline,
        SgrCode::Blink,
        SgrCode::Reverse,
        SgrCode::Conceal,
        SgrCode::Black,
        SgrCode::Red,
        SgrCode::Green,
        SgrCode::Yellow,
        SgrCode::Blue,
        SgrCode::Magenta,
        SgrCode::Cyan,
        SgrCode::Grey,
        SgrCode::BgBlack,
        SgrCode::BgRed,
        SgrCode::BgGreen,
        SgrCode::BgYellow,
        SgrCode::BgBlue,
        SgrCode::BgMagenta,
        SgrCode::BgCyan,
        SgrCode::BgGrey,
        SgrCode::BlackBright,
        SgrCode::RedBright,
        SgrCode::GreenBright,
        SgrCode::YellowBright,
        SgrCode::BlueBright,
        SgrCode::MagentaBright,
        SgrCode::CyanBright,
        SgrCode::WhiteBright,
        SgrCode::BgBlackBright,
        SgrCode::BgRedBright,
        SgrCode::BgGreenBright,
        SgrCode::BgYellowBright,
        SgrCode::BgBlueBright,
        SgrCode::BgMagentaBright,
        SgrCode::BgCyanBright,
        SgrCode::BgWhiteBright,
    ];

    /// Numeric SGR parameter
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Escape sequence enabling this code, e.g. `\x1b[1m`
    pub fn sequence(self) -> String {
        format!("\x1b[{}m", self.value())
    }

    /// Snake-case name, as accepted by [`FromStr`] and in configuration files
    pub const fn name(self) -> &'static str {
        match self {
            SgrCode::Reset => "reset",
            SgrCode::Bold => "bold",
            SgrCode::Italic => "italic",
            SgrCode::Underline => "underline",
            SgrCode::Blink => "blink",
            SgrCode::Reverse => "reverse",
            SgrCode::Conceal => "conceal",
            SgrCode::Black => "black",
            SgrCode::Red => "red",
            SgrCode::Green => "green",
            SgrCode::Yellow => "yellow",
            SgrCode::Blue => "blue",
            SgrCode::Magenta => "magenta",
            SgrCode::Cyan => "cyan",
            SgrCode::Grey => "grey",
            SgrCode::BgBlack => "bg_black",
            SgrCode::BgRed => "bg_red",
            SgrCode::BgGreen => "bg_green",
            SgrCode::BgYellow => "bg_yellow",
            SgrCode::BgBlue => "bg_blue",
            SgrCode::BgMagenta => "bg_magenta",
            SgrCode::BgCyan => "bg_cyan",
            SgrCode::BgGrey => "bg_grey",
            SgrCode::BlackBright => "black_bright",
            SgrCode::RedBright => "red_bright",
            SgrCode::GreenBright => "green_bright",
            SgrCode::YellowBright => "yellow_bright",
            SgrCode::BlueBright => "blue_bright",
            SgrCode::MagentaBright => "magenta_bright",
            SgrCode::CyanBright => "cyan_bright",
            SgrCode::WhiteBright => "white_bright",
            SgrCode::BgBlackBright => "bg_black_bright",
            SgrCode::BgRedBright => "bg_red_bright",
            SgrCode::BgGreenBright => "bg_green_bright",
            SgrCode::BgYellowBright => "bg_yellow_bright",
            SgrCode::BgBlueBright => "bg_blue_bright",
            SgrCode::BgMagentaBright => "bg_magenta_bright",
            SgrCode::BgCyanBright => "bg_cyan_bright",
            SgrCode::BgWhiteBright => "bg_white_bright",
        }
    }
}

/// Writes the escape sequence
impl fmt::Display for SgrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\x1b[{}m", self.value())
    }
}

impl FromStr for SgrCode {
    type Err = TermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().replace('-', "_");
        SgrCode::ALL
            .iter()
            .copied()
            .find(|code| code.name().eq_ignore_ascii_case(&name))
            .ok_or_else(|| TermError::UnknownCode {
                name: s.to_string(),
            })
    }
}
