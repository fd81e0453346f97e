//! Control Code Catalog
//!
//! Every in-message control operation the engine understands, with its
//! native code value and payload length for each locale.
//!
//! Only three of them matter to layout: line breaks and box breaks
//! delimit lines and boxes, and an icon narrows its box. The rest are
//! carried through the pipeline verbatim, but the parser still needs their
//! payload lengths to consume them correctly.
//!
//! | Kind | English | Japanese | Payload (en / jp units) |
//! |------|---------|----------|-------------------------|
//! | line-break | `0x01` | `0x000A` | 0 / 0 |
//! | end | `0x02` | `0x8170` | 0 / 0 |
//! | box-break | `0x04` | `0x81A5` | 0 / 0 |
//! | color | `0x05` | `0x000B` | 1 / 1 |
//! | shift | `0x06` | `0x86C7` | 1 / 1 |
//! | name | `0x0F` | `0x874F` | 0 / 0 |
//! | icon | `0x13` | `0x819A` | 1 / 1 |
//! | background | `0x15` | `0x86B3` | 3 / 2 |

use crate::Locale;

/// A control operation embedded in message text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ControlKind {
    LineBreak,
    End,
    BoxBreak,
    Color,
    /// Horizontal gap; the payload is its width in table units.
    Shift,
    Goto,
    Instant,
    UnInstant,
    KeepOpen,
    Event,
    BoxBreakDelay,
    FadeOut,
    /// Player name insert.
    Name,
    Ocarina,
    Sound,
    /// Item icon; reserves space at the side of the box.
    Icon,
    Speed,
    Background,
    MarathonTime,
    RaceTime,
    Points,
    SkulltulaCount,
    Unskippable,
    TwoChoice,
    ThreeChoice,
    FishWeight,
    HighScore,
    Time,
}

impl ControlKind {
    /// All control kinds, in English code order.
    pub const ALL: [ControlKind; 28] = [
        ControlKind::LineBreak,
        ControlKind::End,
        ControlKind::BoxBreak,
        ControlKind::Color,
        ControlKind::Shift,
        ControlKind::Goto,
        ControlKind::Instant,
        ControlKind::UnInstant,
        ControlKind::KeepOpen,
        ControlKind::Event,
        ControlKind::BoxBreakDelay,
        ControlKind::FadeOut,
        ControlKind::Name,
        ControlKind::Ocarina,
        ControlKind::Sound,
        ControlKind::Icon,
        ControlKind::Speed,
        ControlKind::Background,
        ControlKind::MarathonTime,
        ControlKind::RaceTime,
        ControlKind::Points,
        ControlKind::SkulltulaCount,
        ControlKind::Unskippable,
        ControlKind::TwoChoice,
        ControlKind::ThreeChoice,
        ControlKind::FishWeight,
        ControlKind::HighScore,
        ControlKind::Time,
    ];

    /// Native code value in the given locale.
    #[inline]
    pub const fn code(self, locale: Locale) -> u16 {
        match locale {
            Locale::English => self.english_code(),
            Locale::Japanese => self.japanese_code(),
        }
    }

    /// Look up the control kind whose native code is `code`.
    pub fn from_code(code: u32, locale: Locale) -> Option<ControlKind> {
        Self::ALL
            .into_iter()
            .find(|kind| u32::from(kind.code(locale)) == code)
    }

    /// Number of payload code units following the control code.
    pub const fn payload_units(self, locale: Locale) -> u32 {
        match (self, locale) {
            (ControlKind::Background, Locale::English) => 3,
            (ControlKind::Background, Locale::Japanese) => 2,
            (ControlKind::Goto | ControlKind::Sound, Locale::English) => 2,
            (
                ControlKind::Goto
                | ControlKind::Sound
                | ControlKind::Color
                | ControlKind::Shift
                | ControlKind::BoxBreakDelay
                | ControlKind::FadeOut
                | ControlKind::Icon
                | ControlKind::Speed
                | ControlKind::HighScore,
                _,
            ) => 1,
            _ => 0,
        }
    }

    /// Whether this control ends the current line or box.
    #[inline]
    pub const fn is_break(self) -> bool {
        matches!(self, ControlKind::LineBreak | ControlKind::BoxBreak)
    }

    /// Short stable name, used in debug output.
    pub const fn name(self) -> &'static str {
        match self {
            ControlKind::LineBreak => "line-break",
            ControlKind::End => "end",
            ControlKind::BoxBreak => "box-break",
            ControlKind::Color => "color",
            ControlKind::Shift => "shift",
            ControlKind::Goto => "goto",
            ControlKind::Instant => "instant",
            ControlKind::UnInstant => "un-instant",
            ControlKind::KeepOpen => "keep-open",
            ControlKind::Event => "event",
            ControlKind::BoxBreakDelay => "box-break-delay",
            ControlKind::FadeOut => "fade-out",
            ControlKind::Name => "name",
            ControlKind::Ocarina => "ocarina",
            ControlKind::Sound => "sound",
            ControlKind::Icon => "icon",
            ControlKind::Speed => "speed",
            ControlKind::Background => "background",
            ControlKind::MarathonTime => "marathon",
            ControlKind::RaceTime => "race",
            ControlKind::Points => "points",
            ControlKind::SkulltulaCount => "skulltula",
            ControlKind::Unskippable => "unskippable",
            ControlKind::TwoChoice => "two-choice",
            ControlKind::ThreeChoice => "three-choice",
            ControlKind::FishWeight => "fish",
            ControlKind::HighScore => "high-score",
            ControlKind::Time => "time",
        }
    }

    const fn english_code(self) -> u16 {
        match self {
            ControlKind::LineBreak => 0x01,
            ControlKind::End => 0x02,
            ControlKind::BoxBreak => 0x04,
            ControlKind::Color => 0x05,
            ControlKind::Shift => 0x06,
            ControlKind::Goto => 0x07,
            ControlKind::Instant => 0x08,
            ControlKind::UnInstant => 0x09,
            ControlKind::KeepOpen => 0x0A,
            ControlKind::Event => 0x0B,
            ControlKind::BoxBreakDelay => 0x0C,
            ControlKind::FadeOut => 0x0E,
            ControlKind::Name => 0x0F,
            ControlKind::Ocarina => 0x10,
            ControlKind::Sound => 0x12,
            ControlKind::Icon => 0x13,
            ControlKind::Speed => 0x14,
            ControlKind::Background => 0x15,
            ControlKind::MarathonTime => 0x16,
            ControlKind::RaceTime => 0x17,
            ControlKind::Points => 0x18,
            ControlKind::SkulltulaCount => 0x19,
            ControlKind::Unskippable => 0x1A,
            ControlKind::TwoChoice => 0x1B,
            ControlKind::ThreeChoice => 0x1C,
            ControlKind::FishWeight => 0x1D,
            ControlKind::HighScore => 0x1E,
            ControlKind::Time => 0x1F,
        }
    }

    const fn japanese_code(self) -> u16 {
        match self {
            ControlKind::LineBreak => 0x000A,
            ControlKind::End => 0x8170,
            ControlKind::BoxBreak => 0x81A5,
            ControlKind::Color => 0x000B,
            ControlKind::Shift => 0x86C7,
            ControlKind::Goto => 0x81CB,
            ControlKind::Instant => 0x8189,
            ControlKind::UnInstant => 0x818A,
            ControlKind::KeepOpen => 0x86C8,
            ControlKind::Event => 0x819F,
            ControlKind::BoxBreakDelay => 0x81A3,
            ControlKind::FadeOut => 0x819E,
            ControlKind::Name => 0x874F,
            ControlKind::Ocarina => 0x81F0,
            ControlKind::Sound => 0x81F3,
            ControlKind::Icon => 0x819A,
            ControlKind::Speed => 0x86C9,
            ControlKind::Background => 0x86B3,
            ControlKind::MarathonTime => 0x8791,
            ControlKind::RaceTime => 0x8792,
            ControlKind::Points => 0x879B,
            ControlKind::SkulltulaCount => 0x86A3,
            ControlKind::Unskippable => 0x8199,
            ControlKind::TwoChoice => 0x81BC,
            ControlKind::ThreeChoice => 0x81B8,
            ControlKind::FishWeight => 0x86A4,
            ControlKind::HighScore => 0x869F,
            ControlKind::Time => 0x81A1,
        }
    }
}
