//! Compile-time lookup tables.
//!
//! All tables are immutable; per-conversion overrides live in
//! [`N2LOptions`](crate::core::md2latex::N2LOptions).

use phf::{phf_map, phf_ordered_map};

use crate::core::md2latex::{CalloutKind, Trigger};

/// Characters that may open a construct, keyed to the routine that
/// disambiguates them. Everything else is copied through.
pub static TRIGGERS: phf::Map<char, Trigger> = phf_map! {
    '%' => Trigger::Percent,
    '$' => Trigger::Dollar,
    '*' => Trigger::Star,
    '#' => Trigger::Hash,
    '-' => Trigger::Dash,
    '!' => Trigger::Bang,
    '[' => Trigger::Bracket,
    '>' => Trigger::Quote,
    '`' => Trigger::Backtick,
};

/// Fenced code language tags renamed for `lstlisting`. Keys are lower-case.
pub static LANGUAGE_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "js" => "JavaScript",
    "jsx" => "JavaScript",
    "ts" => "JavaScript",
    "tsx" => "JavaScript",
    "javascript" => "JavaScript",
    "typescript" => "JavaScript",
};

/// Sentinels searched in the slug of a callout title, in priority order.
pub static CALLOUT_SENTINELS: phf::OrderedMap<&'static str, CalloutKind> = phf_ordered_map! {
    "definicion" => CalloutKind::Definition,
    "definition" => CalloutKind::Definition,
    "notacion" => CalloutKind::Notation,
    "notation" => CalloutKind::Notation,
    "ejemplo" => CalloutKind::Example,
    "example" => CalloutKind::Example,
};
