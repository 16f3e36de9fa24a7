//! Built-in glyph table.
//!
//! A static, name-keyed table of Unicode glyphs that render in any terminal
//! font. Names follow the PascalCase convention of common icon libraries so
//! that generated snippets (`<Home />`) read naturally.

use super::source::IconSource;
use crate::domain::{Glyph, Result};

/// `(name, glyph)` pairs in enumeration order.
pub(crate) const GLYPHS: &[(&str, &str)] = &[
    ("Activity", "∿"),
    ("AlarmClock", "⏰"),
    ("AlertCircle", "ⓘ"),
    ("AlertTriangle", "⚠"),
    ("Anchor", "⚓"),
    ("Aperture", "◎"),
    ("Archive", "▤"),
    ("ArrowDown", "↓"),
    ("ArrowDownLeft", "↙"),
    ("ArrowDownRight", "↘"),
    ("ArrowLeft", "←"),
    ("ArrowLeftRight", "↔"),
    ("ArrowRight", "→"),
    ("ArrowUp", "↑"),
    ("ArrowUpDown", "↕"),
    ("ArrowUpLeft", "↖"),
    ("ArrowUpRight", "↗"),
    ("AtSign", "@"),
    ("Atom", "⚛"),
    ("Award", "✪"),
    ("Ban", "⊘"),
    ("BarChart", "▁▃▅"),
    ("Bell", "♪"),
    ("Biohazard", "☣"),
    ("Bluetooth", "ᛒ"),
    ("Bold", "𝐁"),
    ("Bomb", "●"),
    ("Book", "▯"),
    ("Bookmark", "⚑"),
    ("Box", "□"),
    ("Braces", "{}"),
    ("Brackets", "[]"),
    ("Briefcase", "⊡"),
    ("Brush", "✎"),
    ("Bug", "⚘"),
    ("Calculator", "±"),
    ("Calendar", "▦"),
    ("Camera", "◙"),
    ("Check", "✓"),
    ("CheckCircle", "✅"),
    ("CheckSquare", "☑"),
    ("ChevronDown", "⌄"),
    ("ChevronLeft", "‹"),
    ("ChevronRight", "›"),
    ("ChevronUp", "⌃"),
    ("ChevronsLeft", "«"),
    ("ChevronsRight", "»"),
    ("Circle", "○"),
    ("CircleDot", "⊙"),
    ("Clipboard", "📋"),
    ("Clock", "◷"),
    ("Cloud", "☁"),
    ("CloudLightning", "☈"),
    ("CloudRain", "⛆"),
    ("CloudSnow", "❄"),
    ("Club", "♣"),
    ("Code", "</>"),
    ("Coffee", "☕"),
    ("Cog", "⚙"),
    ("Command", "⌘"),
    ("Compass", "✧"),
    ("Copy", "⧉"),
    ("Copyright", "©"),
    ("Crosshair", "⌖"),
    ("Crown", "♔"),
    ("Delete", "⌦"),
    ("Diamond", "◇"),
    ("Dice", "⚄"),
    ("Divide", "÷"),
    ("DollarSign", "$"),
    ("Download", "⤓"),
    ("Droplet", "💧"),
    ("Eject", "⏏"),
    ("Equal", "="),
    ("Euro", "€"),
    ("Eye", "◉"),
    ("FastForward", "⏩"),
    ("Feather", "🪶"),
    ("File", "🗎"),
    ("Filter", "⏷"),
    ("Flag", "⚐"),
    ("Flame", "🔥"),
    ("Flower", "✿"),
    ("Folder", "🗀"),
    ("FolderOpen", "🗁"),
    ("Frown", "☹"),
    ("Function", "ƒ"),
    ("Gem", "◈"),
    ("Globe", "🌐"),
    ("Grid", "⊞"),
    ("Hammer", "⚒"),
    ("Hand", "✋"),
    ("Hash", "#"),
    ("Headphones", "🎧"),
    ("Heart", "♥"),
    ("HeartOutline", "♡"),
    ("Hexagon", "⬡"),
    ("Home", "⌂"),
    ("Hourglass", "⌛"),
    ("House", "🏠"),
    ("Infinity", "∞"),
    ("Info", "ℹ"),
    ("Italic", "𝐼"),
    ("Key", "⚿"),
    ("Keyboard", "⌨"),
    ("Layers", "≋"),
    ("Leaf", "❦"),
    ("Lightbulb", "💡"),
    ("Link", "🔗"),
    ("List", "☰"),
    ("Lock", "🔒"),
    ("LogIn", "⇥"),
    ("LogOut", "⇤"),
    ("Mail", "✉"),
    ("Map", "🗺"),
    ("MapPin", "📍"),
    ("Maximize", "⛶"),
    ("Menu", "≡"),
    ("MessageCircle", "💬"),
    ("Mic", "🎤"),
    ("Minus", "−"),
    ("Moon", "☾"),
    ("Music", "♫"),
    ("Navigation", "➤"),
    ("Omega", "Ω"),
    ("Option", "⌥"),
    ("Paperclip", "📎"),
    ("Pause", "⏸"),
    ("Peace", "☮"),
    ("Pencil", "✏"),
    ("Percent", "%"),
    ("Phone", "☎"),
    ("Pi", "π"),
    ("Play", "▶"),
    ("Plus", "+"),
    ("Power", "⏻"),
    ("Printer", "⎙"),
    ("Radiation", "☢"),
    ("Recycle", "♻"),
    ("Redo", "↷"),
    ("Refresh", "⟳"),
    ("Registered", "®"),
    ("Repeat", "🔁"),
    ("Return", "⏎"),
    ("Rewind", "⏪"),
    ("Rocket", "🚀"),
    ("Scissors", "✂"),
    ("Search", "⌕"),
    ("Send", "✈"),
    ("Shield", "⛨"),
    ("Shift", "⇧"),
    ("Shuffle", "🔀"),
    ("Sigma", "Σ"),
    ("Skull", "☠"),
    ("Smile", "☺"),
    ("Snowflake", "❅"),
    ("Spade", "♠"),
    ("Sparkles", "✨"),
    ("Square", "■"),
    ("Star", "★"),
    ("StarOutline", "☆"),
    ("Stop", "⏹"),
    ("Sun", "☀"),
    ("Sunrise", "🌅"),
    ("Table", "⊟"),
    ("Tag", "🏷"),
    ("Target", "◎\u{fe0e}"),
    ("Terminal", ">_"),
    ("ThumbsDown", "👎"),
    ("ThumbsUp", "👍"),
    ("Timer", "⏱"),
    ("Trash", "🗑"),
    ("Triangle", "△"),
    ("Trophy", "🏆"),
    ("Umbrella", "☂"),
    ("Undo", "↶"),
    ("Unlock", "🔓"),
    ("Upload", "⤒"),
    ("User", "👤"),
    ("Users", "👥"),
    ("Volume", "🔊"),
    ("VolumeOff", "🔇"),
    ("Wand", "⚚"),
    ("Watch", "⌚"),
    ("Wifi", "📶"),
    ("Wind", "༄"),
    ("Wrench", "🔧"),
    ("X", "✕"),
    ("XCircle", "⊗"),
    ("Yen", "¥"),
    ("YinYang", "☯"),
    ("Zap", "⚡"),
    ("ZoomIn", "⊕"),
    ("ZoomOut", "⊖"),
];

/// Icon source backed by the static [`GLYPHS`] table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinGlyphs;

impl IconSource for BuiltinGlyphs {
    fn describe(&self) -> String {
        "builtin".to_string()
    }

    fn icons(&self) -> Result<Vec<(String, Glyph)>> {
        Ok(GLYPHS
            .iter()
            .map(|(name, glyph)| ((*name).to_string(), Glyph::new(*glyph)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_names_are_unique() {
        let mut seen = HashSet::new();
        for (name, _) in GLYPHS {
            assert!(seen.insert(*name), "duplicate builtin glyph name {name}");
        }
    }

    #[test]
    fn builtin_glyphs_are_non_empty() {
        assert!(GLYPHS.iter().all(|(_, glyph)| !glyph.is_empty()));
    }
}
