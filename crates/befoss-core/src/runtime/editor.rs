//! Editor preference

/// Environment variable holding the user's editor
pub const EDITOR_ENV: &str = "EDITOR";

/// Editors offered when `$EDITOR` is not set, as (identifier, label)
pub const EDITORS: [(&str, &str); 5] = [
    ("emacs", "EMACS, the editor for thy soul."),
    ("hx", "Helix deez"),
    ("vim", "VI VI VI"),
    ("nano", "uh, nano?"),
    ("kak", "Hai, Let's write shall we, kakoune it is."),
];

/// Read the preferred editor from the environment. Blank values count as unset.
pub fn editor_from_env() -> Option<String> {
    std::env::var(EDITOR_ENV)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
