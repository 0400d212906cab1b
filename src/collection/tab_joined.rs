use core::fmt::Display;

/// Render a sequence as tab-separated text.
pub trait TabJoined {
    /// Returns each element's text form followed by a tab character.
    ///
    /// The separator trails the final element too; callers that want it
    /// gone must trim it themselves.
    fn tab_joined(&self) -> String;
}

impl<T> TabJoined for [T]
where
    T: Display,
{
    fn tab_joined(&self) -> String {
        let mut out = String::new();
        for item in self {
            out.push_str(&item.to_string());
            out.push('\t');
        }
        out
    }
}
