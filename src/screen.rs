//! Screen identifiers for `--screen`/`--slave-screen`.

/// A screen the client can start on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Help,
    Playlist,
    Browser,
    SearchEngine,
    MediaLibrary,
    PlaylistEditor,
    TagEditor,
    Outputs,
    Visualizer,
    Clock,
    Lyrics,
}

impl Screen {
    /// Look up a screen by its command-line name. Unknown names return
    /// `None`; the caller turns that into a fatal validation error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "help" => Some(Self::Help),
            "playlist" => Some(Self::Playlist),
            "browser" => Some(Self::Browser),
            "search_engine" => Some(Self::SearchEngine),
            "media_library" => Some(Self::MediaLibrary),
            "playlist_editor" => Some(Self::PlaylistEditor),
            "tag_editor" => Some(Self::TagEditor),
            "outputs" => Some(Self::Outputs),
            "visualizer" => Some(Self::Visualizer),
            "clock" => Some(Self::Clock),
            "lyrics" => Some(Self::Lyrics),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Playlist => "playlist",
            Self::Browser => "browser",
            Self::SearchEngine => "search_engine",
            Self::MediaLibrary => "media_library",
            Self::PlaylistEditor => "playlist_editor",
            Self::TagEditor => "tag_editor",
            Self::Outputs => "outputs",
            Self::Visualizer => "visualizer",
            Self::Clock => "clock",
            Self::Lyrics => "lyrics",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        assert_eq!(Screen::from_name("playlist"), Some(Screen::Playlist));
        assert_eq!(Screen::from_name("media_library"), Some(Screen::MediaLibrary));
        assert_eq!(Screen::from_name("clock"), Some(Screen::Clock));
    }

    #[test]
    fn unknown_name_is_none() {
        assert_eq!(Screen::from_name("doesnotexist"), None);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        assert_eq!(Screen::from_name("Playlist"), None);
    }

    #[test]
    fn name_round_trips() {
        for screen in [
            Screen::Help,
            Screen::Playlist,
            Screen::Browser,
            Screen::SearchEngine,
            Screen::MediaLibrary,
            Screen::PlaylistEditor,
            Screen::TagEditor,
            Screen::Outputs,
            Screen::Visualizer,
            Screen::Clock,
            Screen::Lyrics,
        ] {
            assert_eq!(Screen::from_name(screen.name()), Some(screen));
        }
    }
}
