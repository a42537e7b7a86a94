use ratatui::style::Color;

/// Nord palette, reduced to what the dashboard actually draws with.
pub struct NordTheme {
    // Polar Night
    pub nord0: Color, // darkest background
    pub nord1: Color, // secondary background, active row
    pub nord2: Color, // borders, separators
    pub nord3: Color, // muted text

    // Snow Storm
    pub nord4: Color, // primary text
    pub nord5: Color, // bright text, headings

    // Frost
    pub nord8: Color,  // ice blue — selected element, chart lines
    pub nord9: Color,  // blue — secondary accents
    pub nord10: Color, // dark blue — active handle

    // Aurora
    pub nord11: Color, // red — errors
    pub nord13: Color, // yellow — highlights
    pub nord14: Color, // green — counts, success
}

impl Default for NordTheme {
    fn default() -> Self {
        Self {
            nord0: Color::Rgb(46, 52, 64),
            nord1: Color::Rgb(59, 66, 82),
            nord2: Color::Rgb(76, 86, 106),
            nord3: Color::Rgb(144, 153, 171),
            nord4: Color::Rgb(216, 222, 233),
            nord5: Color::Rgb(229, 233, 240),
            nord8: Color::Rgb(136, 192, 208),
            nord9: Color::Rgb(129, 161, 193),
            nord10: Color::Rgb(94, 129, 172),
            nord11: Color::Rgb(191, 97, 106),
            nord13: Color::Rgb(235, 203, 139),
            nord14: Color::Rgb(163, 190, 140),
        }
    }
}

impl NordTheme {
    // Semantic aliases
    pub fn bg(&self) -> Color {
        self.nord0
    }
    pub fn bg_secondary(&self) -> Color {
        self.nord1
    }
    pub fn border(&self) -> Color {
        self.nord2
    }
    pub fn muted(&self) -> Color {
        self.nord3
    }
    pub fn fg(&self) -> Color {
        self.nord4
    }
    pub fn fg_bright(&self) -> Color {
        self.nord5
    }
    pub fn frost_ice(&self) -> Color {
        self.nord8
    }
    pub fn frost_blue(&self) -> Color {
        self.nord9
    }
    pub fn frost_dark(&self) -> Color {
        self.nord10
    }
    pub fn red(&self) -> Color {
        self.nord11
    }
    pub fn yellow(&self) -> Color {
        self.nord13
    }
    pub fn green(&self) -> Color {
        self.nord14
    }
}
