use crossterm::style::Color;

pub struct Theme {
    pub prompt: Color,   // Blue
    pub variable: Color, // Orange
    pub result: Color,   // Green
    pub error: Color,    // Red
    pub caret: Color,    // Yellow
    pub ast: Color,      // Grey
}

pub const DEFAULT_THEME: Theme = Theme {
    prompt: Color::Rgb {
        r: 137,
        g: 180,
        b: 250,
    },
    variable: Color::Rgb {
        r: 250,
        g: 179,
        b: 135,
    },
    result: Color::Rgb {
        r: 166,
        g: 227,
        b: 161,
    },
    error: Color::Rgb {
        r: 243,
        g: 139,
        b: 168,
    },
    caret: Color::Rgb {
        r: 249,
        g: 226,
        b: 175,
    },
    ast: Color::Rgb {
        r: 108,
        g: 112,
        b: 134,
    },
};
