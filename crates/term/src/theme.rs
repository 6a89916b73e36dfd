//! Color palettes for the named themes.

use crate::fb::Rgb;
use crate::types::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Background at the top row.
    pub top: Rgb,
    /// Background at the bottom row.
    pub bottom: Rgb,
    pub text: Rgb,
    pub muted: Rgb,
    pub accent: Rgb,
    pub die_face: Rgb,
    pub pip: Rgb,
    pub frozen: Rgb,
    pub button: Rgb,
    pub button_text: Rgb,
    pub disabled: Rgb,
}

impl Palette {
    /// Background color of row `y` in a screen `height` rows tall.
    pub fn background(&self, y: u16, height: u16) -> Rgb {
        self.top.lerp(self.bottom, y, height.saturating_sub(1))
    }
}

pub fn palette(theme: Theme) -> Palette {
    let base = Palette {
        top: Rgb::new(0, 0, 0),
        bottom: Rgb::new(0, 0, 0),
        text: Rgb::new(240, 240, 240),
        muted: Rgb::new(170, 175, 185),
        accent: Rgb::new(255, 210, 90),
        die_face: Rgb::new(248, 248, 240),
        pip: Rgb::new(30, 30, 40),
        frozen: Rgb::new(90, 170, 255),
        button: Rgb::new(250, 250, 250),
        button_text: Rgb::new(30, 30, 40),
        disabled: Rgb::new(120, 120, 130),
    };
    match theme {
        Theme::Ocean => Palette {
            top: Rgb::new(20, 60, 120),
            bottom: Rgb::new(10, 150, 170),
            ..base
        },
        Theme::Sunset => Palette {
            top: Rgb::new(120, 40, 110),
            bottom: Rgb::new(240, 130, 60),
            frozen: Rgb::new(120, 60, 200),
            ..base
        },
        Theme::Forest => Palette {
            top: Rgb::new(20, 70, 40),
            bottom: Rgb::new(110, 160, 70),
            accent: Rgb::new(250, 230, 140),
            ..base
        },
        Theme::Midnight => Palette {
            top: Rgb::new(5, 5, 20),
            bottom: Rgb::new(50, 40, 90),
            die_face: Rgb::new(220, 220, 235),
            ..base
        },
        Theme::Candy => Palette {
            top: Rgb::new(240, 120, 180),
            bottom: Rgb::new(130, 200, 250),
            text: Rgb::new(40, 20, 50),
            muted: Rgb::new(90, 60, 100),
            accent: Rgb::new(120, 20, 90),
            frozen: Rgb::new(70, 40, 160),
            ..base
        },
    }
}
