use termimad::{
    Alignment, MadSkin,
    crossterm::style::{Attribute, Color},
};

pub struct Gruvbox;

#[allow(dead_code)]
impl Gruvbox {
    pub fn default_gruvbox_skin() -> MadSkin {
        let mut skin = MadSkin::default();

        skin.paragraph.set_fg(Gruvbox::FG);
        skin.bold.set_fg(Gruvbox::FG);
        skin.italic.set_fg(Gruvbox::GRAY);

        // Entry headings carry the date line.
        skin.headers[0].set_fg(Gruvbox::YELLOW);
        skin.headers[0].add_attr(Attribute::Bold);
        skin.headers[0].align = Alignment::Left;

        skin.headers[1].set_fg(Gruvbox::AQUA);
        skin.headers[1].add_attr(Attribute::Bold);
        skin.headers[1].align = Alignment::Left;

        skin.headers[2].set_fg(Gruvbox::BLUE);

        // Tags render as inline code.
        skin.inline_code.set_fg(Gruvbox::GREEN);
        skin.inline_code.set_bg(Gruvbox::BG1);
        skin.code_block.set_fg(Gruvbox::ORANGE);
        skin.code_block.set_bg(Gruvbox::BG1);

        skin.bullet.set_fg(Gruvbox::ORANGE);
        skin.table.set_fg(Gruvbox::PURPLE);
        skin.quote_mark.set_fg(Gruvbox::GRAY);

        skin
    }

    pub const BG: Color = Color::Rgb {
        r: 0x28,
        g: 0x28,
        b: 0x28,
    }; // #282828
    pub const BG1: Color = Color::Rgb {
        r: 0x3C,
        g: 0x38,
        b: 0x36,
    }; // #3C3836
    pub const BG2: Color = Color::Rgb {
        r: 0x50,
        g: 0x49,
        b: 0x45,
    }; // #504945
    pub const FG: Color = Color::Rgb {
        r: 0xEB,
        g: 0xDB,
        b: 0xB2,
    }; // #EBDBB2

    pub const RED: Color = Color::Rgb {
        r: 0xFB,
        g: 0x49,
        b: 0x34,
    }; // #FB4934
    pub const GREEN: Color = Color::Rgb {
        r: 0xB8,
        g: 0xBB,
        b: 0x26,
    }; // #B8BB26
    pub const YELLOW: Color = Color::Rgb {
        r: 0xFA,
        g: 0xBD,
        b: 0x2F,
    }; // #FABD2F
    pub const BLUE: Color = Color::Rgb {
        r: 0x83,
        g: 0xA5,
        b: 0x98,
    }; // #83A598
    pub const PURPLE: Color = Color::Rgb {
        r: 0xD3,
        g: 0x86,
        b: 0x9B,
    }; // #D3869B
    pub const AQUA: Color = Color::Rgb {
        r: 0x8E,
        g: 0xC0,
        b: 0x7C,
    }; // #8EC07C
    pub const ORANGE: Color = Color::Rgb {
        r: 0xFE,
        g: 0x80,
        b: 0x19,
    }; // #FE8019
    pub const GRAY: Color = Color::Rgb {
        r: 0x92,
        g: 0x83,
        b: 0x74,
    }; // #928374
}
