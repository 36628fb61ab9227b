//! Static keymap tables, indexed by layer, row and column
//!
//! Only data lives here: what a key does when pressed is up to whoever reads
//! the table.

// Export as pub so that it can be used from macro
#[doc(hidden)]
pub use paste::paste;
#[doc(hidden)]
pub use usbd_human_interface_device::page::Keyboard;

/// A logical key identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Keyboard(Keyboard),
    /// Numbered function slot, bound to an action elsewhere
    Fn(u8),
}

impl Default for Key {
    fn default() -> Self {
        Self::Keyboard(Keyboard::NoEventIndicated)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Keymap<const ROWS: usize, const COLS: usize, const LAYERS: usize> {
    map: [[[Key; COLS]; ROWS]; LAYERS],
}

impl<const ROWS: usize, const COLS: usize, const LAYERS: usize> Keymap<ROWS, COLS, LAYERS> {
    pub const fn new(map: [[[Key; COLS]; ROWS]; LAYERS]) -> Self {
        Keymap { map }
    }

    pub fn key(&self, layer: usize, row: usize, col: usize) -> Key {
        self.map[layer][row][col]
    }

    pub const fn layers(&self) -> usize {
        LAYERS
    }
}

#[macro_export]
macro_rules! make_keymap {
    // To allow `make_keymap![...]` be the same as `make_keymap!([...])`
    ( $( $t:tt ),* $(,)? ) => {[ $( $crate::keymap::make_key!($t) ),* ]};
}

#[rustfmt::skip]
#[macro_export]
macro_rules! make_key {
    // Nested rows and layers
    ([ $( $t:tt ),* $(,)? ]) => {[ $( $crate::keymap::make_key!($t) ),* ]};

    // Shorthands
    (Esc) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Escape) };
    (Grv) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Grave) };
    (Eql) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Equal) };
    (Bsl) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Backslash) };
    (Bsp) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::DeleteBackspace) };
    (Ent) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::ReturnEnter) };
    (Spc) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Space) };
    (Min) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Minus) };
    (LBr) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::LeftBrace) };
    (RBr) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::RightBrace) };
    (Com) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Comma) };
    (Dot) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Dot) };
    (App) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Application) };

    (Scol) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::Semicolon) };
    (Slash) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::ForwardSlash) };
    (Caps) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::CapsLock) };

    (LSf) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::LeftShift) };
    (LCl) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::LeftControl) };
    (LAl) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::LeftAlt) };
    (LWn) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::LeftGUI) };
    (RSf) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::RightShift) };
    (RCl) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::RightControl) };
    (RAl) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::RightAlt) };
    (RWn) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::RightGUI) };

    // Do nothing
    (NOP) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::NoEventIndicated) };

    (Left) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::LeftArrow) };
    (Down) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::DownArrow) };
    (Up) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::UpArrow) };
    (Right) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::RightArrow) };

    (PgUp) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::PageUp) };
    (PgDn) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::PageDown) };
    (PScr) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::PrintScreen) };
    (VolU) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::VolumeUp) };
    (VolD) => { $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::VolumeDown) };

    // Have numbers translate to number keys
    ($n:literal) => {
        $crate::keymap::Key::Keyboard(
            $crate::keymap::paste! { $crate::keymap::Keyboard::[<Keyboard $n>] },
        )
    };

    ((Fn $n:literal)) => { $crate::keymap::Key::Fn($n) };

    // Fallback
    ($i:ident) => {
        $crate::keymap::Key::Keyboard($crate::keymap::Keyboard::$i)
    };
}

// Export the macros
pub use make_key;
pub use make_keymap;

pub const ROWS: usize = 6;
pub const COLS: usize = 18;

/// Layout of the 6x18 board, one layer
// For alignment with `vi]:EasyAlign <C-r>4<CR>*,
#[rustfmt::skip]
pub const POKER: Keymap<ROWS, COLS, 1> = Keymap::new(make_keymap![[
    [Esc,      (Fn 1), (Fn 2), (Fn 3), (Fn 4), (Fn 5), (Fn 6), (Fn 7), (Fn 8), (Fn 9), (Fn 10), (Fn 11), (Fn 12), NOP,   NOP,   NOP,   NOP,   NOP],
    [(Fn 13),  Grv,    1,      2,      3,      4,      5,      6,      7,      8,      9,       0,       Min,     Eql,   Bsp,   PScr,  Pause, PgUp],
    [(Fn 14),  Tab,    Q,      W,      E,      R,      T,      Y,      U,      I,      O,       P,       LBr,     RBr,   Bsl,   VolU,  VolD,  PgDn],
    [(Fn 15),  Caps,   A,      S,      D,      F,      G,      H,      J,      K,      L,       Scol,    Grv,     Ent,   NOP,   NOP,   NOP,   NOP],
    [(Fn 16),  LSf,    Z,      X,      C,      V,      B,      N,      M,      Com,    Dot,     Slash,   RSf,     NOP,   NOP,   Up,    NOP,   NOP],
    [(Fn 17),  LCl,    LWn,    NOP,    NOP,    Spc,    NOP,    NOP,    NOP,    LAl,    NOP,     App,     RCl,     NOP,   Left,  Down,  Right, NOP],
]]);
