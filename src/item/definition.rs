use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum GemColor {
    Blue,
    Green,
    Orange,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PropKind {
    Key,
    Heart,
    Gem(GemColor),
}

/// Ending shown on a win, chosen by the color of the third gem collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WinNarrative {
    Dimes,
    Beauty,
    Precious,
}

impl From<GemColor> for WinNarrative {
    fn from(color: GemColor) -> Self {
        match color {
            GemColor::Orange => WinNarrative::Dimes,
            GemColor::Blue => WinNarrative::Beauty,
            GemColor::Green => WinNarrative::Precious,
        }
    }
}

impl WinNarrative {
    pub fn prompt(self) -> &'static str {
        match self {
            WinNarrative::Dimes => {
                "Piles of cash! Wait, this can't be the legendary treasure... what went wrong?"
            }
            WinNarrative::Beauty => {
                "Princess: Thank you for rescuing me. Did you find the treasure hidden here?"
            }
            WinNarrative::Precious => {
                "The treasure! They say a beautiful princess is imprisoned here too. Did you find her?"
            }
        }
    }

    pub fn button_label(self) -> &'static str {
        match self {
            WinNarrative::Dimes => "I will find the answer",
            WinNarrative::Beauty => "Go find the treasure",
            WinNarrative::Precious => "Go rescue the princess",
        }
    }
}
