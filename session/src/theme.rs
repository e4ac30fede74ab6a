use serde::{Deserialize, Serialize};
use tripick_core::SymbolCatalog;

/// Named audio asset referenced by symbols through their sound names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SoundAsset {
    pub name: String,
    pub src: String,
}

/// A theme supplies the symbol catalog and the sound bank the presentation
/// layer plays from. Asset loading itself happens outside the engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub title: String,
    pub catalog: SymbolCatalog,
    pub sounds: Vec<SoundAsset>,
}

impl Theme {
    pub fn sound(&self, name: &str) -> Option<&SoundAsset> {
        self.sounds.iter().find(|sound| sound.name == name)
    }

    /// Sound names referenced by symbols but missing from the sound bank.
    /// Non-empty output means the theme will click or match silently.
    pub fn missing_sounds(&self) -> Vec<&str> {
        let mut missing = Vec::new();
        for (_, symbol) in self.catalog.iter() {
            for name in [symbol.click_sound.as_str(), symbol.triple_sound.as_str()] {
                if self.sound(name).is_none() && !missing.contains(&name) {
                    missing.push(name);
                }
            }
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tripick_core::Symbol;

    fn theme() -> Theme {
        Theme {
            title: "fish".into(),
            catalog: SymbolCatalog::new(vec![
                Symbol {
                    name: "carp".into(),
                    glyph: "🐟".into(),
                    click_sound: "button-click".into(),
                    triple_sound: "triple".into(),
                },
                Symbol {
                    name: "crab".into(),
                    glyph: "🦀".into(),
                    click_sound: "button-click".into(),
                    triple_sound: "fanfare".into(),
                },
            ]),
            sounds: vec![
                SoundAsset {
                    name: "button-click".into(),
                    src: "/sound-button-click.mp3".into(),
                },
                SoundAsset {
                    name: "triple".into(),
                    src: "/sound-triple.mp3".into(),
                },
            ],
        }
    }

    #[test]
    fn sounds_resolve_by_name() {
        let theme = theme();
        assert_eq!(theme.sound("triple").unwrap().src, "/sound-triple.mp3");
        assert!(theme.sound("nope").is_none());
    }

    #[test]
    fn missing_sounds_are_reported_once() {
        let theme = theme();
        assert_eq!(theme.missing_sounds(), ["fanfare"]);
    }
}
