use serde::{Deserialize, Serialize};

use crate::constants::WHEEL_SLOTS;

/// The wedges of the wheel, in the order they are painted on the wheel image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prize {
    Prize250,
    Prize500,
    Car,
    Prize50,
    Prize150,
    Chance,
    Prize300,
    Prize400,
}

/// What a wedge pays out once the wheel settles on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayoutClass {
    Cash(u32),
    CarChance,
    BasicChance,
}

impl Prize {
    pub const ALL: [Prize; WHEEL_SLOTS] = [
        Prize::Prize250,
        Prize::Prize500,
        Prize::Car,
        Prize::Prize50,
        Prize::Prize150,
        Prize::Chance,
        Prize::Prize300,
        Prize::Prize400,
    ];

    pub fn get(slot: usize) -> Option<Self> {
        Self::ALL.get(slot).copied()
    }

    /// Slots past the end of the wheel clamp to the last wedge, like the draw fallback.
    pub fn from_slot(slot: usize) -> Self {
        Self::ALL[slot.min(WHEEL_SLOTS - 1)]
    }

    pub fn slot(self) -> usize {
        self as usize
    }

    pub fn payout(self) -> PayoutClass {
        match self {
            Prize::Prize250 => PayoutClass::Cash(250),
            Prize::Prize500 => PayoutClass::Cash(500),
            Prize::Car => PayoutClass::CarChance,
            Prize::Prize50 => PayoutClass::Cash(50),
            Prize::Prize150 => PayoutClass::Cash(150),
            Prize::Chance => PayoutClass::BasicChance,
            Prize::Prize300 => PayoutClass::Cash(300),
            Prize::Prize400 => PayoutClass::Cash(400),
        }
    }
}

impl PayoutClass {
    pub fn is_chance(self) -> bool {
        matches!(self, PayoutClass::CarChance | PayoutClass::BasicChance)
    }

    pub fn amount(self) -> Option<u32> {
        match self {
            PayoutClass::Cash(amount) => Some(amount),
            _ => None,
        }
    }

    /// Sound played the moment the celebration starts. Only the extra-chance wedge has one.
    pub fn win_sound(self) -> Option<Sound> {
        match self {
            PayoutClass::BasicChance => Some(Sound::BigWin),
            _ => None,
        }
    }
}

/// Named sound resources shipped with the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sound {
    Spin,
    BigWin,
    Start,
    Welcome,
    CorrectChar,
    CorrectWord,
    WrongWord,
    Car,
}

impl Sound {
    /// Sounds the host can preview from the admin page, in display order.
    pub const ADMIN_PREVIEW: &'static [Sound] = &[
        Sound::Start,
        Sound::Welcome,
        Sound::CorrectChar,
        Sound::CorrectWord,
        Sound::WrongWord,
        Sound::Car,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            Sound::Spin => "spin.mp3",
            Sound::BigWin => "super.mp3",
            Sound::Start => "start.mp3",
            Sound::Welcome => "welcome.mp3",
            Sound::CorrectChar => "correct-char.mp3",
            Sound::CorrectWord => "correct-word.mp3",
            Sound::WrongWord => "wrong-word.mp3",
            Sound::Car => "car.mp3",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Sound::Spin => "Вращение барабана",
            Sound::BigWin => "Супер-приз",
            Sound::Start => "Начальная заставка",
            Sound::Welcome => "Представление участников",
            Sound::CorrectChar => "Правильная буква",
            Sound::CorrectWord => "Правильное слово",
            Sound::WrongWord => "Не правильное слово",
            Sound::Car => "Выиграна машина",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payout_table() {
        let payouts: Vec<PayoutClass> = Prize::ALL.iter().map(|prize| prize.payout()).collect();
        assert_eq!(
            payouts,
            vec![
                PayoutClass::Cash(250),
                PayoutClass::Cash(500),
                PayoutClass::CarChance,
                PayoutClass::Cash(50),
                PayoutClass::Cash(150),
                PayoutClass::BasicChance,
                PayoutClass::Cash(300),
                PayoutClass::Cash(400),
            ]
        );
    }

    #[test]
    fn test_slot_index_matches_wheel_order() {
        for (slot, prize) in Prize::ALL.iter().enumerate() {
            assert_eq!(prize.slot(), slot);
            assert_eq!(Prize::get(slot), Some(*prize));
        }
        assert_eq!(Prize::get(WHEEL_SLOTS), None);
        assert_eq!(Prize::from_slot(42), Prize::Prize400);
    }

    #[test]
    fn test_only_basic_chance_plays_big_win() {
        assert_eq!(Prize::Chance.payout().win_sound(), Some(Sound::BigWin));
        assert_eq!(Prize::Car.payout().win_sound(), None);
        assert_eq!(Prize::Prize500.payout().win_sound(), None);
        assert!(Prize::Car.payout().is_chance());
        assert!(!Prize::Prize50.payout().is_chance());
        assert_eq!(Prize::Prize150.payout().amount(), Some(150));
    }

    #[test]
    fn test_admin_preview_sounds() {
        let files: Vec<&str> = Sound::ADMIN_PREVIEW.iter().map(|s| s.file_name()).collect();
        assert_eq!(
            files,
            ["start.mp3", "welcome.mp3", "correct-char.mp3", "correct-word.mp3", "wrong-word.mp3", "car.mp3"]
        );
    }
}
