//! A whole list screen: header, weather badge and cards

use serde::Serialize;
use std::fmt::Display;

use super::Card;
use crate::models::Category;
use crate::weather::BadgeState;

pub const BACK_LABEL: &str = "‹ กลับ";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreenView {
    pub category: Category,
    pub title: String,
    pub subtitle: Option<String>,
    pub weather: BadgeState,
    pub cards: Vec<Card>,
    pub back_label: String,
}

impl ScreenView {
    #[must_use]
    pub fn new(category: Category, weather: BadgeState, cards: Vec<Card>) -> Self {
        Self {
            category,
            title: category.title().to_string(),
            subtitle: category.subtitle().map(str::to_string),
            weather,
            cards,
            back_label: BACK_LABEL.to_string(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Display for ScreenView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.back_label)?;
        writeln!(f, "== {} ==", self.title)?;
        if let Some(subtitle) = &self.subtitle {
            writeln!(f, "{subtitle}")?;
        }
        writeln!(f, "{}", self.weather)?;
        writeln!(f)?;
        for (index, card) in self.cards.iter().enumerate() {
            write!(f, "{}. {}", index + 1, card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_screen_keeps_header() {
        let view = ScreenView::new(Category::Temples, BadgeState::Loading, Vec::new());
        assert!(view.is_empty());
        let rendered = view.to_string();
        assert!(rendered.contains("วัดและศาสนสถาน"));
        assert!(rendered.contains(BACK_LABEL));
    }

    #[test]
    fn test_festival_screen_has_subtitle() {
        let view = ScreenView::new(Category::Festivals, BadgeState::Loading, Vec::new());
        assert_eq!(view.subtitle.as_deref(), Some("เทศกาลและกิจกรรมสำคัญในสงขลา"));
    }
}
