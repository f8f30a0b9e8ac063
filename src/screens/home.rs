use serde::Serialize;
use std::fmt::Display;

use crate::models::Category;
use crate::navigation::Route;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub route: Route,
}

/// Static home menu, one entry per category
#[derive(Debug, Clone, Serialize)]
pub struct HomeMenu {
    pub header: &'static str,
    pub welcome: &'static str,
    pub province: &'static str,
    pub entries: Vec<MenuEntry>,
}

impl Default for HomeMenu {
    fn default() -> Self {
        Self {
            header: "SONGKHLA GUIDE",
            welcome: "ยินดีต้อนรับสู่",
            province: "จังหวัดสงขลา",
            entries: Category::ALL
                .into_iter()
                .map(|category| MenuEntry {
                    title: category.menu_title(),
                    icon: category.menu_icon(),
                    color: category.accent_color(),
                    route: Route::List(category),
                })
                .collect(),
        }
    }
}

impl HomeMenu {
    /// Route behind the 1-based menu position `choice`
    #[must_use]
    pub fn select(&self, choice: usize) -> Option<Route> {
        choice
            .checked_sub(1)
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.route)
    }
}

impl Display for HomeMenu {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "== {} ==", self.header)?;
        writeln!(f, "{}", self.welcome)?;
        writeln!(f, "{}", self.province)?;
        writeln!(f)?;
        for (index, entry) in self.entries.iter().enumerate() {
            writeln!(f, "  {}. {}", index + 1, entry.title)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_lists_every_category_in_order() {
        let menu = HomeMenu::default();
        let routes: Vec<Route> = menu.entries.iter().map(|e| e.route).collect();
        assert_eq!(routes, Category::ALL.map(Route::List));
        assert_eq!(menu.entries[3].title, "วัด / ศาสนสถาน");
    }

    #[test]
    fn test_select_is_one_based() {
        let menu = HomeMenu::default();
        assert_eq!(menu.select(1), Some(Route::List(Category::Attractions)));
        assert_eq!(menu.select(5), Some(Route::List(Category::Festivals)));
        assert_eq!(menu.select(0), None);
        assert_eq!(menu.select(6), None);
    }
}
