//! Bottom navigation bar.

use egui::{RichText, Ui, Vec2};

use crate::ui::screens::Screen;
use crate::ui::theme::Brand;

/// Tabs shown in the bar, left to right.
pub const NAV_ITEMS: [(Screen, &str, &str); 4] = [
    (Screen::Explore, "🧭", "Explorar"),
    (Screen::Favorites, "♥", "Favoritos"),
    (Screen::Trips, "🧳", "Pedidos"),
    (Screen::Profile, "👤", "Perfil"),
];

/// Bottom navigation bar widget.
pub struct BottomNav;

impl BottomNav {
    /// Render the bar and return the tab the user picked.
    pub fn show(ui: &mut Ui, active: Screen) -> Option<Screen> {
        let mut next = None;
        let item_width = ui.available_width() / NAV_ITEMS.len() as f32;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;

            for (screen, icon, label) in NAV_ITEMS {
                let color = if screen == active {
                    Brand::ACCENT
                } else {
                    ui.visuals().weak_text_color()
                };

                let text = RichText::new(format!("{}\n{}", icon, label))
                    .size(13.0)
                    .color(color);

                let clicked = ui
                    .add_sized(
                        Vec2::new(item_width, 48.0),
                        egui::Button::new(text).frame(false),
                    )
                    .clicked();

                if clicked && screen != active {
                    next = Some(screen);
                }
            }
        });

        next
    }
}
