use quicksilver::geom::Vector;
use quicksilver::graphics::Background::Img;
use quicksilver::graphics::{Color, Font, FontStyle};
use quicksilver::lifecycle::{Asset, Window};
use quicksilver::Result;

use crate::game::flappy::FlappyGame;

const DEBUG_TEXT_SIZE: f32 = 24f32;

pub struct DebugWindow;

impl DebugWindow {
    pub fn draw(
        &self,
        game: &FlappyGame,
        font: &mut Asset<Font>,
        window: &mut Window,
    ) -> Result<()> {
        font.execute(|font| {
            let style = FontStyle::new(DEBUG_TEXT_SIZE, Color::WHITE);

            let player = game.player();
            let text = format!(
                "pos: ({:.0}, {:.0}) vel: {:.1}",
                player.pos_x, player.pos_y, player.vel_y
            );
            let image = font.render(&text, &style)?;
            let mut area = image.area();
            area.pos = Vector::new(player.pos_x, player.pos_y - area.size.y - 4f32);
            window.draw(&area, Img(&image));

            for obstacle in game.obstacles() {
                let gap = game.game_size().y - (obstacle.top + obstacle.bot);
                let text = format!(
                    "top: {:.0} bottom: {:.0} gap: {:.0}",
                    obstacle.top, obstacle.bot, gap
                );
                let image = font.render(&text, &style)?;
                let mut area = image.area();
                area.pos = Vector::new(obstacle.pos_x, obstacle.top + 4f32);
                window.draw(&area, Img(&image));
            }
            Ok(())
        })
    }
}
