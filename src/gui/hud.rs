use quicksilver::geom::{Shape, Vector};
use quicksilver::graphics::Background::Img;
use quicksilver::graphics::{Color, Font, FontStyle};
use quicksilver::lifecycle::{Asset, Window};
use quicksilver::Result;

use crate::game::flappy::{FlappyGame, Phase};

const SCORE_TEXT_SIZE: f32 = 122f32;
const GAME_OVER_TEXT_SIZE: f32 = 74f32;

pub struct HudWindow;

impl HudWindow {
    pub fn draw(
        &self,
        game: &FlappyGame,
        font: &mut Asset<Font>,
        window: &mut Window,
    ) -> Result<()> {
        let game_size = game.game_size();
        let score = game.score();
        let game_over = match game.phase() {
            Phase::GameOver { .. } => true,
            Phase::Running => false,
        };

        font.execute(|font| {
            let score_image =
                font.render(&score.to_string(), &FontStyle::new(SCORE_TEXT_SIZE, Color::WHITE))?;
            let mut area = score_image.area();
            area.pos = Vector::new((game_size.x - area.size.x) / 2f32, 20f32);
            window.draw(&area, Img(&score_image));

            if game_over {
                let over_image =
                    font.render("Game Over", &FontStyle::new(GAME_OVER_TEXT_SIZE, Color::RED))?;
                let area = over_image
                    .area()
                    .with_center((game_size.x / 2f32, game_size.y / 2f32));
                window.draw(&area, Img(&over_image));
            }
            Ok(())
        })
    }
}
