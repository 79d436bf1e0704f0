use quicksilver::graphics::Background::Col;
use quicksilver::lifecycle::Window;

use crate::game::flappy::FlappyGame;

pub struct GameWindow;

impl GameWindow {
    pub fn draw(&self, game: &FlappyGame, window: &mut Window) {
        let floor = game.game_size().y;
        for obstacle in game.obstacles() {
            window.draw(&obstacle.top_hitbox(), Col(obstacle.color));
            window.draw(&obstacle.bottom_hitbox(floor), Col(obstacle.color));
        }
        let player = game.player();
        window.draw(&player.hitbox(), Col(player.color));
    }
}
