mod game;
mod gui;

use quicksilver::{
    geom::Vector,
    graphics::{Color, Font},
    input::{ButtonState, Key},
    lifecycle::{run, Asset, Event, Settings, State, Window},
    Result,
};

use crate::game::flappy::{FlappyGame, GameRules};
use crate::gui::{DebugWindow, GameWindow, HudWindow};
use log::{log_enabled, Level};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SCREEN_SIZE_PX: usize = 1000;

const BACKGROUND: Color = Color {
    r: 0.196,
    g: 0.588,
    b: 0.98,
    a: 1.0,
};

struct Flappy {
    game: FlappyGame,
    flap_queued: bool,
    font: Asset<Font>,
    game_window: GameWindow,
    hud_window: HudWindow,
    debug_window: DebugWindow,
}

impl State for Flappy {
    fn new() -> Result<Self> {
        let rules = GameRules {
            gravity: 0.2,
            impulse_velocity: -5.0,
            bounce_damping: 0.75,
            scroll_speed: 3.0,
            spawn_interval_ticks: 108,
            gap_size: 400.0,
            obstacle_width: 100.0,
            top_height_min: 100,
            top_height_max: 500,
            player_size: 100.0,
            game_over_pause_ticks: 120,
        };

        let game_size = Vector::new(SCREEN_SIZE_PX as f32, SCREEN_SIZE_PX as f32);
        let game = FlappyGame::new(game_size, rules, StdRng::from_entropy());
        let font = Asset::new(Font::load("font.ttf"));

        Ok(Self {
            game,
            flap_queued: false,
            font,
            game_window: GameWindow,
            hud_window: HudWindow,
            debug_window: DebugWindow,
        })
    }

    fn event(&mut self, event: &Event, _window: &mut Window) -> Result<()> {
        if let Event::Key(Key::Space, ButtonState::Pressed) = event {
            self.flap_queued = true;
        }
        Ok(())
    }

    fn update(&mut self, _window: &mut Window) -> Result<()> {
        let flap = self.flap_queued;
        self.flap_queued = false;
        self.game.update_frame(flap);
        Ok(())
    }

    fn draw(&mut self, window: &mut Window) -> Result<()> {
        window.clear(BACKGROUND)?;
        self.game_window.draw(&self.game, window);
        self.hud_window.draw(&self.game, &mut self.font, window)?;
        if log_enabled!(Level::Debug) {
            self.debug_window.draw(&self.game, &mut self.font, window)?;
        }
        Ok(())
    }
}

fn main() {
    env_logger::init();
    let settings = Settings {
        update_rate: 1000.0 / 60.0,
        ..Settings::default()
    };
    run::<Flappy>(
        "Flappy",
        Vector::new(SCREEN_SIZE_PX as f32, SCREEN_SIZE_PX as f32),
        settings,
    );
}
