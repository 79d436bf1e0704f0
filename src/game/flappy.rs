use std::collections::vec_deque::VecDeque;

use log::{debug, info};
use quicksilver::geom::{Shape, Vector};
use quicksilver::graphics::Color;
use rand::rngs::StdRng;
use rand::Rng;

use crate::game::model::{Obstacle, Player};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Phase {
    Running,
    GameOver { ticks_left: usize },
}

#[derive(Debug, Clone)]
pub struct GameRules {
    pub gravity: f32,
    pub impulse_velocity: f32,
    pub bounce_damping: f32,
    pub scroll_speed: f32,
    pub spawn_interval_ticks: usize,
    pub gap_size: f32,
    pub obstacle_width: f32,
    pub top_height_min: usize,
    pub top_height_max: usize,
    pub player_size: f32,
    pub game_over_pause_ticks: usize,
}

pub struct FlappyGame {
    player: Player,
    obstacles: VecDeque<Obstacle>,
    score: u32,
    phase: Phase,
    spawn_counter: usize,
    game_size: Vector,
    rules: GameRules,
    rng: StdRng,
}

impl FlappyGame {
    pub fn new(game_size: Vector, rules: GameRules, rng: StdRng) -> FlappyGame {
        let player = spawn_player(game_size, &rules);
        FlappyGame {
            player,
            obstacles: VecDeque::new(),
            score: 0,
            phase: Phase::Running,
            spawn_counter: 0,
            game_size,
            rules,
            rng,
        }
    }

    pub fn update_frame(&mut self, flap: bool) {
        // everything freezes while the game-over text is up
        if let Phase::GameOver { ticks_left } = self.phase {
            if ticks_left > 1 {
                self.phase = Phase::GameOver {
                    ticks_left: ticks_left - 1,
                };
            } else {
                self.reset();
            }
            return;
        }

        if flap {
            self.player.apply_impulse(self.rules.impulse_velocity);
        }
        self.player.advance(
            self.rules.gravity,
            self.rules.bounce_damping,
            self.game_size.y,
        );

        self.spawn_counter += 1;
        if self.spawn_counter >= self.rules.spawn_interval_ticks {
            let obstacle = self.generate_obstacle();
            debug!(
                "spawned obstacle: top {} bottom {}",
                obstacle.top, obstacle.bot
            );
            self.obstacles.push_back(obstacle);
            self.spawn_counter = 0;
        }

        for obstacle in self.obstacles.iter_mut() {
            obstacle.advance(self.rules.scroll_speed);
        }
        while self
            .obstacles
            .front()
            .map_or(false, |obstacle| obstacle.off_screen())
        {
            self.obstacles.pop_front();
        }

        let left_edge = self.player.left_edge();
        for obstacle in self.obstacles.iter_mut() {
            if !obstacle.scored && obstacle.right_edge() < left_edge {
                obstacle.scored = true;
                self.score += 1;
            }
        }

        if self.check_collision() {
            info!("run over at score {}", self.score);
            self.phase = Phase::GameOver {
                ticks_left: self.rules.game_over_pause_ticks,
            };
        }
    }

    fn generate_obstacle(&mut self) -> Obstacle {
        let top = self
            .rng
            .gen_range(self.rules.top_height_min, self.rules.top_height_max) as f32;
        let bot = self.game_size.y - (top + self.rules.gap_size);
        Obstacle {
            pos_x: self.game_size.x,
            top,
            bot,
            width: self.rules.obstacle_width,
            scored: false,
            color: Color::WHITE,
        }
    }

    fn check_collision(&self) -> bool {
        let hitbox = self.player.hitbox();
        self.obstacles.iter().any(|obstacle| {
            hitbox.overlaps(&obstacle.top_hitbox())
                || hitbox.overlaps(&obstacle.bottom_hitbox(self.game_size.y))
        })
    }

    fn reset(&mut self) {
        debug!("resetting run");
        self.player = spawn_player(self.game_size, &self.rules);
        self.obstacles.clear();
        self.score = 0;
        self.spawn_counter = 0;
        self.phase = Phase::Running;
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn obstacles(&self) -> impl Iterator<Item = &Obstacle> + '_ {
        self.obstacles.iter()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_size(&self) -> Vector {
        self.game_size
    }
}

fn spawn_player(game_size: Vector, rules: &GameRules) -> Player {
    Player {
        pos_x: (game_size.x - rules.player_size) / 2f32,
        pos_y: (game_size.y - rules.player_size) / 2f32,
        vel_y: rules.impulse_velocity,
        size: rules.player_size,
        color: Color::WHITE,
    }
}
