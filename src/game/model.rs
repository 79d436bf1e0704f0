use quicksilver::geom::Rectangle;
use quicksilver::graphics::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub pos_x: f32,
    pub pos_y: f32,
    pub vel_y: f32,
    pub size: f32,
    pub color: Color,
}

impl Player {
    pub fn apply_impulse(&mut self, velocity: f32) {
        self.vel_y = velocity;
    }

    pub fn advance(&mut self, gravity: f32, damping: f32, floor: f32) {
        self.vel_y += gravity;
        self.pos_y += self.vel_y;
        // the top edge may leave the screen by at most one body height
        if self.pos_y <= -self.size {
            self.pos_y = -self.size;
        } else if self.pos_y + self.size >= floor {
            self.pos_y = floor - self.size;
            self.vel_y = -self.vel_y * damping;
        }
    }

    pub fn left_edge(&self) -> f32 {
        self.pos_x
    }

    pub fn hitbox(&self) -> Rectangle {
        Rectangle::new((self.pos_x, self.pos_y), (self.size, self.size))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub pos_x: f32,
    pub top: f32,
    pub bot: f32,
    pub width: f32,
    pub scored: bool,
    pub color: Color,
}

impl Obstacle {
    pub fn advance(&mut self, speed: f32) {
        self.pos_x -= speed;
    }

    pub fn right_edge(&self) -> f32 {
        self.pos_x + self.width
    }

    pub fn off_screen(&self) -> bool {
        self.right_edge() < 0f32
    }

    pub fn top_hitbox(&self) -> Rectangle {
        Rectangle::new((self.pos_x, 0f32), (self.width, self.top))
    }

    pub fn bottom_hitbox(&self, floor: f32) -> Rectangle {
        Rectangle::new((self.pos_x, floor - self.bot), (self.width, self.bot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_player() -> Player {
        Player {
            pos_x: 450f32,
            pos_y: 500f32,
            vel_y: 0f32,
            size: 100f32,
            color: Color::WHITE,
        }
    }

    #[test]
    fn impulse_overrides_current_velocity() {
        let mut player = test_player();
        player.vel_y = 42f32;

        player.apply_impulse(-5f32);

        assert_eq!(player.vel_y, -5f32);
    }

    #[test]
    fn advance_bounces_off_floor_with_damping() {
        let mut player = test_player();
        player.pos_y = 890f32;
        player.vel_y = 10f32;

        player.advance(0.2f32, 0.75f32, 1000f32);

        assert_eq!(player.pos_y, 900f32);
        assert!((player.vel_y + 10.2f32 * 0.75f32).abs() < 1e-4);
    }

    #[test]
    fn advance_clamps_at_ceiling_without_touching_velocity() {
        let mut player = test_player();
        player.pos_y = -95f32;
        player.vel_y = -10f32;

        player.advance(0.2f32, 0.75f32, 1000f32);

        assert_eq!(player.pos_y, -100f32);
        assert!((player.vel_y + 9.8f32).abs() < 1e-4);
    }

    #[test]
    fn free_flight_returns_to_start_height() {
        let mut player = test_player();
        player.apply_impulse(-5f32);

        let mut peak = player.pos_y;
        for _ in 0..49 {
            player.advance(0.2f32, 0.75f32, 1000f32);
            peak = f32::min(peak, player.pos_y);
        }

        assert!((player.pos_y - 500f32).abs() < 0.01);
        assert!(peak <= 445f32);
    }

    #[test]
    fn obstacle_leaves_screen_after_expected_ticks() {
        let mut obstacle = Obstacle {
            pos_x: 1000f32,
            top: 300f32,
            bot: 300f32,
            width: 100f32,
            scored: false,
            color: Color::WHITE,
        };

        for _ in 0..366 {
            obstacle.advance(3f32);
        }
        assert!(!obstacle.off_screen());

        obstacle.advance(3f32);
        assert!(obstacle.off_screen());
    }

    #[test]
    fn hitboxes_share_horizontal_extent() {
        let obstacle = Obstacle {
            pos_x: 200f32,
            top: 150f32,
            bot: 450f32,
            width: 100f32,
            scored: false,
            color: Color::WHITE,
        };

        let top = obstacle.top_hitbox();
        let bot = obstacle.bottom_hitbox(1000f32);

        assert_eq!(top.pos.x, bot.pos.x);
        assert_eq!(top.size.x, bot.size.x);
        assert_eq!(top.size.y, 150f32);
        assert_eq!(bot.pos.y, 550f32);
        assert_eq!(bot.size.y, 450f32);
    }
}
